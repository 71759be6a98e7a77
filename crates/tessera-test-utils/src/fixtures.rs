//! Named configuration fixtures.

use tessera_core::{Cell, Compass};
use tessera_grid::World;

fn build<I: IntoIterator<Item = (i32, i32)>>(cells: I) -> World {
    let world = World::from_cells(cells.into_iter().map(|(x, y)| Cell::new(x, y)));
    match world {
        Ok(world) => world,
        // Fixture definitions never collide.
        Err(err) => unreachable!("fixture built a colliding world: {err}"),
    }
}

/// A horizontal line of `n` cubes starting at the origin.
pub fn line(n: i32) -> World {
    build((0..n).map(|x| (x, 0)))
}

/// A vertical line of `n` cubes starting at the origin.
pub fn vertical_line(n: i32) -> World {
    build((0..n).map(|y| (0, y)))
}

/// A full `w` by `h` rectangle anchored at the origin.
pub fn block(w: i32, h: i32) -> World {
    build((0..h).flat_map(move |y| (0..w).map(move |x| (x, y))))
}

/// The five-cube U: a bottom row of three with arms on both ends.
pub fn u_shape() -> World {
    build([(0, 0), (1, 0), (2, 0), (0, 1), (2, 1)])
}

/// A 2x2 block with a `tail`-cube line growing east.
pub fn lollipop(tail: i32) -> World {
    build(
        [(0, 0), (1, 0), (0, 1), (1, 1)]
            .into_iter()
            .chain((0..tail).map(|i| (2 + i, 0))),
    )
}

/// The canonical staircase of `n` cubes anchored at the origin.
pub fn staircase(n: usize) -> World {
    let mut cells = Vec::with_capacity(n);
    let mut d = 0i32;
    while cells.len() < n {
        let mut y = 0i32;
        while y <= d && cells.len() < n {
            cells.push((d - y, y));
            y += 1;
        }
        d += 1;
    }
    build(cells)
}

/// A comb: a spine along the bottom with teeth of `tooth` cubes rising
/// from every other column.
pub fn comb(teeth: i32, tooth: i32) -> World {
    let spine_len = teeth * 2 - 1;
    build(
        (0..spine_len).map(|x| (x, 0)).chain(
            (0..teeth)
                .flat_map(move |t| (1..=tooth).map(move |y| (t * 2, y))),
        ),
    )
}

/// A deterministic connected scatter of `n` cubes grown from a seed.
///
/// A tiny multiplicative congruential sequence picks which frontier
/// cube to extend; identical `(n, seed)` always produce the identical
/// shape, so tests can rely on the layout without spelling it out.
pub fn scatter(n: usize, seed: u64) -> World {
    let mut state = seed.wrapping_mul(2).wrapping_add(1);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };

    let mut cells: Vec<Cell> = vec![Cell::new(0, 0)];
    while cells.len() < n {
        let base = cells[next() % cells.len()];
        let dir = Compass::CARDINALS[next() % 4];
        let cand = base.step(dir);
        if !cells.contains(&cand) {
            cells.push(cand);
        }
    }
    build(cells.into_iter().map(|c| (c.x, c.y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_have_the_advertised_sizes() {
        assert_eq!(line(5).len(), 5);
        assert_eq!(vertical_line(4).len(), 4);
        assert_eq!(block(3, 3).len(), 9);
        assert_eq!(u_shape().len(), 5);
        assert_eq!(lollipop(2).len(), 6);
        assert_eq!(staircase(7).len(), 7);
        assert_eq!(comb(3, 2).len(), 11);
    }

    #[test]
    fn scatter_is_deterministic_and_connected() {
        let a = scatter(24, 7);
        let b = scatter(24, 7);
        assert_eq!(a.occupied_cells(), b.occupied_cells());
        assert_ne!(
            scatter(24, 8).occupied_cells(),
            a.occupied_cells(),
            "different seeds should scatter differently"
        );
    }
}
