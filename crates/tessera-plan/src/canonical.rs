//! The canonical compact staircase and the xy-monotone predicate.

use tessera_core::{Cell, Compass};
use tessera_grid::World;

/// The first `n` cells of the canonical staircase anchored at `anchor`.
///
/// Cells fill anti-diagonals `d = 0, 1, 2, …` of the quadrant north-east
/// of the anchor; within a diagonal, from the bottom upward. Every
/// prefix of the sequence is 4-connected and xy-monotone, which is what
/// lets the phases fill slots one cube at a time without ever growing an
/// illegal intermediate shape.
pub fn canonical_staircase(anchor: Cell, n: usize) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(n);
    let mut d = 0i32;
    while cells.len() < n {
        let mut y = 0i32;
        while y <= d && cells.len() < n {
            cells.push(anchor.offset(d - y, y));
            y += 1;
        }
        d += 1;
    }
    cells
}

/// The xy-monotone predicate of the compact phase's postcondition.
///
/// Every cube not on the bounding box's min-x column or min-y row must
/// have both a western and a southern neighbour.
pub fn is_xy_monotone(world: &World) -> bool {
    let Some(bounds) = world.bounds() else {
        return true;
    };
    world.cells().all(|cell| {
        cell.x == bounds.min_x
            || cell.y == bounds.min_y
            || (world.occupied(cell.step(Compass::W)) && world.occupied(cell.step(Compass::S)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Cell {
        Cell::new(x, y)
    }

    #[test]
    fn five_cube_staircase_matches_the_reference_shape() {
        let cells = canonical_staircase(c(0, 0), 5);
        assert_eq!(cells, vec![c(0, 0), c(1, 0), c(0, 1), c(2, 0), c(1, 1)]);
    }

    #[test]
    fn staircase_respects_the_anchor() {
        let cells = canonical_staircase(c(-2, 3), 3);
        assert_eq!(cells, vec![c(-2, 3), c(-1, 3), c(-2, 4)]);
    }

    #[test]
    fn every_prefix_is_connected_and_monotone() {
        let cells = canonical_staircase(c(0, 0), 21);
        for n in 1..=cells.len() {
            let w = World::from_cells(cells[..n].iter().copied()).unwrap();
            assert!(
                tessera_topology::is_connected(&w),
                "prefix of {n} disconnected"
            );
            assert!(is_xy_monotone(&w), "prefix of {n} not monotone");
        }
    }

    #[test]
    fn monotone_accepts_blocks_and_rejects_overhangs() {
        let block = World::from_cells([c(0, 0), c(1, 0), c(0, 1), c(1, 1)]).unwrap();
        assert!(is_xy_monotone(&block));

        // An overhang: (1,1) has no southern neighbour.
        let overhang = World::from_cells([c(0, 0), c(0, 1), c(1, 1)]).unwrap();
        assert!(!is_xy_monotone(&overhang));

        assert!(is_xy_monotone(&World::new()));
    }
}
