//! Bridge sizing helpers for the gather phase.

use std::collections::VecDeque;

use tessera_core::{Compass, CubeId};
use tessera_grid::World;

/// Cubes reachable from the root with `b` deleted, minus one.
///
/// The root is the downmost-leftmost cube; when `b` *is* the root the
/// count starts from the lowest-numbered other cube instead. Gather uses
/// this to size the material available for building a bridge out of `b`'s
/// side of the configuration.
pub fn bridge_capacity(world: &World, b: CubeId) -> usize {
    let n = world.len();
    if n == 0 {
        return 0;
    }
    let start = match world.downmost_leftmost() {
        Some(root) if root != b => root,
        _ => match world.ids().find(|&id| id != b) {
            Some(id) => id,
            None => return 0,
        },
    };

    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();
    visited[start.index()] = true;
    queue.push_back(start);
    let mut count = 1usize;
    while let Some(id) = queue.pop_front() {
        let Some(cube) = world.cube(id) else { continue };
        for dir in Compass::CARDINALS {
            let Some(next) = world.cube_at(cube.pos.step(dir)) else {
                continue;
            };
            if next == b || visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            count += 1;
            queue.push_back(next);
        }
    }
    count.saturating_sub(1)
}

/// The bridge limit `L = 2 * (width + height)` of the bounding box.
///
/// Gather never extends a bridge further than this.
pub fn bridge_limit(world: &World) -> i64 {
    match world.bounds() {
        Some(b) => 2 * (b.width() + b.height()),
        None => 0,
    }
}
