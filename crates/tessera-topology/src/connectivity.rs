//! BFS connectivity with an optional skipped cube.

use std::collections::VecDeque;

use tessera_core::{Compass, CubeId};
use tessera_grid::World;

/// Whether the occupied cells form one 4-connected component.
///
/// Diagonal adjacency does not count. Empty and single-cube
/// configurations are trivially connected.
pub fn is_connected(world: &World) -> bool {
    is_connected_skipping(world, None)
}

/// Connectivity with `skip` treated as absent.
///
/// Used by move validation: a move is only legal when the configuration
/// minus the moving cube stays connected.
pub fn is_connected_skipping(world: &World, skip: Option<CubeId>) -> bool {
    let n = world.len();
    let skipping = skip.map(|id| id.index() < n).unwrap_or(false);
    let total = if skipping { n - 1 } else { n };
    if total <= 1 {
        return true;
    }

    // Start from cube 0, or cube 1 when cube 0 is the skipped one.
    let start = match skip {
        Some(CubeId(0)) => CubeId(1),
        _ => CubeId(0),
    };

    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();
    visited[start.index()] = true;
    queue.push_back(start);
    let mut count = 1usize;

    while let Some(id) = queue.pop_front() {
        let pos = match world.cube(id) {
            Some(cube) => cube.pos,
            None => continue,
        };
        for dir in Compass::CARDINALS {
            let Some(next) = world.cube_at(pos.step(dir)) else {
                continue;
            };
            if Some(next) == skip || visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            count += 1;
            queue.push_back(next);
        }
    }

    count == total
}
