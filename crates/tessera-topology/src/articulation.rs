//! Cut-cube detection via Hopcroft–Tarjan low-link analysis.

use tessera_core::{Compass, CubeId};
use tessera_grid::World;

const UNVISITED: u32 = u32::MAX;

/// One frame of the explicit DFS stack.
struct Frame {
    id: usize,
    parent: usize,
    /// Next cardinal direction to expand, as an index into
    /// [`Compass::CARDINALS`].
    next_dir: usize,
}

/// Per-cube stability flags: `stable[i]` is true when removing cube `i`
/// keeps the configuration connected.
///
/// A non-root cube is a cut cube iff some DFS child has
/// `low[child] >= depth[cube]`; a DFS root is a cut cube iff it has two
/// or more DFS children. The DFS runs on an explicit stack: the
/// recursion depth would otherwise be the cube count, which overflows
/// the machine stack on large instances.
pub fn stable_cubes(world: &World) -> Vec<bool> {
    let n = world.len();
    let mut cut = vec![false; n];
    let mut depth = vec![UNVISITED; n];
    let mut low = vec![0u32; n];

    for root in 0..n {
        if depth[root] != UNVISITED {
            continue;
        }
        depth[root] = 0;
        low[root] = 0;
        let mut root_children = 0usize;
        let mut stack = vec![Frame {
            id: root,
            parent: usize::MAX,
            next_dir: 0,
        }];

        while !stack.is_empty() {
            let top = stack.len() - 1;
            let v = stack[top].id;
            let parent = stack[top].parent;

            if stack[top].next_dir < Compass::CARDINALS.len() {
                let dir = Compass::CARDINALS[stack[top].next_dir];
                stack[top].next_dir += 1;

                let Some(cube) = world.cube(CubeId(v as u32)) else {
                    continue;
                };
                let Some(next) = world.cube_at(cube.pos.step(dir)) else {
                    continue;
                };
                let w = next.index();
                if w == parent {
                    // The grid graph has no parallel edges, so skipping
                    // the parent once is exact.
                    continue;
                }
                if depth[w] == UNVISITED {
                    depth[w] = depth[v] + 1;
                    low[w] = depth[w];
                    if v == root {
                        root_children += 1;
                    }
                    stack.push(Frame {
                        id: w,
                        parent: v,
                        next_dir: 0,
                    });
                } else {
                    low[v] = low[v].min(depth[w]);
                }
            } else {
                stack.pop();
                if let Some(parent_frame) = stack.last() {
                    let p = parent_frame.id;
                    low[p] = low[p].min(low[v]);
                    if p != root && low[v] >= depth[p] {
                        cut[p] = true;
                    }
                }
            }
        }

        if root_children >= 2 {
            cut[root] = true;
        }
    }

    cut.into_iter().map(|c| !c).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Cell;

    fn world(cells: &[(i32, i32)]) -> World {
        World::from_cells(cells.iter().map(|&(x, y)| Cell::new(x, y))).unwrap()
    }

    fn stability(cells: &[(i32, i32)]) -> Vec<bool> {
        stable_cubes(&world(cells))
    }

    #[test]
    fn line_interior_cubes_are_cut() {
        let stable = stability(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        assert_eq!(stable, vec![true, false, false, false, true]);
    }

    #[test]
    fn block_has_no_cut_cubes() {
        let stable = stability(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(stable, vec![true; 4]);
    }

    #[test]
    fn u_shape_bottom_row_is_cut() {
        // Arms at (0,1) and (2,1); the whole bottom row articulates.
        let stable = stability(&[(0, 0), (1, 0), (2, 0), (0, 1), (2, 1)]);
        assert_eq!(stable, vec![false, false, false, true, true]);
    }

    #[test]
    fn cross_center_is_the_only_cut_cube() {
        let stable = stability(&[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]);
        assert_eq!(stable, vec![true, true, false, true, true]);
    }

    #[test]
    fn ring_is_fully_stable() {
        // 3x3 ring without its center: removing any one cube leaves a path.
        let stable = stability(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (2, 1),
            (2, 2),
            (1, 2),
            (0, 2),
            (0, 1),
        ]);
        assert_eq!(stable, vec![true; 8]);
    }

    #[test]
    fn singleton_and_pair_are_stable() {
        assert_eq!(stability(&[(0, 0)]), vec![true]);
        assert_eq!(stability(&[(0, 0), (1, 0)]), vec![true, true]);
    }

    #[test]
    fn matches_removal_check_on_a_lollipop() {
        // Block plus tail: cross-check every cube against a direct
        // connectivity probe with that cube skipped.
        let cells = [(0, 0), (1, 0), (0, 1), (1, 1), (2, 0), (3, 0)];
        let w = world(&cells);
        let stable = stable_cubes(&w);
        for id in w.ids() {
            let expect = crate::connectivity::is_connected_skipping(&w, Some(id));
            assert_eq!(stable[id.index()], expect, "cube {id} disagrees");
        }
    }

    // ── Property: low-link agrees with brute-force removal ──────

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn agrees_with_skip_connectivity_on_blobs(
            steps in proptest::collection::vec((0u8..4, 0usize..64), 1..40)
        ) {
            let mut cells: Vec<Cell> = vec![Cell::new(0, 0)];
            for (dir, pick) in steps {
                let base = cells[pick % cells.len()];
                let next = base.step(Compass::CARDINALS[dir as usize % 4]);
                if !cells.contains(&next) {
                    cells.push(next);
                }
            }
            let w = World::from_cells(cells).unwrap();
            let stable = stable_cubes(&w);
            for id in w.ids() {
                let expect = crate::connectivity::is_connected_skipping(&w, Some(id));
                prop_assert_eq!(stable[id.index()], expect, "cube {} disagrees", id);
            }
        }
    }
}
