//! Shortest paths on the move graph.

use std::collections::{HashMap, VecDeque};

use tessera_core::{Cell, Move, MoveDir};
use tessera_grid::World;
use tessera_moves::is_legal_step;

use crate::error::PlanError;

/// Shortest sequence of single-cube moves taking the cube at `src` to
/// the empty cell `dst`.
///
/// The mover is lifted out of the configuration first, so move legality
/// cannot let it slide along itself and the rest of the cubes form a
/// static scaffold; with the scaffold fixed, connectivity holds at every
/// intermediate step by construction. BFS expands the twelve directions
/// in declaration order, so identical inputs plan identical paths. The
/// mover is restored (with its original record) before returning,
/// whether or not a path exists.
pub fn shortest_move_path(world: &mut World, src: Cell, dst: Cell) -> Result<Vec<Move>, PlanError> {
    if src == dst {
        return Ok(Vec::new());
    }
    if world.occupied(dst) {
        return Err(PlanError::Grid(tessera_core::GridError::OccupiedCell(dst)));
    }

    let mover = world.remove_cube(src)?;

    let mut parent: HashMap<Cell, Move> = HashMap::new();
    let mut queue = VecDeque::new();
    queue.push_back(src);
    let mut reached = false;

    'search: while let Some(cell) = queue.pop_front() {
        for dir in MoveDir::ALL {
            let mv = Move::new(cell, dir);
            if !is_legal_step(world, mv) {
                continue;
            }
            let next = mv.target();
            if next == src || parent.contains_key(&next) {
                continue;
            }
            parent.insert(next, mv);
            if next == dst {
                reached = true;
                break 'search;
            }
            queue.push_back(next);
        }
    }

    let restored = world.insert_cube(mover);

    if !reached {
        restored?;
        return Err(PlanError::NoMovePath { from: src, to: dst });
    }

    let mut path = Vec::new();
    let mut cursor = dst;
    while cursor != src {
        let Some(&mv) = parent.get(&cursor) else {
            restored?;
            return Err(PlanError::NoMovePath { from: src, to: dst });
        };
        path.push(mv);
        cursor = mv.from;
    }
    path.reverse();
    restored?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::{ClassTag, CubeId};
    use tessera_grid::Classification;
    use tessera_moves::is_valid;

    fn c(x: i32, y: i32) -> Cell {
        Cell::new(x, y)
    }

    fn world(cells: &[(i32, i32)]) -> World {
        World::from_cells(cells.iter().map(|&(x, y)| c(x, y))).unwrap()
    }

    #[test]
    fn trivial_path_is_empty() {
        let mut w = world(&[(0, 0), (1, 0)]);
        assert_eq!(shortest_move_path(&mut w, c(1, 0), c(1, 0)).unwrap(), vec![]);
    }

    #[test]
    fn end_of_line_walks_onto_the_top() {
        let mut w = world(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        let path = shortest_move_path(&mut w, c(4, 0), c(0, 1)).unwrap();
        assert_eq!(path.first().map(|m| m.from), Some(c(4, 0)));
        assert_eq!(path.last().map(|m| m.target()), Some(c(0, 1)));
        // Pivot onto the top, then slide west along the line: 4 moves.
        assert_eq!(path.len(), 4);

        // Each emitted move is fully valid when executed in order.
        for mv in path {
            assert!(is_valid(&w, mv), "{mv} invalid at execution time");
            w.move_cube(mv.from, mv.target()).unwrap();
        }
        assert!(w.occupied(c(0, 1)));
    }

    #[test]
    fn unreachable_target_reports_no_move_path() {
        let mut w = world(&[(0, 0), (1, 0)]);
        let err = shortest_move_path(&mut w, c(1, 0), c(9, 9)).unwrap_err();
        assert_eq!(
            err,
            PlanError::NoMovePath {
                from: c(1, 0),
                to: c(9, 9)
            }
        );
        // The mover is back where it started.
        assert!(w.occupied(c(1, 0)));
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn occupied_target_is_a_grid_error() {
        let mut w = world(&[(0, 0), (1, 0)]);
        assert!(matches!(
            shortest_move_path(&mut w, c(1, 0), c(0, 0)),
            Err(PlanError::Grid(_))
        ));
    }

    #[test]
    fn mover_restoration_keeps_the_record() {
        let mut w = world(&[(0, 0), (1, 0), (2, 0)]);
        let marks = Classification {
            tags: vec![ClassTag::LinkStable; 3],
            chunks: vec![None; 3],
            boundary: vec![true; 3],
        };
        w.apply_classification(&marks);

        let _ = shortest_move_path(&mut w, c(2, 0), c(9, 9));
        let id = w.cube_at(c(2, 0)).unwrap();
        let cube = w.cube(id).unwrap();
        assert_eq!(cube.tag, ClassTag::LinkStable);
        assert_eq!(cube.reset_pos, c(2, 0));
    }

    #[test]
    fn identical_inputs_plan_identical_paths() {
        let cells = [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut a = world(&cells);
        let mut b = world(&cells);
        let pa = shortest_move_path(&mut a, c(2, 2), c(3, 0)).unwrap();
        let pb = shortest_move_path(&mut b, c(2, 2), c(3, 0)).unwrap();
        assert_eq!(pa, pb);
    }

    #[test]
    fn path_length_is_the_bfs_distance() {
        // Around a 2x2 block, the far corner is reachable but never in
        // fewer than two moves.
        let mut w = world(&[(0, 0), (1, 0), (0, 1), (1, 1), (2, 0)]);
        let path = shortest_move_path(&mut w, c(2, 0), c(2, 1)).unwrap();
        assert_eq!(path.len(), 1);
        let path = shortest_move_path(&mut w, c(2, 0), c(1, 2)).unwrap();
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn mover_cannot_support_itself() {
        // A lone pair: the second cube can pivot around its partner but
        // can never reach a cell two steps out, because the scaffold is
        // a single cube once the mover is lifted.
        let mut w = world(&[(0, 0), (1, 0)]);
        assert!(shortest_move_path(&mut w, c(1, 0), c(-1, 0)).is_ok());
        assert!(matches!(
            shortest_move_path(&mut w, c(1, 0), c(3, 0)),
            Err(PlanError::NoMovePath { .. })
        ));
    }

    #[test]
    fn restored_mover_may_shift_ids_but_not_cells() {
        let mut w = world(&[(0, 0), (1, 0), (2, 0)]);
        let before = w.occupied_cells();
        let _ = shortest_move_path(&mut w, c(1, 0), c(9, 9));
        assert_eq!(w.occupied_cells(), before);
        // Ids compacted then re-appended: the mover is the last id now.
        assert_eq!(w.cube_at(c(1, 0)), Some(CubeId(2)));
    }
}
