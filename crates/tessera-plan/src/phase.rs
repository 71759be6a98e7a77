//! The phase contract and shared selection machinery.

use std::collections::{BTreeSet, VecDeque};

use tessera_core::{Cell, Compass, CubeId, Move};
use tessera_grid::World;
use tessera_topology::is_connected_skipping;

use crate::error::PlanError;
use crate::planner::shortest_move_path;

/// A lazy move generator driven by the [`crate::Stepper`].
///
/// `next_move` may inspect and re-mark the configuration between yields,
/// but must not retain cube identifiers across calls: the planner's
/// remove/restore cycle shifts them. Phases therefore track cells, not
/// ids.
pub trait MovePhase {
    /// Phase name for diagnostics and transcripts.
    fn name(&self) -> &'static str;

    /// The next move, or `None` when the phase's postcondition holds.
    fn next_move(&mut self, world: &mut World) -> Result<Option<Move>, PlanError>;
}

/// Queue of already-planned moves a phase drains before re-planning.
#[derive(Debug, Default)]
pub struct PendingMoves(VecDeque<Move>);

impl PendingMoves {
    /// Take the next queued move.
    pub fn pop(&mut self) -> Option<Move> {
        self.0.pop_front()
    }

    /// Queue a planned path.
    pub fn extend(&mut self, path: Vec<Move>) {
        self.0.extend(path);
    }

    /// Whether moves are still queued.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Route `from` to the lexicographically least reachable empty slot.
///
/// Slots are tried in `(y, x)` order; a slot the BFS cannot reach is
/// skipped. `max_len` caps the accepted path length (the gather phase's
/// bridge limit); `None` lifts the cap. Returns `None` when no slot
/// works at all.
pub fn route_to_first_open_slot(
    world: &mut World,
    from: Cell,
    slots: &[Cell],
    max_len: Option<i64>,
) -> Option<Vec<Move>> {
    let occupied: BTreeSet<Cell> = world.occupied_cells();
    let mut open: Vec<Cell> = slots
        .iter()
        .copied()
        .filter(|slot| !occupied.contains(slot))
        .collect();
    open.sort_by(|a, b| a.cmp_yx(*b));

    for slot in open {
        match shortest_move_path(world, from, slot) {
            Ok(path) => {
                if let Some(cap) = max_len {
                    if path.len() as i64 > cap {
                        continue;
                    }
                }
                return Some(path);
            }
            Err(PlanError::NoMovePath { .. }) => continue,
            Err(_) => return None,
        }
    }
    None
}

/// Whether the cube at `cell` can be lifted without disconnecting the
/// remaining configuration.
pub fn removable(world: &World, cell: Cell) -> bool {
    match world.cube_at(cell) {
        Some(id) => is_connected_skipping(world, Some(id)),
        None => false,
    }
}

/// Fill a blocked open slot from one of its own occupied neighbours.
///
/// When a slot is walled in by cubes that are themselves in canonical
/// position, no outside candidate can ever route into it — but lifting
/// an adjacent cube opens the pocket. Neighbours are only taken from
/// outside the slot set or from `(y, x)`-greater slots, so each pry
/// strictly lowers the filled-slot profile and cannot cycle.
pub fn pry_open_slot(world: &mut World, slots: &[Cell]) -> Option<Vec<Move>> {
    let slot_set: BTreeSet<Cell> = slots.iter().copied().collect();
    let mut open: Vec<Cell> = slots
        .iter()
        .copied()
        .filter(|slot| !world.occupied(*slot))
        .collect();
    open.sort_by(|a, b| a.cmp_yx(*b));

    for slot in open {
        for dir in Compass::CARDINALS {
            let cand = slot.step(dir);
            if !world.occupied(cand) || !removable(world, cand) {
                continue;
            }
            if slot_set.contains(&cand) && cand.cmp_yx(slot) != std::cmp::Ordering::Greater {
                continue;
            }
            match shortest_move_path(world, cand, slot) {
                Ok(path) => return Some(path),
                Err(PlanError::NoMovePath { .. }) => continue,
                Err(_) => return None,
            }
        }
    }
    None
}

/// Cube cells ordered by BFS depth from the downmost-leftmost cube,
/// deepest first; ties broken by descending `(y, x)`.
///
/// A deepest cube is always removable: no shortest path from another
/// cube to the root can pass through it. The phases fall back to this
/// ordering when every direct candidate is blocked.
pub fn cells_by_depth_desc(world: &World) -> Vec<Cell> {
    let n = world.len();
    let Some(root) = world.downmost_leftmost() else {
        return Vec::new();
    };
    let mut depth = vec![usize::MAX; n];
    let mut queue = VecDeque::new();
    depth[root.index()] = 0;
    queue.push_back(root);
    while let Some(id) = queue.pop_front() {
        let Some(cube) = world.cube(id) else { continue };
        for dir in Compass::CARDINALS {
            let Some(next) = world.cube_at(cube.pos.step(dir)) else {
                continue;
            };
            if depth[next.index()] == usize::MAX {
                depth[next.index()] = depth[id.index()] + 1;
                queue.push_back(next);
            }
        }
    }

    let mut order: Vec<(usize, Cell)> = (0..n)
        .filter_map(|v| {
            let cube = world.cube(CubeId(v as u32))?;
            Some((depth[v], cube.pos))
        })
        .collect();
    order.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| b.1.cmp_yx(a.1))
    });
    order.into_iter().map(|(_, cell)| cell).collect()
}
