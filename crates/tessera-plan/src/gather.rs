//! The gather phase: pull link cubes into the staircase.

use std::collections::BTreeSet;

use tessera_core::{Cell, Move};
use tessera_grid::World;
use tessera_topology::{bridge_capacity, bridge_limit, MarkedOps};

use crate::canonical::canonical_staircase;
use crate::error::PlanError;
use crate::phase::{
    cells_by_depth_desc, pry_open_slot, removable, route_to_first_open_slot, MovePhase,
    PendingMoves,
};

/// Gather collects link material into the canonical staircase rooted at
/// the downmost-leftmost cube.
///
/// Each outer iteration re-marks the configuration, picks a link cube
/// that sits outside its canonical slot, and routes it to the
/// lexicographically least open slot via the move-graph planner.
/// Candidates are tried in ascending `(y, x)` order; cut cubes are
/// skipped, as are candidates the planner cannot route. A first pass
/// only accepts paths within the bridge limit `L = 2·(width + height)`;
/// a second pass lifts the cap. When every direct candidate is blocked,
/// the phase falls back to peeling the BFS-deepest cube, which is always
/// safe to lift.
///
/// The phase is done when no link cube remains outside the staircase.
#[derive(Debug)]
pub struct GatherPhase {
    slots: Vec<Cell>,
    slot_set: BTreeSet<Cell>,
    pending: PendingMoves,
}

impl GatherPhase {
    /// Set up gather for the current configuration.
    ///
    /// The staircase anchor is fixed here, at the downmost-leftmost
    /// cube; that cube occupies slot zero and never moves.
    pub fn new(world: &World) -> Self {
        let anchor = world
            .downmost_leftmost()
            .and_then(|id| world.cube(id))
            .map(|cube| cube.pos)
            .unwrap_or(Cell::new(0, 0));
        let slots = canonical_staircase(anchor, world.len());
        let slot_set = slots.iter().copied().collect();
        Self {
            slots,
            slot_set,
            pending: PendingMoves::default(),
        }
    }

    /// Link cubes outside the staircase, in ascending `(y, x)` order.
    fn stray_links(&self, world: &World) -> Vec<Cell> {
        let mut strays: Vec<Cell> = world
            .cubes()
            .iter()
            .filter(|cube| cube.tag.is_link() && !self.slot_set.contains(&cube.pos))
            .map(|cube| cube.pos)
            .collect();
        strays.sort_by(|a, b| a.cmp_yx(*b));
        strays
    }

    fn replan(&mut self, world: &mut World) -> Result<bool, PlanError> {
        world.mark();
        let strays = self.stray_links(world);
        if strays.is_empty() {
            return Ok(false);
        }

        let limit = bridge_limit(world);
        for cap in [Some(limit), None] {
            for &cand in &strays {
                // A liftable link leaves everything else reachable from
                // the root: its bridge capacity is the full remainder.
                let liftable = world
                    .cube_at(cand)
                    .map(|id| bridge_capacity(world, id) + 2 == world.len())
                    .unwrap_or(false);
                if !liftable {
                    continue;
                }
                if let Some(path) = route_to_first_open_slot(world, cand, &self.slots, cap) {
                    self.pending.extend(path);
                    return Ok(true);
                }
            }
        }

        // Every stray is pinned; peel the deepest liftable cube instead
        // to open the configuration up.
        for cand in cells_by_depth_desc(world) {
            if self.slot_set.contains(&cand) || !removable(world, cand) {
                continue;
            }
            if let Some(path) = route_to_first_open_slot(world, cand, &self.slots, None) {
                self.pending.extend(path);
                return Ok(true);
            }
        }

        if let Some(path) = pry_open_slot(world, &self.slots) {
            self.pending.extend(path);
            return Ok(true);
        }

        let first = strays[0];
        Err(PlanError::NoMovePath {
            from: first,
            to: *self.slots.last().unwrap_or(&first),
        })
    }
}

impl MovePhase for GatherPhase {
    fn name(&self) -> &'static str {
        "gather"
    }

    fn next_move(&mut self, world: &mut World) -> Result<Option<Move>, PlanError> {
        if let Some(mv) = self.pending.pop() {
            return Ok(Some(mv));
        }
        if self.replan(world)? {
            Ok(self.pending.pop())
        } else {
            Ok(None)
        }
    }
}
