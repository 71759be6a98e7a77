//! The compact phase: sort chunk material into the canonical slots.

use std::collections::BTreeSet;

use tessera_core::{Cell, Move};
use tessera_grid::World;
use tessera_topology::MarkedOps;

use crate::canonical::canonical_staircase;
use crate::error::PlanError;
use crate::phase::{
    cells_by_depth_desc, pry_open_slot, removable, route_to_first_open_slot, MovePhase,
    PendingMoves,
};

/// Compact rearranges a gathered configuration into the canonical
/// staircase.
///
/// Each outer iteration selects the highest-rightmost cube that is not
/// in a canonical slot — descending `(y, x)` order — and routes it to
/// the lexicographically least open slot. Cut cubes and unroutable
/// candidates are skipped; if every candidate is blocked the phase peels
/// the BFS-deepest liftable cube instead. Done when the occupied cells
/// equal the staircase.
#[derive(Debug)]
pub struct CompactPhase {
    slots: Vec<Cell>,
    slot_set: BTreeSet<Cell>,
    pending: PendingMoves,
}

impl CompactPhase {
    /// Set up compact for the current configuration.
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

    /// Cubes outside their canonical slots, highest-rightmost first.
    fn out_of_place(&self, world: &World) -> Vec<Cell> {
        let mut cells: Vec<Cell> = world
            .cells()
            .filter(|cell| !self.slot_set.contains(cell))
            .collect();
        cells.sort_by(|a, b| b.cmp_yx(*a));
        cells
    }

    fn replan(&mut self, world: &mut World) -> Result<bool, PlanError> {
        let candidates = self.out_of_place(world);
        if candidates.is_empty() {
            return Ok(false);
        }
        world.mark();

        for &cand in &candidates {
            if !removable(world, cand) {
                continue;
            }
            if let Some(path) = route_to_first_open_slot(world, cand, &self.slots, None) {
                self.pending.extend(path);
                return Ok(true);
            }
        }

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

        let first = candidates[0];
        Err(PlanError::NoMovePath {
            from: first,
            to: *self.slots.last().unwrap_or(&first),
        })
    }
}

impl MovePhase for CompactPhase {
    fn name(&self) -> &'static str {
        "compact"
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::is_xy_monotone;
    use tessera_moves::is_valid;

    fn c(x: i32, y: i32) -> Cell {
        Cell::new(x, y)
    }

    fn world(cells: &[(i32, i32)]) -> World {
        World::from_cells(cells.iter().map(|&(x, y)| c(x, y))).unwrap()
    }

    fn drain(world: &mut World, phase: &mut CompactPhase) -> usize {
        let mut count = 0;
        while let Some(mv) = phase.next_move(world).unwrap() {
            assert!(is_valid(world, mv), "compact emitted invalid {mv}");
            world.move_cube(mv.from, mv.target()).unwrap();
            count += 1;
            assert!(count < 1000, "compact runaway");
        }
        count
    }

    #[test]
    fn canonical_input_is_a_fixpoint() {
        let mut w = world(&[(0, 0), (1, 0), (0, 1), (2, 0), (1, 1)]);
        let mut phase = CompactPhase::new(&w);
        assert_eq!(drain(&mut w, &mut phase), 0);
    }

    #[test]
    fn tall_rectangle_flattens_into_the_staircase() {
        // 2x3 rectangle; the canonical shape for six cubes drops the top
        // row's overflow onto the bottom diagonal.
        let mut w = world(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]);
        let mut phase = CompactPhase::new(&w);
        let moves = drain(&mut w, &mut phase);
        assert!(moves > 0);
        assert_eq!(
            w.occupied_cells(),
            canonical_staircase(c(0, 0), 6).into_iter().collect()
        );
        assert!(is_xy_monotone(&w));
    }

    #[test]
    fn single_chunk_square_is_already_monotone_but_not_canonical() {
        // A 3x3 block compacts into the 9-cube staircase.
        let cells: Vec<(i32, i32)> = (0..3)
            .flat_map(|y| (0..3).map(move |x| (x, y)))
            .collect();
        let mut w = world(&cells);
        let mut phase = CompactPhase::new(&w);
        drain(&mut w, &mut phase);
        assert_eq!(
            w.occupied_cells(),
            canonical_staircase(c(0, 0), 9).into_iter().collect()
        );
    }

    #[test]
    fn connectivity_holds_throughout_compaction() {
        let mut w = world(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (2, 2)]);
        let mut phase = CompactPhase::new(&w);
        let mut count = 0;
        while let Some(mv) = phase.next_move(&mut w).unwrap() {
            w.move_cube(mv.from, mv.target()).unwrap();
            assert!(tessera_topology::is_connected(&w));
            count += 1;
            assert!(count < 1000);
        }
        assert!(is_xy_monotone(&w));
    }
}
