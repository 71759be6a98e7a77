//! End-to-end driver: gather, then compact.

use std::collections::BTreeSet;

use tessera_grid::World;

use crate::canonical::{canonical_staircase, is_xy_monotone};
use crate::compact::CompactPhase;
use crate::error::PlanError;
use crate::gather::GatherPhase;
use crate::stepper::{CommitMode, Stepper};

/// Smallest cube count the algorithm is defined for.
///
/// Lighter configurations are rejected unless they already sit in
/// canonical form, in which case both phases are trivially empty.
pub const MIN_CUBES: usize = 5;

/// Step counts from a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Moves committed by the gather phase.
    pub gather: usize,
    /// Moves committed by the compact phase.
    pub compact: usize,
}

impl RunStats {
    /// Total committed moves.
    pub fn total(&self) -> usize {
        self.gather + self.compact
    }
}

/// Run Gather&Compact to completion on `world`.
///
/// Commits unmarked (batch mode); the phases re-mark internally whenever
/// they need fresh classification. On success the occupied cells equal
/// the canonical staircase anchored at the downmost-leftmost cube and
/// the configuration is xy-monotone.
///
/// Configurations below [`MIN_CUBES`] that are not already canonical are
/// rejected with [`PlanError::LightConfiguration`]: the algorithm's
/// behaviour on them is undefined, and guessing is worse than refusing.
pub fn run_gather_compact(world: &mut World) -> Result<RunStats, PlanError> {
    let n = world.len();
    let anchor = world
        .downmost_leftmost()
        .and_then(|id| world.cube(id))
        .map(|cube| cube.pos);

    if n < MIN_CUBES {
        let canonical: BTreeSet<_> = match anchor {
            Some(anchor) => canonical_staircase(anchor, n).into_iter().collect(),
            None => BTreeSet::new(),
        };
        if world.occupied_cells() != canonical {
            return Err(PlanError::LightConfiguration(n));
        }
        return Ok(RunStats::default());
    }

    let mut stats = RunStats::default();

    let mut gather = Stepper::new(GatherPhase::new(world), CommitMode::Unmarked, world);
    stats.gather = gather.run(world)?;

    let mut compact = Stepper::new(CompactPhase::new(world), CommitMode::Unmarked, world);
    stats.compact = compact.run(world)?;

    debug_assert!(is_xy_monotone(world));
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Cell;

    fn c(x: i32, y: i32) -> Cell {
        Cell::new(x, y)
    }

    fn world(cells: &[(i32, i32)]) -> World {
        World::from_cells(cells.iter().map(|&(x, y)| c(x, y))).unwrap()
    }

    #[test]
    fn canonical_pair_and_l_run_with_zero_moves() {
        let mut pair = world(&[(0, 0), (1, 0)]);
        assert_eq!(run_gather_compact(&mut pair).unwrap().total(), 0);

        let mut ell = world(&[(0, 0), (1, 0), (0, 1)]);
        assert_eq!(run_gather_compact(&mut ell).unwrap().total(), 0);
    }

    #[test]
    fn light_non_canonical_configurations_are_rejected() {
        // A 2x2 block is monotone but not the canonical 4-cube shape.
        let mut block = world(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(
            run_gather_compact(&mut block),
            Err(PlanError::LightConfiguration(4))
        );

        let mut bent = world(&[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(
            run_gather_compact(&mut bent),
            Err(PlanError::LightConfiguration(3))
        );
    }

    #[test]
    fn line_of_five_lands_on_the_reference_staircase() {
        let mut w = world(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        let stats = run_gather_compact(&mut w).unwrap();
        assert!(stats.gather > 0);
        assert_eq!(
            w.occupied_cells(),
            [c(0, 0), c(1, 0), c(2, 0), c(0, 1), c(1, 1)]
                .into_iter()
                .collect()
        );
        assert!(is_xy_monotone(&w));
    }

    #[test]
    fn u_shape_lands_on_the_reference_staircase() {
        let mut w = world(&[(0, 0), (1, 0), (2, 0), (0, 1), (2, 1)]);
        let stats = run_gather_compact(&mut w).unwrap();
        assert_eq!(stats.compact, 0);
        assert_eq!(
            w.occupied_cells(),
            [c(0, 0), c(1, 0), c(2, 0), c(0, 1), c(1, 1)]
                .into_iter()
                .collect()
        );
    }

    #[test]
    fn anchor_offsets_carry_through() {
        // Same U-shape, shifted: the staircase roots at the shifted
        // downmost-leftmost cube.
        let mut w = world(&[(10, -3), (11, -3), (12, -3), (10, -2), (12, -2)]);
        run_gather_compact(&mut w).unwrap();
        assert_eq!(
            w.occupied_cells(),
            [c(10, -3), c(11, -3), c(12, -3), c(10, -2), c(11, -2)]
                .into_iter()
                .collect()
        );
    }

    #[test]
    fn stats_add_up() {
        let stats = RunStats {
            gather: 3,
            compact: 4,
        };
        assert_eq!(stats.total(), 7);
    }
}
