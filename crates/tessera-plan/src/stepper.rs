//! The stepper: validate and commit moves pulled from a phase.

use tessera_core::{Cell, ClassTag, Move};
use tessera_grid::World;
use tessera_moves::is_valid;
use tessera_topology::MarkedOps;

use crate::error::PlanError;
use crate::phase::MovePhase;

/// How the stepper commits each move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitMode {
    /// Re-mark after every commit; interactive consumers read fresh tags.
    Marked,
    /// Leave classification stale between commits; batch runs re-mark
    /// only when a phase inspects the configuration.
    Unmarked,
}

/// One committed step, surfaced to transcripts and UIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepRecord {
    /// Ordinal of this step within the phase, starting at 1.
    pub step: usize,
    /// Cell the cube moved from.
    pub from: Cell,
    /// Cell the cube moved to.
    pub to: Cell,
    /// The mover's classification after the commit (stale in
    /// [`CommitMode::Unmarked`] runs).
    pub tag: ClassTag,
    /// The committed move itself, for interpolation.
    pub mv: Move,
}

/// Drives a phase: pull a move, re-validate it, commit it, surface it.
///
/// The stepper is the only component that moves cubes during a run. A
/// move that fails validation means the phase emitted something illegal,
/// which is an algorithm bug and surfaces as [`PlanError::InvalidMove`].
/// A safety budget turns non-termination into [`PlanError::PhaseDiverged`]
/// rather than a hang; the algorithm's own bound is quadratic, so the
/// budget scales with the square of the cube count.
#[derive(Debug)]
pub struct Stepper<P> {
    phase: P,
    mode: CommitMode,
    steps: usize,
    budget: usize,
}

impl<P: MovePhase> Stepper<P> {
    /// Wrap a phase with the given commit mode.
    pub fn new(phase: P, mode: CommitMode, world: &World) -> Self {
        let n = world.len();
        Self {
            phase,
            mode,
            steps: 0,
            budget: 16 * n * n + 64,
        }
    }

    /// Steps committed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Pull, validate, and commit the next move.
    ///
    /// Returns `None` when the phase is finished.
    pub fn step(&mut self, world: &mut World) -> Result<Option<StepRecord>, PlanError> {
        let Some(mv) = self.phase.next_move(world)? else {
            return Ok(None);
        };
        if self.steps >= self.budget {
            return Err(PlanError::PhaseDiverged {
                phase: self.phase.name(),
                moves: self.steps,
            });
        }
        if !is_valid(world, mv) {
            return Err(PlanError::InvalidMove(mv));
        }

        let target = mv.target();
        match self.mode {
            CommitMode::Marked => world.move_cube_marked(mv.from, target)?,
            CommitMode::Unmarked => world.move_cube(mv.from, target)?,
        };

        self.steps += 1;
        let tag = world
            .cube_at(target)
            .and_then(|id| world.cube(id))
            .map(|cube| cube.tag)
            .unwrap_or(ClassTag::None);
        Ok(Some(StepRecord {
            step: self.steps,
            from: mv.from,
            to: target,
            tag,
            mv,
        }))
    }

    /// Run the phase to completion, returning the number of steps.
    pub fn run(&mut self, world: &mut World) -> Result<usize, PlanError> {
        while self.step(world)?.is_some() {}
        Ok(self.steps)
    }
}
