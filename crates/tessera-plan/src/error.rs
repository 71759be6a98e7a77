//! Planning and execution errors.

use std::error::Error;
use std::fmt;

use tessera_core::{Cell, GridError, Move};

/// Errors from the planner, the phases, and the stepper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanError {
    /// The move-graph BFS could not reach the target cell.
    ///
    /// Recoverable: phases skip the target and try the next candidate.
    NoMovePath {
        /// Cell the mover started from.
        from: Cell,
        /// Cell the mover could not reach.
        to: Cell,
    },
    /// A phase emitted a move that is illegal under the current
    /// configuration. Always an algorithm bug.
    InvalidMove(Move),
    /// The configuration is too small for the algorithm and not already
    /// in canonical form; the field carries the cube count.
    LightConfiguration(usize),
    /// A phase exceeded its move budget without terminating.
    PhaseDiverged {
        /// Name of the diverging phase.
        phase: &'static str,
        /// Moves emitted before the budget tripped.
        moves: usize,
    },
    /// A grid mutation failed mid-plan. Always an algorithm bug.
    Grid(GridError),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMovePath { from, to } => {
                write!(f, "no move path from {from} to {to}")
            }
            Self::InvalidMove(mv) => write!(f, "algorithm emitted invalid move {mv}"),
            Self::LightConfiguration(n) => {
                write!(f, "configuration of {n} cubes is too light to reconfigure")
            }
            Self::PhaseDiverged { phase, moves } => {
                write!(f, "{phase} phase diverged after {moves} moves")
            }
            Self::Grid(err) => write!(f, "grid mutation failed: {err}"),
        }
    }
}

impl Error for PlanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for PlanError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}
