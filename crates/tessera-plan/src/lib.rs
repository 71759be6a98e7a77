//! Reconfiguration planning: turning an arbitrary connected
//! configuration into the canonical compact staircase.
//!
//! The algorithm is Gather&Compact. [`GatherPhase`] collects link cubes
//! into the staircase growing out of the downmost-leftmost cube;
//! [`CompactPhase`] then sorts the remaining chunk material into the
//! canonical slots. Both phases are lazy: they hold a cursor over their
//! outer loop and yield one [`tessera_core::Move`] at a time to the
//! [`Stepper`], which validates and commits it. Exactly one move is in
//! flight at any time, and the grid is never observed half-updated.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod canonical;
pub mod compact;
pub mod error;
pub mod gather;
pub mod phase;
pub mod planner;
pub mod run;
pub mod stepper;

pub use canonical::{canonical_staircase, is_xy_monotone};
pub use compact::CompactPhase;
pub use error::PlanError;
pub use gather::GatherPhase;
pub use phase::MovePhase;
pub use planner::shortest_move_path;
pub use run::{run_gather_compact, RunStats};
pub use stepper::{CommitMode, StepRecord, Stepper};
