//! Move model: legality of the twelve move directions.
//!
//! A cube moves by sliding one cell along a cardinal axis or by pivoting
//! over a supporting neighbour onto a diagonal cell. Legality is a local
//! test against the eight-cell neighbourhood plus a global connectivity
//! requirement; the local half is available separately because the
//! move-graph planner runs it with the mover already lifted out of the
//! configuration (connectivity is then guaranteed by construction).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod interpolate;
pub mod legality;

pub use interpolate::{ease_in_out, interpolate};
pub use legality::{is_legal_step, is_valid, is_valid_ignore_connectivity, legal_moves_from};
