//! Topology analysis for the tessera reconfiguration planner.
//!
//! All routines here are pure functions of the occupied cell set: they
//! borrow a [`tessera_grid::World`] immutably and never mutate it. The
//! one exception is the [`MarkedOps`] extension trait, which packages
//! "mutate, then re-analyze" into the marked flavour of each grid edit.
//!
//! The analyses, in dependency order:
//!
//! - [`is_connected`] / [`is_connected_skipping`] — BFS connectivity,
//!   optionally pretending one cube is absent.
//! - [`stable_cubes`] — articulation analysis; a cube is *stable* when
//!   removing it keeps the configuration connected.
//! - [`outside_walk`] — counter-clockwise boundary traversal from the
//!   downmost-leftmost cube.
//! - [`classify`] — the chunk/link/connector decomposition driven by
//!   the outside walk, combined with stability into final tags.
//! - [`bridge_capacity`] / [`bridge_limit`] — sizing helpers for the
//!   gather phase's bridge construction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod articulation;
pub mod boundary;
pub mod bridge;
pub mod classify;
pub mod connectivity;
pub mod mark;

pub use articulation::stable_cubes;
pub use boundary::outside_walk;
pub use bridge::{bridge_capacity, bridge_limit};
pub use classify::classify;
pub use connectivity::{is_connected, is_connected_skipping};
pub use mark::MarkedOps;
