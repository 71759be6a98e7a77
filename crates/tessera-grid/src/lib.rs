//! Grid store for the tessera reconfiguration planner.
//!
//! A [`World`] owns the cube arena and the sparse index from occupied
//! cells to cube identifiers. All lookups, additions, removals, and
//! moves are O(1) except removal, which compacts the arena and rewrites
//! the index (identifiers above the removed index shift down).
//!
//! Mutations here are the *unmarked* flavour: they leave classification
//! tags stale. The marked flavour (re-running the topology analyzer
//! after each edit) lives in `tessera-topology`, which layers on top.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod world;

pub use world::{Classification, World};
