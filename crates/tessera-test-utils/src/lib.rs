//! Reusable configuration fixtures.
//!
//! Small named shapes used across the workspace's tests, plus a
//! deterministic scatter builder for larger instances. Everything here
//! returns a fresh [`World`]; fixtures never share state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{
    block, comb, line, lollipop, scatter, staircase, u_shape, vertical_line,
};
