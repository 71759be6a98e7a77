//! Benchmark crate for tessera.
//!
//! This crate has no library content; the benchmarks live under
//! `benches/` and run with `cargo bench`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
