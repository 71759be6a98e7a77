//! External interfaces: instance files, SVG export, transcripts.
//!
//! The instance format is a small JSON document; see [`load_instance`].
//! Loaded configurations are validated (version, cell collisions,
//! 4-connectivity) and come back fully classified. [`export_svg`] writes
//! a deterministic vector rendering with per-cube classification glyphs,
//! and [`TranscriptWriter`] streams the tab-separated batch results the
//! CLI prints.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod instance;
pub mod svg;
pub mod transcript;

pub use error::LoadError;
pub use instance::{load_instance, parse_instance, save_instance, serialize_instance};
pub use svg::export_svg;
pub use transcript::TranscriptWriter;
