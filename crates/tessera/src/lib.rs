//! Tessera: reconfiguration planning for sliding-square modular robots.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the tessera sub-crates. For most users, adding `tessera` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! // A five-cube U shape.
//! let mut world = World::from_cells(
//!     [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1)]
//!         .into_iter()
//!         .map(|(x, y)| Cell::new(x, y)),
//! )
//! .unwrap();
//!
//! // Reconfigure it into the canonical staircase.
//! let stats = run_gather_compact(&mut world).unwrap();
//! assert_eq!(stats.total(), 1);
//! assert!(is_xy_monotone(&world));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | cells, directions, cubes, tags, grid errors |
//! | [`grid`] | `tessera-grid` | the `World` store and classification plumbing |
//! | [`topology`] | `tessera-topology` | connectivity, cut cubes, boundary walk, marking |
//! | [`moves`] | `tessera-moves` | move legality and interpolation |
//! | [`plan`] | `tessera-plan` | canonical staircase, planner, phases, stepper |
//! | [`io`] | `tessera-io` | instance files, SVG export, transcripts |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: cells, directions, cubes, tags, errors (`tessera-core`).
pub use tessera_core as types;

/// The grid store (`tessera-grid`).
pub use tessera_grid as grid;

/// Topology analysis (`tessera-topology`).
pub use tessera_topology as topology;

/// Move legality and interpolation (`tessera-moves`).
pub use tessera_moves as moves;

/// Planning: canonical shape, move-graph search, phases (`tessera-plan`).
pub use tessera_plan as plan;

/// Instance files, SVG export, transcripts (`tessera-io`).
pub use tessera_io as io;

/// Common imports for typical tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tessera_core::{
        Cell, ClassTag, Color, Compass, Cube, CubeId, GridError, Move, MoveDir,
    };

    // Grid
    pub use tessera_grid::World;

    // Topology
    pub use tessera_topology::{
        classify, is_connected, is_connected_skipping, outside_walk, MarkedOps,
    };

    // Moves
    pub use tessera_moves::{is_valid, is_valid_ignore_connectivity};

    // Planning
    pub use tessera_plan::{
        canonical_staircase, is_xy_monotone, run_gather_compact, shortest_move_path, CommitMode,
        CompactPhase, GatherPhase, PlanError, RunStats, StepRecord, Stepper,
    };

    // IO
    pub use tessera_io::{export_svg, load_instance, save_instance, LoadError, TranscriptWriter};
}
