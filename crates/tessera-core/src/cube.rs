//! Cube records, identifiers, colors, and classification tags.

use std::fmt;

use crate::cell::Cell;

/// Identifies a cube by its index in the configuration's cube arena.
///
/// Identifiers are stable across moves. They change only when a cube is
/// removed: the arena compacts and every identifier above the removed
/// index shifts down by one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubeId(pub u32);

impl CubeId {
    /// The arena index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CubeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CubeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a chunk produced by the boundary decomposition.
///
/// Chunk ids are assigned in discovery order during a single marking
/// pass and are not stable across re-marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkId(pub u32);

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ChunkId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// An RGB color. Used only by exporters and phase labelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// The default cube blue.
    pub const DEFAULT: Color = Color(68, 187, 248);
}

impl Default for Color {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Classification of a cube by the topology analyzer.
///
/// `None` means the configuration has not been marked since the last
/// unmarked mutation. The remaining tags partition a connected
/// configuration: chunk cubes sit in a biconnected boundary component of
/// at least three cubes, link cubes do not, and a connector is a cut
/// cube joining more than one chunk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClassTag {
    /// Not yet classified (or stale after an unmarked mutation).
    #[default]
    None,
    /// Link cube whose removal keeps the configuration connected.
    LinkStable,
    /// Link cube that is an articulation point.
    LinkCut,
    /// Chunk cube whose removal keeps the configuration connected.
    ChunkStable,
    /// Chunk cube that is an articulation point.
    ChunkCut,
    /// Cut cube shared between chunks.
    Connector,
}

impl ClassTag {
    /// True for `ChunkStable` and `ChunkCut`.
    pub const fn is_chunk(self) -> bool {
        matches!(self, ClassTag::ChunkStable | ClassTag::ChunkCut)
    }

    /// True for `LinkStable` and `LinkCut`.
    pub const fn is_link(self) -> bool {
        matches!(self, ClassTag::LinkStable | ClassTag::LinkCut)
    }
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClassTag::None => "none",
            ClassTag::LinkStable => "link-stable",
            ClassTag::LinkCut => "link-cut",
            ClassTag::ChunkStable => "chunk-stable",
            ClassTag::ChunkCut => "chunk-cut",
            ClassTag::Connector => "connector",
        };
        f.write_str(s)
    }
}

/// A unit square of the robot.
///
/// Identity is immutable (the arena index); position is mutable. The
/// reset position records where the cube was created and never changes
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cube {
    /// Current cell.
    pub pos: Cell,
    /// Cell the cube was created at; restored by a reset.
    pub reset_pos: Cell,
    /// Display color.
    pub color: Color,
    /// Classification from the most recent marking pass.
    pub tag: ClassTag,
    /// Chunk membership from the most recent marking pass.
    pub chunk: Option<ChunkId>,
    /// Whether the cube appeared in the most recent outside walk.
    pub on_boundary: bool,
}

impl Cube {
    /// Create a cube at `cell`; the reset position is fixed to `cell`.
    pub fn new(cell: Cell, color: Color) -> Self {
        Self {
            pos: cell,
            reset_pos: cell,
            color,
            tag: ClassTag::None,
            chunk: None,
            on_boundary: false,
        }
    }

    /// Clear classification state back to unmarked.
    pub fn clear_marks(&mut self) {
        self.tag = ClassTag::None;
        self.chunk = None;
        self.on_boundary = false;
    }
}
