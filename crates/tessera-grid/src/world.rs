//! The [`World`]: cube arena plus sparse cell index.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use tessera_core::{
    Bounds, Cell, ChunkId, ClassTag, Color, Compass, Cube, CubeId, GridError, NeighborFlags,
};

/// Classification output produced by a marking pass, indexed by cube id.
///
/// Produced by the topology analyzer and written back into the arena via
/// [`World::apply_classification`]; keeping it a plain value avoids any
/// mutable aliasing between the analyzer and the store it reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    /// Final tag per cube.
    pub tags: Vec<ClassTag>,
    /// Chunk membership per cube.
    pub chunks: Vec<Option<ChunkId>>,
    /// Whether each cube lies on the outside boundary.
    pub boundary: Vec<bool>,
}

impl Classification {
    /// An all-unmarked classification for `n` cubes.
    pub fn unmarked(n: usize) -> Self {
        Self {
            tags: vec![ClassTag::None; n],
            chunks: vec![None; n],
            boundary: vec![false; n],
        }
    }
}

/// A configuration of cubes on the integer grid.
///
/// Owns the cube arena (`Vec<Cube>`) and a sparse `IndexMap` from cell
/// to cube id. The two structures are kept mutually consistent by every
/// mutation: `index[cubes[i].pos] == i` for all `i`, and every index
/// entry points at a cube whose position matches.
///
/// The arena-plus-integer-id shape is deliberate: O(1) "which cube is
/// here?" lookups with no cyclic references between cubes and the world.
#[derive(Clone, Debug, Default)]
pub struct World {
    cubes: Vec<Cube>,
    index: IndexMap<Cell, CubeId>,
}

impl World {
    /// An empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from cells, all in the default color.
    ///
    /// Fails with [`GridError::OccupiedCell`] on duplicate cells.
    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Result<Self, GridError> {
        let mut world = Self::new();
        for cell in cells {
            world.add_cube(cell, Color::DEFAULT)?;
        }
        Ok(world)
    }

    // ── Lookup ──────────────────────────────────────────────────

    /// Number of cubes.
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    /// True when the configuration holds no cubes.
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// The cube at `cell`, if any.
    pub fn cube_at(&self, cell: Cell) -> Option<CubeId> {
        self.index.get(&cell).copied()
    }

    /// Whether `cell` is occupied.
    pub fn occupied(&self, cell: Cell) -> bool {
        self.index.contains_key(&cell)
    }

    /// Borrow a cube record. `None` when the id is out of range.
    pub fn cube(&self, id: CubeId) -> Option<&Cube> {
        self.cubes.get(id.index())
    }

    /// All cube records in id order.
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// All cube ids, `0..len`.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = CubeId> {
        (0..self.cubes.len() as u32).map(CubeId)
    }

    /// Occupied cells in cube-id order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cubes.iter().map(|c| c.pos)
    }

    /// Occupied cells as an ordered set, for whole-shape comparisons.
    pub fn occupied_cells(&self) -> BTreeSet<Cell> {
        self.cells().collect()
    }

    /// Inclusive bounding box of the configuration, `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut cells = self.cells();
        let first = cells.next()?;
        let mut bounds = Bounds::at(first);
        for cell in cells {
            bounds.include(cell);
        }
        Some(bounds)
    }

    /// The downmost-leftmost cube: minimal position in `(y, x)` order.
    ///
    /// This is the root of the outside walk and of both phases.
    pub fn downmost_leftmost(&self) -> Option<CubeId> {
        self.ids()
            .min_by(|a, b| self.cubes[a.index()].pos.cmp_yx(self.cubes[b.index()].pos))
    }

    /// Presence flags for the eight compass neighbours of `cell`.
    pub fn neighbor_flags(&self, cell: Cell) -> NeighborFlags {
        let mut flags = NeighborFlags::default();
        for dir in Compass::ALL {
            flags.0[dir.index()] = self.occupied(cell.step(dir));
        }
        flags
    }

    /// Cube ids in the eight compass neighbours of `cell`, indexed by
    /// [`Compass::index`].
    pub fn neighbor_map(&self, cell: Cell) -> [Option<CubeId>; 8] {
        let mut map = [None; 8];
        for dir in Compass::ALL {
            map[dir.index()] = self.cube_at(cell.step(dir));
        }
        map
    }

    // ── Mutation (unmarked) ─────────────────────────────────────

    /// Add a cube at `cell`.
    ///
    /// Fails with [`GridError::OccupiedCell`] when the cell is taken.
    pub fn add_cube(&mut self, cell: Cell, color: Color) -> Result<CubeId, GridError> {
        if self.occupied(cell) {
            return Err(GridError::OccupiedCell(cell));
        }
        let id = CubeId(self.cubes.len() as u32);
        self.cubes.push(Cube::new(cell, color));
        self.index.insert(cell, id);
        Ok(id)
    }

    /// Re-insert a previously removed cube record, keeping its reset
    /// position, color, and classification.
    ///
    /// The record is appended to the arena, so it may come back under a
    /// different id than it was removed with.
    pub fn insert_cube(&mut self, cube: Cube) -> Result<CubeId, GridError> {
        if self.occupied(cube.pos) {
            return Err(GridError::OccupiedCell(cube.pos));
        }
        let id = CubeId(self.cubes.len() as u32);
        self.index.insert(cube.pos, id);
        self.cubes.push(cube);
        Ok(id)
    }

    /// Remove the cube at `cell`, returning its record.
    ///
    /// Compacts the arena: identifiers above the removed index shift
    /// down by one, and the index is rewritten to match.
    pub fn remove_cube(&mut self, cell: Cell) -> Result<Cube, GridError> {
        let id = self.cube_at(cell).ok_or(GridError::EmptyCell(cell))?;
        let cube = self.cubes.remove(id.index());
        self.index.clear();
        for (i, c) in self.cubes.iter().enumerate() {
            self.index.insert(c.pos, CubeId(i as u32));
        }
        Ok(cube)
    }

    /// Move the cube at `src` to the empty cell `dst` in O(1).
    pub fn move_cube(&mut self, src: Cell, dst: Cell) -> Result<CubeId, GridError> {
        let id = self.cube_at(src).ok_or(GridError::EmptyCell(src))?;
        if self.occupied(dst) {
            return Err(GridError::OccupiedCell(dst));
        }
        self.index.swap_remove(&src);
        self.index.insert(dst, id);
        self.cubes[id.index()].pos = dst;
        Ok(id)
    }

    /// Restore every cube to its reset cell.
    ///
    /// Rebuilds the index wholesale in a second phase so that transient
    /// collisions between old and new positions cannot corrupt it.
    /// Classification is cleared; callers wanting fresh tags re-mark.
    pub fn reset(&mut self) {
        self.index.clear();
        for (i, cube) in self.cubes.iter_mut().enumerate() {
            cube.pos = cube.reset_pos;
            cube.clear_marks();
            self.index.insert(cube.pos, CubeId(i as u32));
        }
    }

    // ── Classification plumbing ─────────────────────────────────

    /// Write a marking pass's output into the arena.
    ///
    /// Vectors shorter than the arena leave trailing cubes unmarked.
    pub fn apply_classification(&mut self, marks: &Classification) {
        for (i, cube) in self.cubes.iter_mut().enumerate() {
            cube.tag = marks.tags.get(i).copied().unwrap_or(ClassTag::None);
            cube.chunk = marks.chunks.get(i).copied().flatten();
            cube.on_boundary = marks.boundary.get(i).copied().unwrap_or(false);
        }
    }

    /// Clear all classification state back to unmarked.
    pub fn clear_classification(&mut self) {
        for cube in &mut self.cubes {
            cube.clear_marks();
        }
    }

    /// Check the arena/index consistency invariant. Test support.
    pub fn index_consistent(&self) -> bool {
        self.index.len() == self.cubes.len()
            && self
                .cubes
                .iter()
                .enumerate()
                .all(|(i, c)| self.index.get(&c.pos).copied() == Some(CubeId(i as u32)))
    }
}
