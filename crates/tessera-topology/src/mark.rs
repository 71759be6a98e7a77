//! Marked mutation flavours: edit the grid, then re-classify.

use tessera_core::{Cell, Color, Cube, CubeId, GridError};
use tessera_grid::World;

use crate::classify::classify;

/// Grid mutations that re-run the topology analyzer afterwards.
///
/// The unmarked flavours on [`World`] leave classification stale, which
/// is what the phase algorithms want while they perform many micro-edits;
/// interactive callers use these marked flavours so tags are fresh after
/// every committed edit.
pub trait MarkedOps {
    /// Re-run classification and store the result on the cubes.
    fn mark(&mut self);

    /// [`World::add_cube`], then re-mark.
    fn add_cube_marked(&mut self, cell: Cell, color: Color) -> Result<CubeId, GridError>;

    /// [`World::remove_cube`], then re-mark.
    fn remove_cube_marked(&mut self, cell: Cell) -> Result<Cube, GridError>;

    /// [`World::move_cube`], then re-mark.
    fn move_cube_marked(&mut self, src: Cell, dst: Cell) -> Result<CubeId, GridError>;
}

impl MarkedOps for World {
    fn mark(&mut self) {
        let marks = classify(self);
        self.apply_classification(&marks);
    }

    fn add_cube_marked(&mut self, cell: Cell, color: Color) -> Result<CubeId, GridError> {
        let id = self.add_cube(cell, color)?;
        self.mark();
        Ok(id)
    }

    fn remove_cube_marked(&mut self, cell: Cell) -> Result<Cube, GridError> {
        let cube = self.remove_cube(cell)?;
        self.mark();
        Ok(cube)
    }

    fn move_cube_marked(&mut self, src: Cell, dst: Cell) -> Result<CubeId, GridError> {
        let id = self.move_cube(src, dst)?;
        self.mark();
        Ok(id)
    }
}
