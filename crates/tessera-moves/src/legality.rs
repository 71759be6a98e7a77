//! Legality predicates for slide and corner moves.

use smallvec::SmallVec;

use tessera_core::{Cell, Compass, Move, MoveDir};
use tessera_grid::World;
use tessera_topology::is_connected_skipping;

/// Local legality: neighbourhood support only, connectivity ignored.
///
/// A slide along cardinal `d` needs the target cell empty and a wall to
/// slide against: the flanking neighbour on the left or right of `d`
/// together with that flank's diagonal ahead. A corner move `d1 d2`
/// needs its diagonal target empty, the cell one step along `d1` empty
/// (the mover sweeps through it), and the `d2` neighbour present as the
/// pivot support.
///
/// The source cell must hold a cube; otherwise the move is illegal.
pub fn is_valid_ignore_connectivity(world: &World, mv: Move) -> bool {
    world.occupied(mv.from) && !world.occupied(mv.target()) && has_support(world, mv)
}

/// Local legality for a mover that has been lifted out of the grid.
///
/// The move-graph planner removes the moving cube before searching, so
/// the source cell reads as empty; support and target tests still run
/// against the remaining scaffold. Everything else matches
/// [`is_valid_ignore_connectivity`].
pub fn is_legal_step(world: &World, mv: Move) -> bool {
    !world.occupied(mv.from) && !world.occupied(mv.target()) && has_support(world, mv)
}

/// The neighbourhood-support half of move legality.
///
/// Corner `d1 d2`: the swept cell along `d1` must be free and the pivot
/// neighbour along `d2` present. Slide along `d`: a two-cube wall on
/// either flank — the left or right neighbour together with that
/// flank's diagonal ahead.
fn has_support(world: &World, mv: Move) -> bool {
    let flags = world.neighbor_flags(mv.from);

    if let Some((d1, d2)) = mv.dir.corner() {
        return !flags.has(d1) && flags.has(d2);
    }

    let Some(axis) = mv.dir.slide_axis() else {
        return false;
    };
    let left = axis.left90();
    let right = axis.right90();
    let (Some(ahead_left), Some(ahead_right)) = (
        Compass::diagonal(axis, left),
        Compass::diagonal(axis, right),
    ) else {
        return false;
    };
    (flags.has(left) && flags.has(ahead_left)) || (flags.has(right) && flags.has(ahead_right))
}

/// Full legality: local support plus connectivity without the mover.
///
/// The configuration minus the moving cube must stay 4-connected, so
/// that every intermediate state of the move (and the state after it)
/// remains one robot.
pub fn is_valid(world: &World, mv: Move) -> bool {
    if !is_valid_ignore_connectivity(world, mv) {
        return false;
    }
    match world.cube_at(mv.from) {
        Some(id) => is_connected_skipping(world, Some(id)),
        None => false,
    }
}

/// All locally legal moves out of `cell`, in [`MoveDir`] declaration
/// order.
///
/// The fixed order makes every consumer deterministic; the move-graph
/// planner depends on it to produce identical paths on identical input.
pub fn legal_moves_from(world: &World, cell: Cell) -> SmallVec<[Move; 12]> {
    MoveDir::ALL
        .into_iter()
        .map(|dir| Move::new(cell, dir))
        .filter(|mv| is_valid_ignore_connectivity(world, *mv))
        .collect()
}
