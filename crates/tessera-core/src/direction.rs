//! Compass directions, the twelve move directions, and move records.

use std::fmt;

use crate::cell::Cell;

/// The eight compass directions, in declaration order.
///
/// Declaration order is load-bearing: neighbour flags, neighbour maps,
/// and every enumeration over compass directions follow it, which keeps
/// all analyses deterministic across runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Compass {
    /// North (+y).
    N,
    /// North-east.
    NE,
    /// East (+x).
    E,
    /// South-east.
    SE,
    /// South (-y).
    S,
    /// South-west.
    SW,
    /// West (-x).
    W,
    /// North-west.
    NW,
}

impl Compass {
    /// All eight directions in declaration order.
    pub const ALL: [Compass; 8] = [
        Compass::N,
        Compass::NE,
        Compass::E,
        Compass::SE,
        Compass::S,
        Compass::SW,
        Compass::W,
        Compass::NW,
    ];

    /// The four cardinal directions in declaration order.
    pub const CARDINALS: [Compass; 4] = [Compass::N, Compass::E, Compass::S, Compass::W];

    /// Grid offset `(dx, dy)` of one step in this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Compass::N => (0, 1),
            Compass::NE => (1, 1),
            Compass::E => (1, 0),
            Compass::SE => (1, -1),
            Compass::S => (0, -1),
            Compass::SW => (-1, -1),
            Compass::W => (-1, 0),
            Compass::NW => (-1, 1),
        }
    }

    /// Position of this direction in [`Compass::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Compass::N => 0,
            Compass::NE => 1,
            Compass::E => 2,
            Compass::SE => 3,
            Compass::S => 4,
            Compass::SW => 5,
            Compass::W => 6,
            Compass::NW => 7,
        }
    }

    /// The opposite direction.
    pub const fn opposite(self) -> Compass {
        match self {
            Compass::N => Compass::S,
            Compass::NE => Compass::SW,
            Compass::E => Compass::W,
            Compass::SE => Compass::NW,
            Compass::S => Compass::N,
            Compass::SW => Compass::NE,
            Compass::W => Compass::E,
            Compass::NW => Compass::SE,
        }
    }

    /// For a cardinal, the cardinal 90° counter-clockwise.
    ///
    /// Used by slide legality: a slide along `d` needs a supporting wall
    /// on its left or right flank.
    pub const fn left90(self) -> Compass {
        match self {
            Compass::N => Compass::W,
            Compass::W => Compass::S,
            Compass::S => Compass::E,
            Compass::E => Compass::N,
            other => other,
        }
    }

    /// For a cardinal, the cardinal 90° clockwise.
    pub const fn right90(self) -> Compass {
        match self {
            Compass::N => Compass::E,
            Compass::E => Compass::S,
            Compass::S => Compass::W,
            Compass::W => Compass::N,
            other => other,
        }
    }

    /// Combine two orthogonal cardinals into the diagonal between them.
    ///
    /// Returns `None` when the directions are parallel or not cardinal.
    pub fn diagonal(a: Compass, b: Compass) -> Option<Compass> {
        let (ax, ay) = a.offset();
        let (bx, by) = b.offset();
        match (ax + bx, ay + by) {
            (1, 1) => Some(Compass::NE),
            (1, -1) => Some(Compass::SE),
            (-1, -1) => Some(Compass::SW),
            (-1, 1) => Some(Compass::NW),
            _ => None,
        }
    }

    /// True for N, E, S, W.
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Compass::N | Compass::E | Compass::S | Compass::W)
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Compass::N => "N",
            Compass::NE => "NE",
            Compass::E => "E",
            Compass::SE => "SE",
            Compass::S => "S",
            Compass::SW => "SW",
            Compass::W => "W",
            Compass::NW => "NW",
        };
        f.write_str(s)
    }
}

/// Presence flags for the eight compass neighbours of a cell.
///
/// Indexed by [`Compass::index`]; produced by the grid store and consumed
/// by move legality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighborFlags(pub [bool; 8]);

impl NeighborFlags {
    /// Whether the neighbour in `dir` is occupied.
    pub const fn has(&self, dir: Compass) -> bool {
        self.0[dir.index()]
    }

    /// Number of occupied orthogonal neighbours.
    pub fn degree4(&self) -> usize {
        Compass::CARDINALS
            .iter()
            .filter(|d| self.has(**d))
            .count()
    }
}

/// The twelve move directions: four slides and eight corner moves.
///
/// Declaration order matches the move table and is the enumeration order
/// everywhere moves are generated; the move-graph planner relies on it
/// so that identical inputs always plan identical paths.
///
/// A corner move is named by two cardinals `d1 d2`: the target is the
/// diagonal cell reached by stepping `d1` then `d2`. The first letter
/// names the cell that must be free (the pivot passes through it), the
/// second letter names the supporting neighbour pivoted over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)] // variant names are the direction names
pub enum MoveDir {
    N,
    E,
    S,
    W,
    NW,
    NE,
    EN,
    ES,
    SE,
    SW,
    WS,
    WN,
}

impl MoveDir {
    /// All twelve directions in declaration order.
    pub const ALL: [MoveDir; 12] = [
        MoveDir::N,
        MoveDir::E,
        MoveDir::S,
        MoveDir::W,
        MoveDir::NW,
        MoveDir::NE,
        MoveDir::EN,
        MoveDir::ES,
        MoveDir::SE,
        MoveDir::SW,
        MoveDir::WS,
        MoveDir::WN,
    ];

    /// True for the four single-cardinal slides.
    pub const fn is_slide(self) -> bool {
        matches!(self, MoveDir::N | MoveDir::E | MoveDir::S | MoveDir::W)
    }

    /// For a slide, the cardinal slid along.
    pub const fn slide_axis(self) -> Option<Compass> {
        match self {
            MoveDir::N => Some(Compass::N),
            MoveDir::E => Some(Compass::E),
            MoveDir::S => Some(Compass::S),
            MoveDir::W => Some(Compass::W),
            _ => None,
        }
    }

    /// For a corner move, the `(first, second)` cardinal decomposition.
    pub const fn corner(self) -> Option<(Compass, Compass)> {
        match self {
            MoveDir::NW => Some((Compass::N, Compass::W)),
            MoveDir::NE => Some((Compass::N, Compass::E)),
            MoveDir::EN => Some((Compass::E, Compass::N)),
            MoveDir::ES => Some((Compass::E, Compass::S)),
            MoveDir::SE => Some((Compass::S, Compass::E)),
            MoveDir::SW => Some((Compass::S, Compass::W)),
            MoveDir::WS => Some((Compass::W, Compass::S)),
            MoveDir::WN => Some((Compass::W, Compass::N)),
            _ => None,
        }
    }

    /// Grid offset from source to target.
    pub fn target_offset(self) -> (i32, i32) {
        if let Some((d1, d2)) = self.corner() {
            let (ax, ay) = d1.offset();
            let (bx, by) = d2.offset();
            (ax + bx, ay + by)
        } else {
            match self {
                MoveDir::N => Compass::N.offset(),
                MoveDir::E => Compass::E.offset(),
                MoveDir::S => Compass::S.offset(),
                // Slides and corners partition MoveDir.
                _ => Compass::W.offset(),
            }
        }
    }

    /// Grid offset from source to the intermediate cell.
    ///
    /// Slides have no distinct intermediate; corner moves pass through
    /// the cell one step along the first letter.
    pub fn pivot_offset(self) -> (i32, i32) {
        match self.corner() {
            Some((d1, _)) => d1.offset(),
            None => self.target_offset(),
        }
    }
}

impl fmt::Display for MoveDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MoveDir::N => "N",
            MoveDir::E => "E",
            MoveDir::S => "S",
            MoveDir::W => "W",
            MoveDir::NW => "NW",
            MoveDir::NE => "NE",
            MoveDir::EN => "EN",
            MoveDir::ES => "ES",
            MoveDir::SE => "SE",
            MoveDir::SW => "SW",
            MoveDir::WS => "WS",
            MoveDir::WN => "WN",
        };
        f.write_str(s)
    }
}

/// A single cube move: a source cell and a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    /// Cell the moving cube currently occupies.
    pub from: Cell,
    /// Direction of the move.
    pub dir: MoveDir,
}

impl Move {
    /// Construct a move.
    pub const fn new(from: Cell, dir: MoveDir) -> Self {
        Self { from, dir }
    }

    /// The cell the cube ends up in.
    pub fn target(self) -> Cell {
        let (dx, dy) = self.dir.target_offset();
        self.from.offset(dx, dy)
    }

    /// The intermediate cell swept through (equals the target for slides).
    pub fn pivot(self) -> Cell {
        let (dx, dy) = self.dir.pivot_offset();
        self.from.offset(dx, dy)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass_offsets_are_unit_steps() {
        for dir in Compass::ALL {
            let (dx, dy) = dir.offset();
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert!((dx, dy) != (0, 0));
        }
    }

    #[test]
    fn opposite_is_involutive() {
        for dir in Compass::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn flank_rotations_cycle() {
        assert_eq!(Compass::N.left90(), Compass::W);
        assert_eq!(Compass::N.right90(), Compass::E);
        for dir in Compass::CARDINALS {
            assert_eq!(dir.left90().right90(), dir);
        }
    }

    #[test]
    fn diagonal_combines_orthogonal_cardinals() {
        assert_eq!(Compass::diagonal(Compass::N, Compass::W), Some(Compass::NW));
        assert_eq!(Compass::diagonal(Compass::E, Compass::N), Some(Compass::NE));
        assert_eq!(Compass::diagonal(Compass::N, Compass::S), None);
        assert_eq!(Compass::diagonal(Compass::NE, Compass::W), None);
    }

    #[test]
    fn corner_targets_are_diagonals() {
        for dir in MoveDir::ALL {
            let (dx, dy) = dir.target_offset();
            if dir.is_slide() {
                assert_eq!(dx.abs() + dy.abs(), 1, "{dir} should be a unit slide");
            } else {
                assert_eq!((dx.abs(), dy.abs()), (1, 1), "{dir} should be diagonal");
            }
        }
    }

    #[test]
    fn paired_corner_moves_share_targets() {
        // NE and EN both land on (+1, +1), and so on around the compass.
        assert_eq!(MoveDir::NE.target_offset(), MoveDir::EN.target_offset());
        assert_eq!(MoveDir::NW.target_offset(), MoveDir::WN.target_offset());
        assert_eq!(MoveDir::SE.target_offset(), MoveDir::ES.target_offset());
        assert_eq!(MoveDir::SW.target_offset(), MoveDir::WS.target_offset());
    }

    #[test]
    fn pivot_follows_first_letter() {
        let m = Move::new(Cell::new(0, 0), MoveDir::NE);
        assert_eq!(m.pivot(), Cell::new(0, 1));
        assert_eq!(m.target(), Cell::new(1, 1));

        let m = Move::new(Cell::new(0, 0), MoveDir::EN);
        assert_eq!(m.pivot(), Cell::new(1, 0));
        assert_eq!(m.target(), Cell::new(1, 1));

        let m = Move::new(Cell::new(0, 0), MoveDir::S);
        assert_eq!(m.pivot(), m.target());
    }

    #[test]
    fn neighbor_flags_index_by_compass() {
        let mut flags = NeighborFlags::default();
        flags.0[Compass::E.index()] = true;
        flags.0[Compass::NW.index()] = true;
        assert!(flags.has(Compass::E));
        assert!(flags.has(Compass::NW));
        assert!(!flags.has(Compass::N));
        assert_eq!(flags.degree4(), 1);
    }
}
