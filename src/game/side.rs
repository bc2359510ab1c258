//! The two competing sides and their fixed track profiles.

use std::fmt;

use serde::Serialize;

use crate::config::FieldSize;
use crate::game::Direction;

/// One of the two competing players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Side {
    /// Enters from the top edge and runs down its home lane.
    A,
    /// Enters from the bottom edge and runs up its home lane.
    B,
}

/// Board edge a side enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Row 0.
    Top,
    /// Row `N - 1`.
    Bottom,
}

impl Edge {
    /// Row index of this edge on a board of the given size.
    #[must_use]
    pub const fn row(self, size: FieldSize) -> u8 {
        match self {
            Self::Top => 0,
            Self::Bottom => size.get() - 1,
        }
    }
}

/// Static description of how a side uses the shared track.
///
/// Both sides run the same ring; they differ only in where they join it
/// and in which half of the middle column leads them to the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideProfile {
    /// Glyph used for this side's pawns.
    pub glyph: char,
    /// Edge holding the entry cell.
    pub entry_edge: Edge,
    /// Column of the entry cell relative to the middle column.
    pub entry_offset: i8,
    /// Direction of travel inside the home lane.
    pub lane: Direction,
}

const PROFILE_A: SideProfile = SideProfile {
    glyph: 'A',
    entry_edge: Edge::Top,
    entry_offset: 1,
    lane: Direction::Down,
};

const PROFILE_B: SideProfile = SideProfile {
    glyph: 'B',
    entry_edge: Edge::Bottom,
    entry_offset: -1,
    lane: Direction::Up,
};

impl Side {
    /// Both sides, in index order.
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    /// Track profile for this side.
    #[must_use]
    pub const fn profile(self) -> &'static SideProfile {
        match self {
            Self::A => &PROFILE_A,
            Self::B => &PROFILE_B,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Pawn glyph (uppercase side letter).
    #[must_use]
    pub const fn glyph(self) -> char {
        self.profile().glyph
    }

    /// Stable index for per-side arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Side::A.opposite(), Side::B);
        assert_eq!(Side::B.opposite(), Side::A);
        for side in Side::BOTH {
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    #[test]
    fn test_profiles_mirror() {
        let a = Side::A.profile();
        let b = Side::B.profile();
        assert_ne!(a.entry_edge, b.entry_edge);
        assert_eq!(a.entry_offset, -b.entry_offset);
        assert_eq!(a.lane, b.lane.reverse());
    }

    #[test]
    fn test_edge_rows() {
        let size = FieldSize::new(11).unwrap();
        assert_eq!(Edge::Top.row(size), 0);
        assert_eq!(Edge::Bottom.row(size), 10);
    }

    #[test]
    fn test_display_and_index() {
        assert_eq!(Side::A.to_string(), "A");
        assert_eq!(Side::B.to_string(), "B");
        assert_eq!(Side::A.index(), 0);
        assert_eq!(Side::B.index(), 1);
    }
}
