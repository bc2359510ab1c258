//! Board geometry: coordinates, directions and the cross-shaped track.
//!
//! The track is the outline of a plus sign three cells wide. Each side
//! joins the outline next to the middle column on its own edge, runs
//! clockwise around all four arms, and turns into the middle column on
//! the far side of the first arm it crosses again, which leads straight
//! to the center.
//!
//! ```text
//!       * * *            * = track
//!       * # *            # = home lane
//! * * * * # * * * *      X = center
//! * # # # X # # # *
//! * * * * # * * * *
//!       * # *
//!       * * *
//! ```

use std::fmt;

use serde::Serialize;

use crate::config::FieldSize;
use crate::game::Side;

/// A cell on the board, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    /// Row (grows downwards).
    pub row: u8,
    /// Column (grows rightwards).
    pub col: u8,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell in `direction`, or `None` past row/column 0.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let Self { row, col } = self;
        match direction {
            Direction::Up => row.checked_sub(1).map(|row| Self::new(row, col)),
            Direction::Down => row.checked_add(1).map(|row| Self::new(row, col)),
            Direction::Left => col.checked_sub(1).map(|col| Self::new(row, col)),
            Direction::Right => col.checked_add(1).map(|col| Self::new(row, col)),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Single-cell movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// What a board cell is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Outside the cross.
    Void,
    /// Part of the shared ring.
    Track,
    /// Part of a straight stretch leading to the center.
    Lane,
    /// The destination cell.
    Center,
}

/// Pure geometry of a board of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    size: FieldSize,
}

impl Board {
    /// Geometry for a board of the given size.
    #[must_use]
    pub const fn new(size: FieldSize) -> Self {
        Self { size }
    }

    /// Board edge length.
    #[must_use]
    pub const fn size(&self) -> FieldSize {
        self.size
    }

    /// Index of the middle row and column.
    #[must_use]
    pub const fn medium(&self) -> u8 {
        self.size.medium()
    }

    /// Index of the last row and column.
    const fn last(&self) -> u8 {
        self.size.get() - 1
    }

    /// The destination cell.
    #[must_use]
    pub const fn center(&self) -> Coord {
        let m = self.medium();
        Coord::new(m, m)
    }

    /// Where a side's pawns are placed when they leave the reserve.
    #[must_use]
    pub fn entry(&self, side: Side) -> Coord {
        let profile = side.profile();
        let col = self.medium().saturating_add_signed(profile.entry_offset);
        Coord::new(profile.entry_edge.row(self.size), col)
    }

    /// The cell a side permanently holds: the last cell of its home lane.
    ///
    /// A pawn of the other side that runs through the center would step
    /// onto this cell next, so holding it stops overshooting moves.
    #[must_use]
    pub fn guard(&self, side: Side) -> Coord {
        let center = self.center();
        let (row, col) = match side.profile().lane.reverse() {
            Direction::Up => (center.row - 1, center.col),
            Direction::Down => (center.row + 1, center.col),
            Direction::Left => (center.row, center.col - 1),
            Direction::Right => (center.row, center.col + 1),
        };
        Coord::new(row, col)
    }

    /// Whether `pos` lies on the board.
    #[must_use]
    pub const fn in_bounds(&self, pos: Coord) -> bool {
        pos.row < self.size.get() && pos.col < self.size.get()
    }

    /// Direction a pawn of `side` standing on `pos` moves next.
    ///
    /// The home-lane rule wins over everything else, then the twelve
    /// corner cells, then plain row and column membership. Returns `None`
    /// only for cells that no rule covers, which never happens on the
    /// track.
    #[must_use]
    pub fn direction_at(&self, pos: Coord, side: Side) -> Option<Direction> {
        if !self.in_bounds(pos) {
            return None;
        }

        let (r, c) = (pos.row, pos.col);
        let m = self.medium();
        let n = self.last();

        // The middle column leads home, except on the far edge where the
        // other side's lane begins and this side is still on the ring.
        let far_row = side.opposite().profile().entry_edge.row(self.size);
        if c == m && r != far_row {
            return Some(side.profile().lane);
        }

        let right_turn =
            (r == 0 && c == m - 1) || (r == m - 1 && c == 0) || (r == m - 1 && c == m + 1);
        let left_turn =
            (r == m + 1 && c == m - 1) || (r == m + 1 && c == n) || (r == n && c == m + 1);
        let up_turn =
            (r == m - 1 && c == m - 1) || (r == m + 1 && c == 0) || (r == n && c == m - 1);
        let down_turn =
            (r == 0 && c == m + 1) || (r == m - 1 && c == n) || (r == m + 1 && c == m + 1);

        let direction = if right_turn {
            Direction::Right
        } else if left_turn {
            Direction::Left
        } else if up_turn {
            Direction::Up
        } else if down_turn {
            Direction::Down
        } else if r == 0 || r == m - 1 {
            Direction::Right
        } else if r == m + 1 || r == n {
            Direction::Left
        } else if c == 0 || c == m - 1 {
            Direction::Up
        } else if c == m + 1 || c == n {
            Direction::Down
        } else {
            return None;
        };

        Some(direction)
    }

    /// One single-cell step along the track of `side`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not a cell `side` can stand on. Pawns only ever
    /// reach positions produced by [`Board::entry`] and this function, so
    /// a panic here is a geometry bug.
    #[must_use]
    pub fn next_position(&self, pos: Coord, side: Side) -> Coord {
        self.direction_at(pos, side)
            .and_then(|direction| pos.step(direction))
            .filter(|next| self.in_bounds(*next))
            .unwrap_or_else(|| panic!("{pos} is not on the track of side {side}"))
    }

    /// Every cell `side` visits, from its entry cell to the center inclusive.
    #[must_use]
    pub fn path(&self, side: Side) -> Path {
        Path {
            board: *self,
            side,
            next: Some(self.entry(side)),
        }
    }

    /// Number of single-cell steps from a side's entry cell to the center.
    #[must_use]
    pub fn track_len(&self, side: Side) -> usize {
        self.path(side).count() - 1
    }

    /// Classify a cell for drawing.
    #[must_use]
    pub fn cell_kind(&self, pos: Coord) -> CellKind {
        if !self.in_bounds(pos) {
            return CellKind::Void;
        }

        let (r, c) = (pos.row, pos.col);
        let m = self.medium();
        let n = self.last();

        if r == m && c == m {
            return CellKind::Center;
        }

        let near_middle = |v: u8| v.abs_diff(m) <= 1;
        let on_ring = ((r == 0 || r == n) && near_middle(c))
            || ((c == 0 || c == n) && near_middle(r))
            || ((r == m - 1 || r == m + 1) && c != m)
            || ((c == m - 1 || c == m + 1) && r != m);

        if on_ring {
            CellKind::Track
        } else if r == m || c == m {
            CellKind::Lane
        } else {
            CellKind::Void
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let size = self.size.get();
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }
}

/// Iterator over a side's path, see [`Board::path`].
#[allow(missing_copy_implementations)]
#[derive(Debug, Clone)]
pub struct Path {
    board: Board,
    side: Side,
    next: Option<Coord>,
}

impl Iterator for Path {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let current = self.next?;
        self.next = (current != self.board.center())
            .then(|| self.board.next_position(current, self.side));
        Some(current)
    }
}
