//! Player state management.

use std::collections::BTreeSet;

use log::trace;

use crate::game::{Board, Coord, Side};

/// A pawn that completed a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PawnMove {
    /// Index of the pawn in the mover's active list before the move.
    pub pawn: usize,
    /// Cell the pawn left.
    pub from: Coord,
    /// Cell the pawn landed on.
    pub to: Coord,
    /// Whether the pawn landed on the center and left play.
    pub finished: bool,
}

/// State for a single side.
///
/// Pawn accounting: every pawn is in exactly one of three places, the
/// reserve, the track (`pawns`), or finished. Being captured moves a pawn
/// from the track back to the reserve; reaching the center moves it to
/// finished, where it stays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Which side this is.
    side: Side,
    /// Board geometry.
    board: Board,
    /// Pawns waiting to enter.
    reserve: u8,
    /// Pawns that reached the center.
    finished: u8,
    /// Pawns on the track, in the order they entered.
    pawns: Vec<Coord>,
    /// Cells the opponent may not land on or pass. Derived from `pawns`.
    blocked: BTreeSet<Coord>,
}

impl PlayerState {
    /// Create a side with its whole reserve and no pawns on the track.
    #[must_use]
    pub fn new(side: Side, board: Board) -> Self {
        let mut state = Self {
            side,
            board,
            reserve: board.size().pawns_per_side(),
            finished: 0,
            pawns: Vec::new(),
            blocked: BTreeSet::new(),
        };
        state.refresh_blocked_cells();
        state
    }

    /// Build an arbitrary mid-game state. Pawns not in the reserve and not
    /// on the track count as finished.
    ///
    /// # Panics
    ///
    /// Panics if `reserve + pawns.len()` exceeds the pawns per side.
    #[must_use]
    pub fn from_parts(side: Side, board: Board, reserve: u8, pawns: Vec<Coord>) -> Self {
        let total = usize::from(board.size().pawns_per_side());
        let in_play = usize::from(reserve) + pawns.len();
        assert!(
            in_play <= total,
            "side {side} has {total} pawns, cannot place {in_play}"
        );
        let finished = u8::try_from(total - in_play).unwrap_or(u8::MAX);
        let mut state = Self {
            side,
            board,
            reserve,
            finished,
            pawns,
            blocked: BTreeSet::new(),
        };
        state.refresh_blocked_cells();
        state
    }

    /// Which side this is.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Pawns on the track, in entry order.
    #[must_use]
    pub fn pawns(&self) -> &[Coord] {
        &self.pawns
    }

    /// Pawns waiting in the reserve.
    #[must_use]
    pub const fn reserve_count(&self) -> u8 {
        self.reserve
    }

    /// Pawns that reached the center.
    #[must_use]
    pub const fn finished_count(&self) -> u8 {
        self.finished
    }

    /// Whether this side still has pawns to play (in reserve or on the track).
    #[must_use]
    pub fn pawns_left(&self) -> bool {
        self.reserve > 0 || !self.pawns.is_empty()
    }

    /// Cells the opponent may not land on or pass through.
    #[must_use]
    pub const fn blocked_cells(&self) -> &BTreeSet<Coord> {
        &self.blocked
    }

    /// Whether any of this side's pawns stands on `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Coord) -> bool {
        self.pawns.contains(&cell)
    }

    /// Bring a pawn from the reserve onto the entry cell.
    ///
    /// # Panics
    ///
    /// Panics if the reserve is empty.
    pub fn add_pawn(&mut self) -> Coord {
        assert!(self.reserve > 0, "side {} has no pawns in reserve", self.side);
        let entry = self.board.entry(self.side);
        self.pawns.push(entry);
        self.reserve -= 1;
        self.refresh_blocked_cells();
        entry
    }

    /// Take a pawn off the track without returning it to the reserve.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_pawn(&mut self, index: usize) -> Coord {
        assert!(
            index < self.pawns.len(),
            "side {} has no pawn {index} ({} on track)",
            self.side,
            self.pawns.len()
        );
        let cell = self.pawns.remove(index);
        self.refresh_blocked_cells();
        cell
    }

    /// Send a captured pawn back to the reserve.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn move_pawn_to_home(&mut self, index: usize) -> Coord {
        let cell = self.remove_pawn(index);
        self.reserve += 1;
        cell
    }

    /// Advance the earliest-entered pawn that can cover `steps` cells
    /// without touching a cell in `opponent_blocked`.
    ///
    /// Pawns are tried in entry order; a pawn whose path is blocked does
    /// not move at all. A pawn landing on the center is finished. Returns
    /// `None` if no pawn can complete the move.
    pub fn move_pawn(
        &mut self,
        steps: u8,
        opponent_blocked: &BTreeSet<Coord>,
    ) -> Option<PawnMove> {
        let (pawn, from, to) = self.pawns.iter().enumerate().find_map(|(index, &from)| {
            let to = self.walk(from, steps, opponent_blocked);
            if to.is_none() {
                trace!("side {} pawn {index} at {from} is blocked", self.side);
            }
            to.map(|to| (index, from, to))
        })?;

        let finished = to == self.board.center();
        if finished {
            self.remove_pawn(pawn);
            self.finished += 1;
        } else {
            self.pawns[pawn] = to;
            self.refresh_blocked_cells();
        }

        trace!("side {} pawn {pawn} moved {from} -> {to}", self.side);
        Some(PawnMove {
            pawn,
            from,
            to,
            finished,
        })
    }

    /// Follow the track for `steps` cells, or `None` if a blocked cell is hit.
    fn walk(&self, from: Coord, steps: u8, blocked: &BTreeSet<Coord>) -> Option<Coord> {
        let mut pos = from;
        for _ in 0..steps {
            pos = self.board.next_position(pos, self.side);
            if blocked.contains(&pos) {
                return None;
            }
        }
        Some(pos)
    }

    /// Recompute the blocked cells from the pawn positions: every cell
    /// holding two or more pawns, plus this side's guard cell.
    pub fn refresh_blocked_cells(&mut self) {
        let mut seen = BTreeSet::new();
        let mut blocked = BTreeSet::new();
        for &cell in &self.pawns {
            if !seen.insert(cell) {
                blocked.insert(cell);
            }
        }
        blocked.insert(self.board.guard(self.side));
        self.blocked = blocked;
    }
}
