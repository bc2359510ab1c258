//! Board frames and the ASCII renderer for terminal viewing with ANSI colors.

#![allow(clippy::format_push_string)]

use std::fmt;

use crate::game::{CellKind, Coord, Die, Match, MatchOutcome, MatchView, Side};

/// ANSI color codes for the sides, indexed by [`Side::index`].
const SIDE_COLORS: [&str; 2] = [
    "\x1b[31m", // A: Red
    "\x1b[34m", // B: Blue
];

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GRAY: &str = "\x1b[90m";
const YELLOW: &str = "\x1b[33m";

/// Glyph drawn for an empty cell of the given kind.
#[must_use]
pub const fn cell_glyph(kind: CellKind) -> char {
    match kind {
        CellKind::Void => ' ',
        CellKind::Track => '*',
        CellKind::Lane => '#',
        CellKind::Center => 'X',
    }
}

/// The board as a grid of glyphs, with pawns drawn over the cells they
/// stand on.
///
/// `Display` gives the plain numbered grid:
/// ```text
///    0  1  2  3  4
/// 0        *  A
/// 1        #  *
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardFrame {
    size: usize,
    cells: Vec<char>,
}

impl BoardFrame {
    /// Build the frame for a view. Stacked pawns show a single glyph.
    #[must_use]
    pub fn new(view: &MatchView<'_>) -> Self {
        let board = view.board;
        let size = usize::from(board.size().get());
        let mut cells: Vec<char> = board
            .cells()
            .map(|cell| cell_glyph(board.cell_kind(cell)))
            .collect();

        for player in view.players {
            for &pawn in player.pawns() {
                cells[index(size, pawn)] = player.side().glyph();
            }
        }

        Self { size, cells }
    }

    /// Frame for the current state of a match.
    #[must_use]
    pub fn from_match<D: Die>(game: &Match<D>) -> Self {
        Self::new(&game.view())
    }

    /// Board edge length.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size)
    }
}

impl fmt::Display for BoardFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..self.size {
            write!(f, "  {}", col % 10)?;
        }
        for (row, cells) in self.rows().enumerate() {
            write!(f, "\n{}", row % 10)?;
            for glyph in cells {
                write!(f, "  {glyph}")?;
            }
        }
        Ok(())
    }
}

fn index(size: usize, cell: Coord) -> usize {
    usize::from(cell.row) * size + usize::from(cell.col)
}

/// Render a match to ASCII with ANSI colors.
///
/// Output format:
/// ```text
/// Turn 12/1000                    next: A
///    0  1  2  3  4  5  6
/// 0        *  *  A
/// ...
///
/// Legend: *=Track  #=Home lane  X=Center  A/B=Pawns
///
/// Side A:  reserve 1  on track 1  finished 0
/// Side B:  reserve 2  on track 0  finished 0
/// ```
#[must_use]
pub fn render_ascii<D: Die>(game: &Match<D>) -> String {
    let mut output = String::new();

    render_header(&mut output, game);
    render_grid(&mut output, &BoardFrame::from_match(game));
    output.push_str("\nLegend: *=Track  #=Home lane  X=Center  A/B=Pawns\n\n");
    render_side_stats(&mut output, game);

    output
}

fn render_header<D: Die>(output: &mut String, game: &Match<D>) {
    let turn = game.turn();
    let header = match game.config().max_turns {
        0 => format!("Turn {turn}"),
        max => format!("Turn {turn}/{max}"),
    };
    output.push_str(&header);

    let padding = 32usize.saturating_sub(header.len());
    output.push_str(&" ".repeat(padding));

    match game.outcome() {
        MatchOutcome::Ongoing => {
            let side = game.turn_holder();
            output.push_str(&format!("next: {}{side}{RESET}", side_color(side)));
        }
        MatchOutcome::Won(side) => {
            output.push_str(&format!("{BOLD}{}{side} player won{RESET}", side_color(side)));
        }
        MatchOutcome::Draw => output.push_str(&format!("{YELLOW}draw{RESET}")),
    }
    output.push('\n');
}

fn render_grid(output: &mut String, frame: &BoardFrame) {
    output.push(' ');
    for col in 0..frame.size() {
        output.push_str(&format!("  {GRAY}{}{RESET}", col % 10));
    }
    output.push('\n');

    for (row, cells) in frame.rows().enumerate() {
        output.push_str(&format!("{GRAY}{}{RESET}", row % 10));
        for &glyph in cells {
            output.push_str("  ");
            render_glyph(output, glyph);
        }
        output.push('\n');
    }
}

fn render_glyph(output: &mut String, glyph: char) {
    match Side::BOTH.into_iter().find(|side| side.glyph() == glyph) {
        Some(side) => output.push_str(&format!("{BOLD}{}{glyph}{RESET}", side_color(side))),
        None if glyph == ' ' => output.push(' '),
        None => output.push_str(&format!("{DIM}{glyph}{RESET}")),
    }
}

fn render_side_stats<D: Die>(output: &mut String, game: &Match<D>) {
    for side in Side::BOTH {
        let player = game.player(side);
        let stats = game.stats(side);
        output.push_str(&format!(
            "{}Side {side}:{RESET}  reserve {}  on track {}  finished {}  captures {}\n",
            side_color(side),
            player.reserve_count(),
            player.pawns().len(),
            player.finished_count(),
            stats.captures,
        ));
    }
}

fn side_color(side: Side) -> &'static str {
    SIDE_COLORS[side.index()]
}
