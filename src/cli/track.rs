//! Track command implementation.

#![allow(clippy::format_push_string)]

use super::SideArg;
use parchis::game::CellKind;
use parchis::{Board, FieldSize, Side};

/// Execute the track command.
pub(crate) fn execute(size: Option<FieldSize>, side: SideArg) {
    let board = Board::new(size.unwrap_or_default());
    print!("{}", format_track(&board, side.into()));
}

/// One line per cell of a side's path, then the step count.
fn format_track(board: &Board, side: Side) -> String {
    let mut output = format!(
        "Side {side} on a {0}x{0} board, entry {1}, guard {2}\n",
        board.size(),
        board.entry(side),
        board.guard(side)
    );

    for (step, cell) in board.path(side).enumerate() {
        let note = match board.cell_kind(cell) {
            CellKind::Lane => "  lane",
            CellKind::Center => "  center",
            CellKind::Track | CellKind::Void => "",
        };
        output.push_str(&format!("{step:>3}  {cell}{note}\n"));
    }

    output.push_str(&format!("Length: {} steps\n", board.track_len(side)));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_listing_5x5() {
        let board = Board::new(FieldSize::new(5).unwrap());
        let text = format_track(&board, Side::A);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("Side A on a 5x5 board"));
        assert!(lines[1].starts_with("  0  "));
        assert!(lines[lines.len() - 2].ends_with("center"));
        assert_eq!(
            lines.last().copied(),
            Some(format!("Length: {} steps", board.track_len(Side::A)).as_str())
        );
        assert_eq!(lines.len(), board.track_len(Side::A) + 3);
    }

    #[test]
    fn test_sides_have_equal_length() {
        let board = Board::new(FieldSize::default());
        assert_eq!(board.track_len(Side::A), board.track_len(Side::B));
    }
}
