//! Structured plain-text summary of a match.
//!
//! No colors and one fact per line, so the output is easy to diff and grep.

#![allow(clippy::format_push_string)]

use crate::config::StepRule;
use crate::game::{Coord, Die, Match, MatchOutcome, Side};

/// Render a match to structured text.
///
/// Output format:
/// ```text
/// === TURN 42 OF 1000 ===
/// Board: 11x11, step rule: fixed
/// Status: ongoing, next: B
///
/// SIDE A:
/// - Reserve: 1
/// - On track: 2 at [(4,8), (6,2)]
/// - Finished: 1
/// - Blocked cells: [(4,5)]
/// - Rolls: 30 (sixes: 5), moves: 20, captures: 1, stalls: 4
/// ...
/// ```
#[must_use]
pub fn render_summary<D: Die>(game: &Match<D>) -> String {
    let mut output = String::new();

    render_header(&mut output, game);
    for side in Side::BOTH {
        render_side(&mut output, game, side);
    }

    output
}

fn render_header<D: Die>(output: &mut String, game: &Match<D>) {
    let config = game.config();
    match config.max_turns {
        0 => output.push_str(&format!("=== TURN {} ===\n", game.turn())),
        max => output.push_str(&format!("=== TURN {} OF {max} ===\n", game.turn())),
    }
    let size = config.field_size;
    let rule = match config.step_rule {
        StepRule::Fixed => "fixed",
        StepRule::Rolled => "rolled",
    };
    output.push_str(&format!("Board: {size}x{size}, step rule: {rule}\n"));

    let status = match game.outcome() {
        MatchOutcome::Ongoing => format!("ongoing, next: {}", game.turn_holder()),
        MatchOutcome::Won(side) => format!("{side} player won"),
        MatchOutcome::Draw => "draw".to_string(),
    };
    output.push_str(&format!("Status: {status}\n\n"));
}

fn render_side<D: Die>(output: &mut String, game: &Match<D>, side: Side) {
    let player = game.player(side);
    let stats = game.stats(side);

    output.push_str(&format!("SIDE {side}:\n"));
    output.push_str(&format!("- Reserve: {}\n", player.reserve_count()));
    output.push_str(&format!(
        "- On track: {} at [{}]\n",
        player.pawns().len(),
        coord_list(player.pawns().iter().copied())
    ));
    output.push_str(&format!("- Finished: {}\n", player.finished_count()));
    output.push_str(&format!(
        "- Blocked cells: [{}]\n",
        coord_list(player.blocked_cells().iter().copied())
    ));
    output.push_str(&format!(
        "- Rolls: {} (sixes: {}), moves: {}, captures: {}, stalls: {}\n\n",
        stats.rolls, stats.sixes, stats.moves, stats.captures, stats.stalls
    ));
}

fn coord_list(cells: impl Iterator<Item = Coord>) -> String {
    cells
        .map(|c| format!("({},{})", c.row, c.col))
        .collect::<Vec<_>>()
        .join(", ")
}
