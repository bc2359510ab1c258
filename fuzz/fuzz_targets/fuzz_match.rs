#![no_main]

//! Whole-match fuzzer.
//!
//! Plays matches on arbitrary board sizes with either a seeded or a fully
//! scripted die, and checks every invariant after each turn.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use parchis::game::{Match, ScriptedDice, check_invariants};
use parchis::{FieldSize, MatchConfig, StepRule};

/// Structured input for match fuzzing.
#[derive(Arbitrary, Debug)]
struct MatchInput {
    /// Board size selector, mapped onto the valid odd sizes.
    size: u8,
    /// Use rolled steps instead of fixed ones.
    rolled: bool,
    /// Turns to play (capped).
    turns: u8,
    /// Seed for the seeded die.
    seed: u64,
    /// When present, the die replays these values instead.
    script: Option<Vec<u8>>,
}

fuzz_target!(|input: MatchInput| {
    let Ok(field_size) = FieldSize::new(5 + 2 * u32::from(input.size % 9)) else {
        return;
    };
    let config = MatchConfig {
        field_size,
        step_rule: if input.rolled {
            StepRule::Rolled
        } else {
            StepRule::Fixed
        },
        max_turns: 0,
    };

    match input.script {
        Some(script) => {
            // A decided opening, the script mapped onto die faces, then
            // enough ones to cover every remaining roll.
            let rolls = [2, 1]
                .into_iter()
                .chain(script.into_iter().map(|v| v % 6 + 1))
                .chain(std::iter::repeat_n(1, 3 * usize::from(input.turns)));
            play(Match::new(config, ScriptedDice::new(rolls)), input.turns);
        }
        None => play(Match::seeded(input.seed, config), input.turns),
    }
});

fn play<D: parchis::game::Die>(mut game: Match<D>, turns: u8) {
    let violations = check_invariants(&game);
    assert!(violations.is_empty(), "after setup: {violations:?}");

    for _ in 0..turns {
        if game.someone_won() {
            break;
        }
        let before = game.turn();
        game.make_move(&mut ());
        assert_eq!(game.turn(), before + 1);

        let violations = check_invariants(&game);
        assert!(
            violations.is_empty(),
            "turn {}: {violations:?}",
            game.turn()
        );
    }
}
