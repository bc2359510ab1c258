//! Replay command implementation.

use super::{BoardArgs, CliError, ReplayFormat};
use log::info;
use parchis::replay::{Recording, ReplayEngine};

/// Execute the replay command.
///
/// Without `turn` the match is replayed to its end.
///
/// # Errors
///
/// Returns an error if the turn lies beyond the cap, or if no turn was given
/// for an uncapped match.
pub(crate) fn execute(
    board: BoardArgs,
    seed: u64,
    turn: Option<u32>,
    format: ReplayFormat,
) -> Result<(), CliError> {
    let recording = Recording::new(seed, board.config());
    let target = target_turn(&recording, turn)?;
    info!("replaying seed {seed} to turn {target}");

    let mut engine = ReplayEngine::new(recording);
    engine.goto_turn(target)?;

    match format {
        ReplayFormat::Text => {
            print!("{}", engine.render_ascii());
            for event in engine.last_events() {
                println!("  {event}");
            }
        }
        ReplayFormat::Summary => print!("{}", engine.render_summary()),
    }

    Ok(())
}

fn target_turn(recording: &Recording, turn: Option<u32>) -> Result<u32, CliError> {
    match (turn, recording.config.max_turns) {
        (Some(turn), _) => Ok(turn),
        (None, 0) => Err(CliError::new(
            "an uncapped match may never end; pass --turn or --max-turns",
        )),
        (None, max) => Ok(max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parchis::MatchConfig;

    #[test]
    fn test_target_defaults_to_cap() {
        let recording = Recording::new(1, MatchConfig::default());
        assert_eq!(target_turn(&recording, None).unwrap(), 1000);
        assert_eq!(target_turn(&recording, Some(12)).unwrap(), 12);
    }

    #[test]
    fn test_uncapped_needs_turn() {
        let config = MatchConfig {
            max_turns: 0,
            ..MatchConfig::default()
        };
        let recording = Recording::new(1, config);
        assert!(target_turn(&recording, None).is_err());
        assert_eq!(target_turn(&recording, Some(3)).unwrap(), 3);
    }
}
