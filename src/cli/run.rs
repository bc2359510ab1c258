//! Run command implementation.

use super::output::{JsonMatchResult, format_outcome};
use super::{BoardArgs, CliError, OutputFormat, prompt, resolve_seed};
use log::info;
use parchis::replay::{BoardFrame, render_summary};
use parchis::{Match, MatchEvent, MatchView, Presenter};
use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::Duration;

/// Delay between characters of an animated status message.
const CHAR_DELAY: Duration = Duration::from_millis(100);

/// Pause after an animated status message.
const MESSAGE_PAUSE: Duration = Duration::from_millis(1250);

/// Clear the screen and move the cursor home.
const CLEAR: &str = "\x1b[2J\x1b[H";

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if reading the size or writing the output fails.
pub(crate) fn execute(
    board: BoardArgs,
    seed: Option<u64>,
    format: OutputFormat,
    quiet: bool,
    animate: bool,
) -> Result<(), CliError> {
    let interactive = format == OutputFormat::Text && !quiet && io::stdin().is_terminal();
    let config = match board.size {
        None if interactive => {
            let size = prompt::read_field_size(&mut io::stdin().lock(), &mut io::stdout())?;
            board.config_with(size)
        }
        _ => board.config(),
    };
    let seed = resolve_seed(seed);
    info!(
        "running seed {seed} on a {0}x{0} board, {1:?} steps, max {2} turns",
        config.field_size, config.step_rule, config.max_turns
    );

    let mut game = Match::seeded(seed, config);

    match format {
        OutputFormat::Text => {
            let mut out = io::stdout().lock();
            if quiet {
                game.play_out(&mut ());
            } else {
                let mut presenter = TextPresenter::new(&mut out, animate);
                game.announce_opening(&mut presenter);
                game.play_out(&mut presenter);
                presenter.finish()?;
            }
            writeln!(out, "{}", format_outcome(game.outcome(), game.turn()))?;
            if !quiet {
                writeln!(out, "Seed: {seed}")?;
            }
        }
        OutputFormat::Json => {
            let mut events = Vec::new();
            game.announce_opening(&mut events);
            game.play_out(&mut events);
            let json = serde_json::to_string_pretty(&JsonMatchResult::new(seed, &game, &events))?;
            println!("{json}");
        }
        OutputFormat::Summary => {
            game.play_out(&mut ());
            print!("{}", render_summary(&game));
        }
    }

    Ok(())
}

/// Draws the board and a status line for every event.
///
/// With `animate`, each frame replaces the previous one and the status line
/// is typed out one character at a time.
struct TextPresenter<W: Write> {
    out: W,
    animate: bool,
    /// First write error; later events are skipped.
    error: Option<io::Error>,
}

impl<W: Write> TextPresenter<W> {
    fn new(out: W, animate: bool) -> Self {
        Self {
            out,
            animate,
            error: None,
        }
    }

    fn show(&mut self, view: &MatchView<'_>, event: &MatchEvent) -> io::Result<()> {
        let frame = BoardFrame::new(view);
        if self.animate {
            write!(self.out, "{CLEAR}")?;
        }
        writeln!(self.out, "{frame}\n")?;

        let message = event.to_string();
        if self.animate {
            for ch in message.chars() {
                write!(self.out, "{ch}")?;
                self.out.flush()?;
                thread::sleep(CHAR_DELAY);
            }
            writeln!(self.out)?;
            self.out.flush()?;
            thread::sleep(MESSAGE_PAUSE);
        } else {
            writeln!(self.out, "{message}\n")?;
        }
        Ok(())
    }

    /// Surface the first write error, if any.
    fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, view: &MatchView<'_>, event: &MatchEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.show(view, event) {
            self.error = Some(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parchis::MatchConfig;

    #[test]
    fn test_text_presenter_prints_frames_and_messages() {
        let mut game = Match::seeded(4, MatchConfig::default());
        let mut buffer = Vec::new();
        let mut presenter = TextPresenter::new(&mut buffer, false);
        game.announce_opening(&mut presenter);
        game.make_move(&mut presenter);
        presenter.finish().unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("moves first"));
        assert!(text.contains("on the die"));
        assert!(text.contains("   0  1  2"));
        assert!(!text.contains(CLEAR));
    }
}
