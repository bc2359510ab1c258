//! Watch command implementation - Interactive TUI viewer.

#![allow(clippy::needless_pass_by_value)]

use super::{BoardArgs, CliError, resolve_seed};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use parchis::game::MatchOutcome;
use parchis::replay::{BoardFrame, Recording, ReplayEngine};
use parchis::Side;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::stdout;
use std::time::{Duration, Instant};

/// Execute the watch command.
///
/// # Errors
///
/// Returns an error if the TUI fails.
pub(crate) fn execute(board: BoardArgs, seed: Option<u64>, speed: u64) -> Result<(), CliError> {
    let seed = resolve_seed(seed);
    let recording = Recording::new(seed, board.config());
    info!("watching seed {seed}");

    run_tui(ReplayEngine::new(recording), speed)
}

/// App state for the TUI.
struct App {
    engine: ReplayEngine,
    paused: bool,
    speed_ms: u64,
    last_step: Instant,
}

impl App {
    fn new(engine: ReplayEngine, speed_ms: u64) -> Self {
        Self {
            engine,
            paused: true,
            speed_ms,
            last_step: Instant::now(),
        }
    }

    fn step_forward(&mut self) {
        if !self.engine.is_game_over() {
            let _ = self.engine.step_forward();
            self.last_step = Instant::now();
        }
    }

    fn step_backward(&mut self) {
        let _ = self.engine.step_backward();
        self.last_step = Instant::now();
    }

    fn restart(&mut self) {
        let _ = self.engine.goto_turn(0);
        self.paused = true;
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    fn increase_speed(&mut self) {
        self.speed_ms = self.speed_ms.saturating_sub(100).max(50);
    }

    fn decrease_speed(&mut self) {
        self.speed_ms = (self.speed_ms + 100).min(2000);
    }

    fn should_auto_step(&self) -> bool {
        !self.paused
            && !self.engine.is_game_over()
            && self.last_step.elapsed() >= Duration::from_millis(self.speed_ms)
    }
}

fn run_tui(engine: ReplayEngine, speed: u64) -> Result<(), CliError> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(engine, speed);
    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<(), CliError> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if app.should_auto_step() {
            app.step_forward();
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char(' ') => app.toggle_pause(),
                KeyCode::Right | KeyCode::Char('l') => {
                    app.paused = true;
                    app.step_forward();
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    app.paused = true;
                    app.step_backward();
                }
                KeyCode::Char('+' | '=') => app.increase_speed(),
                KeyCode::Char('-') => app.decrease_speed(),
                KeyCode::Char('r') => app.restart(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, main_chunks[0], app);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    render_stats(f, side_chunks[0], app);
    render_events(f, side_chunks[1], app);

    render_footer(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let game = app.engine.state();
    let status = match game.outcome() {
        MatchOutcome::Won(side) => format!("{side} PLAYER WON"),
        MatchOutcome::Draw => "DRAW".to_string(),
        MatchOutcome::Ongoing if app.paused => "PAUSED".to_string(),
        MatchOutcome::Ongoing => "RUNNING".to_string(),
    };

    let title = format!(
        " Parchis Viewer | Seed {} | {} | {status} | Speed: {}ms ",
        app.engine.recording().seed,
        turn_label(app.engine.turn(), game.config().max_turns),
        app.speed_ms
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

/// `Turn n/max`, or just `Turn n` when there is no cap.
fn turn_label(turn: u32, max_turns: u32) -> String {
    match max_turns {
        0 => format!("Turn {turn}"),
        max => format!("Turn {turn}/{max}"),
    }
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let frame = BoardFrame::from_match(app.engine.state());

    let mut header = vec![Span::raw(" ")];
    for col in 0..frame.size() {
        header.push(Span::styled(
            format!("  {}", col % 10),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut lines = vec![Line::from(header)];
    for (row, cells) in frame.rows().enumerate() {
        let mut spans = vec![Span::styled(
            format!("{}", row % 10),
            Style::default().fg(Color::DarkGray),
        )];
        for &glyph in cells {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(glyph.to_string(), glyph_style(glyph)));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Board "));

    f.render_widget(board, area);
}

fn glyph_style(glyph: char) -> Style {
    match Side::BOTH.into_iter().find(|side| side.glyph() == glyph) {
        Some(side) => Style::default()
            .fg(side_color(side))
            .add_modifier(Modifier::BOLD),
        None if glyph == 'X' => Style::default().fg(Color::Yellow),
        None => Style::default().fg(Color::Gray),
    }
}

fn render_stats(f: &mut Frame, area: Rect, app: &App) {
    let game = app.engine.state();
    let mut lines = vec![Line::from("")];

    for side in Side::BOTH {
        let player = game.player(side);
        let stats = game.stats(side);
        let marker = if game.turn_holder() == side && !game.is_over() {
            " <"
        } else {
            ""
        };

        lines.push(Line::from(vec![Span::styled(
            format!("Side {side}{marker}"),
            Style::default()
                .fg(side_color(side))
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(format!(
            "  Reserve: {}  On track: {}  Home: {}",
            player.reserve_count(),
            player.pawns().len(),
            player.finished_count()
        )));
        lines.push(Line::from(format!(
            "  Rolls: {}  Sixes: {}  Captures: {}",
            stats.rolls, stats.sixes, stats.captures
        )));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Sides "))
        .wrap(Wrap { trim: false });

    f.render_widget(widget, area);
}

fn render_events(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .engine
        .last_events()
        .iter()
        .map(|event| {
            let style = event
                .side()
                .map_or_else(Style::default, |side| Style::default().fg(side_color(side)));
            Line::from(Span::styled(event.to_string(), style))
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Last turn "))
        .wrap(Wrap { trim: false });

    f.render_widget(widget, area);
}

const fn side_color(side: Side) -> Color {
    match side {
        Side::A => Color::Red,
        Side::B => Color::Blue,
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.engine.is_game_over() {
        " [q] Quit  [r] Restart  [←/→] Step "
    } else {
        " [q] Quit  [Space] Pause  [←/→] Step  [+/-] Speed  [r] Restart "
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use parchis::MatchConfig;

    fn app() -> App {
        App::new(ReplayEngine::new(Recording::new(3, MatchConfig::default())), 500)
    }

    #[test]
    fn test_app_starts_paused() {
        let app = app();
        assert!(app.paused);
        assert!(!app.should_auto_step());
    }

    #[test]
    fn test_step_and_restart() {
        let mut app = app();
        app.step_forward();
        app.step_forward();
        assert_eq!(app.engine.turn(), 2);
        app.step_backward();
        assert_eq!(app.engine.turn(), 1);
        app.toggle_pause();
        app.restart();
        assert_eq!(app.engine.turn(), 0);
        assert!(app.paused);
    }

    #[test]
    fn test_turn_label_without_cap() {
        assert_eq!(turn_label(12, 0), "Turn 12");
        assert_eq!(turn_label(12, 1000), "Turn 12/1000");
    }

    #[test]
    fn test_speed_bounds() {
        let mut app = app();
        for _ in 0..20 {
            app.increase_speed();
        }
        assert_eq!(app.speed_ms, 50);
        for _ in 0..30 {
            app.decrease_speed();
        }
        assert_eq!(app.speed_ms, 2000);
    }
}
