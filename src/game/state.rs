//! Match state and turn resolution.

use log::{debug, trace};
use serde::Serialize;

use crate::config::MatchConfig;
use crate::game::{
    Board, Coord, Die, MAX_ROLL, MatchEvent, MatchView, PlayerState, Presenter, SeededDice, Side,
};

/// Dice rolls a side may make in one turn. Only a six keeps the turn going.
pub const ROLLS_PER_TURN: usize = 3;

/// How a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "side", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Still being played.
    Ongoing,
    /// This side brought all of its pawns to the center.
    Won(Side),
    /// The turn cap was reached first.
    Draw,
}

impl MatchOutcome {
    /// The winning side, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::Won(side) => Some(side),
            Self::Ongoing | Self::Draw => None,
        }
    }
}

/// The rolls that decided who plays first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Opening {
    /// `(a, b)` roll pairs, ties included, the last one decisive.
    pub rolls: Vec<(u8, u8)>,
    /// Side that plays the first turn.
    pub first: Side,
}

/// Running totals for one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SideStats {
    /// Dice rolled during turns.
    pub rolls: u32,
    /// How many of those were sixes.
    pub sixes: u32,
    /// Pawns brought in from the reserve during turns.
    pub entered: u32,
    /// Successful moves, finishing ones included.
    pub moves: u32,
    /// Pawns brought to the center.
    pub finished: u32,
    /// Opponent pawns sent back to their reserve.
    pub captures: u32,
    /// Turns that ended with no legal move.
    pub stalls: u32,
}

/// A two-sided match: both players, the dice and whose turn it is.
#[derive(Debug, Clone)]
pub struct Match<D = SeededDice> {
    config: MatchConfig,
    board: Board,
    /// Indexed by [`Side::index`].
    players: [PlayerState; 2],
    turn_holder: Side,
    /// Turns played so far.
    turn: u32,
    dice: D,
    opening: Opening,
    stats: [SideStats; 2],
}

impl Match<SeededDice> {
    /// Start a match whose dice are seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64, config: MatchConfig) -> Self {
        Self::new(config, SeededDice::new(seed))
    }
}

impl<D: Die> Match<D> {
    /// Set up a match: each side enters one pawn, then both roll until the
    /// rolls differ and the higher roll plays first.
    #[must_use]
    pub fn new(config: MatchConfig, mut dice: D) -> Self {
        let board = Board::new(config.field_size);
        let players = Side::BOTH.map(|side| {
            let mut player = PlayerState::new(side, board);
            player.add_pawn();
            player
        });
        let opening = roll_opening(&mut dice);
        debug!(
            "new match on a {0}x{0} board, {1} moves first after {2} opening roll(s)",
            config.field_size,
            opening.first,
            opening.rolls.len()
        );
        Self {
            config,
            board,
            players,
            turn_holder: opening.first,
            turn: 0,
            dice,
            opening,
            stats: [SideStats::default(); 2],
        }
    }

    /// Build a match from arbitrary player states, skipping setup.
    ///
    /// # Panics
    ///
    /// Panics if the players are not `[A, B]` on the configured board.
    #[must_use]
    pub fn from_parts(
        config: MatchConfig,
        dice: D,
        players: [PlayerState; 2],
        turn_holder: Side,
    ) -> Self {
        assert!(
            players[0].side() == Side::A && players[1].side() == Side::B,
            "players must be given as [A, B]"
        );
        Self {
            config,
            board: Board::new(config.field_size),
            players,
            turn_holder,
            turn: 0,
            dice,
            opening: Opening {
                rolls: Vec::new(),
                first: turn_holder,
            },
            stats: [SideStats::default(); 2],
        }
    }

    /// Match configuration.
    #[must_use]
    pub const fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Board geometry.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// State of one side.
    #[must_use]
    pub fn player(&self, side: Side) -> &PlayerState {
        &self.players[side.index()]
    }

    /// Both sides, indexed by [`Side::index`].
    #[must_use]
    pub const fn players(&self) -> &[PlayerState; 2] {
        &self.players
    }

    /// Side that plays the next turn.
    #[must_use]
    pub const fn turn_holder(&self) -> Side {
        self.turn_holder
    }

    /// Turns played so far.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// How the first turn was decided.
    #[must_use]
    pub const fn opening(&self) -> &Opening {
        &self.opening
    }

    /// Totals for one side.
    #[must_use]
    pub fn stats(&self, side: Side) -> &SideStats {
        &self.stats[side.index()]
    }

    /// Borrowed snapshot for presenters.
    #[must_use]
    pub fn view(&self) -> MatchView<'_> {
        MatchView {
            board: &self.board,
            players: &self.players,
            turn: self.turn,
        }
    }

    /// Whether either side has no pawns left to play.
    #[must_use]
    pub fn someone_won(&self) -> bool {
        self.winner().is_some()
    }

    /// The side that brought every pawn home.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|&side| !self.player(side).pawns_left())
    }

    /// Current outcome. A win takes precedence over the turn cap.
    #[must_use]
    pub fn outcome(&self) -> MatchOutcome {
        if let Some(side) = self.winner() {
            MatchOutcome::Won(side)
        } else if self.config.max_turns != 0 && self.turn >= self.config.max_turns {
            MatchOutcome::Draw
        } else {
            MatchOutcome::Ongoing
        }
    }

    /// Whether no more turns will be played.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome() != MatchOutcome::Ongoing
    }

    /// Report how the first turn was decided.
    pub fn announce_opening<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        for &(a, b) in &self.opening.rolls {
            self.emit(presenter, MatchEvent::OpeningRoll { a, b });
        }
        self.emit(
            presenter,
            MatchEvent::FirstMove {
                side: self.opening.first,
            },
        );
    }

    /// Play one turn for the turn holder, then pass the turn.
    ///
    /// Up to [`ROLLS_PER_TURN`] dice are rolled. A six enters a pawn from
    /// the reserve, or moves one if the reserve is empty, and the side rolls
    /// again. Any other roll moves a pawn and ends the turn.
    pub fn make_move<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        let side = self.turn_holder;
        self.turn += 1;
        debug!("turn {}: side {side}", self.turn);

        for _ in 0..ROLLS_PER_TURN {
            let roll = self.dice.roll();
            trace!("side {side} rolled {roll}");
            self.stats[side.index()].rolls += 1;
            self.emit(presenter, MatchEvent::Rolled { side, value: roll });

            if roll != MAX_ROLL {
                let steps = self.config.step_rule.steps(roll);
                if !self.move_pawn(steps, presenter) {
                    self.stats[side.index()].stalls += 1;
                    self.emit(presenter, MatchEvent::NoMoves { side });
                }
                break;
            }

            self.stats[side.index()].sixes += 1;
            self.six_move(presenter);
        }

        self.turn_holder = side.opposite();
    }

    /// Play one turn and return what happened.
    pub fn play_turn(&mut self) -> Vec<MatchEvent> {
        let mut events = Vec::new();
        self.make_move(&mut events);
        events
    }

    /// Play turns until somebody wins or the turn cap is reached.
    pub fn play_out<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> MatchOutcome {
        while !self.is_over() {
            self.make_move(presenter);
        }
        let outcome = self.outcome();
        debug!("match over after {} turns: {outcome:?}", self.turn);
        outcome
    }

    /// Send back the first opponent pawn standing on a cell held by the
    /// turn holder. Returns the cell, or `None` if nothing was captured.
    pub fn try_to_capture_pawn<P: Presenter + ?Sized>(
        &mut self,
        presenter: &mut P,
    ) -> Option<Coord> {
        let by = self.turn_holder;
        let (mover, opponent) = self.sides_mut();
        let index = opponent
            .pawns()
            .iter()
            .position(|&cell| mover.occupies(cell))?;
        let at = opponent.move_pawn_to_home(index);

        trace!("side {by} captured pawn {index} of {} at {at}", by.opposite());
        self.stats[by.index()].captures += 1;
        self.emit(
            presenter,
            MatchEvent::Captured {
                by,
                victim: by.opposite(),
                at,
            },
        );
        Some(at)
    }

    fn six_move<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        let side = self.turn_holder;
        let player = &mut self.players[side.index()];
        if player.reserve_count() > 0 {
            let at = player.add_pawn();
            self.stats[side.index()].entered += 1;
            self.emit(presenter, MatchEvent::Entered { side, at });
        } else {
            let steps = self.config.step_rule.steps(MAX_ROLL);
            self.move_pawn(steps, presenter);
        }
    }

    fn move_pawn<P: Presenter + ?Sized>(&mut self, steps: u8, presenter: &mut P) -> bool {
        let side = self.turn_holder;
        let (mover, opponent) = self.sides_mut();
        let Some(mv) = mover.move_pawn(steps, opponent.blocked_cells()) else {
            return false;
        };

        let stats = &mut self.stats[side.index()];
        stats.moves += 1;
        let event = if mv.finished {
            stats.finished += 1;
            MatchEvent::Finished {
                side,
                pawn: mv.pawn,
                from: mv.from,
            }
        } else {
            MatchEvent::Moved {
                side,
                pawn: mv.pawn,
                from: mv.from,
                to: mv.to,
            }
        };
        self.emit(presenter, event);
        self.try_to_capture_pawn(presenter);
        true
    }

    /// `(turn holder, opponent)`.
    fn sides_mut(&mut self) -> (&mut PlayerState, &mut PlayerState) {
        let [a, b] = &mut self.players;
        match self.turn_holder {
            Side::A => (a, b),
            Side::B => (b, a),
        }
    }

    fn emit<P: Presenter + ?Sized>(&self, presenter: &mut P, event: MatchEvent) {
        presenter.present(&self.view(), &event);
    }
}

fn roll_opening(dice: &mut impl Die) -> Opening {
    let mut rolls = Vec::new();
    loop {
        let a = dice.roll();
        let b = dice.roll();
        trace!("opening roll: A {a}, B {b}");
        rolls.push((a, b));
        if a != b {
            let first = if a > b { Side::A } else { Side::B };
            return Opening { rolls, first };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FieldSize, StepRule};
    use crate::game::ScriptedDice;

    fn config(size: u32, step_rule: StepRule) -> MatchConfig {
        MatchConfig {
            field_size: FieldSize::new(size).unwrap(),
            step_rule,
            max_turns: 100,
        }
    }

    fn c(row: u8, col: u8) -> Coord {
        Coord::new(row, col)
    }

    fn synthetic(
        step_rule: StepRule,
        rolls: impl IntoIterator<Item = u8>,
        a: (u8, Vec<Coord>),
        b: (u8, Vec<Coord>),
    ) -> Match<ScriptedDice> {
        let config = config(11, step_rule);
        let board = Board::new(config.field_size);
        let players = [
            PlayerState::from_parts(Side::A, board, a.0, a.1),
            PlayerState::from_parts(Side::B, board, b.0, b.1),
        ];
        Match::from_parts(config, ScriptedDice::new(rolls), players, Side::A)
    }

    #[test]
    fn test_setup_enters_one_pawn_each() {
        let game = Match::new(config(11, StepRule::Fixed), ScriptedDice::new([3, 5]));
        assert_eq!(game.player(Side::A).pawns(), &[c(0, 6)]);
        assert_eq!(game.player(Side::B).pawns(), &[c(10, 4)]);
        assert_eq!(game.player(Side::A).reserve_count(), 3);
        assert_eq!(game.player(Side::B).reserve_count(), 3);
        assert_eq!(game.turn(), 0);
        assert!(!game.someone_won());
        assert_eq!(game.outcome(), MatchOutcome::Ongoing);
    }

    #[test]
    fn test_opening_higher_roll_starts() {
        let game = Match::new(config(11, StepRule::Fixed), ScriptedDice::new([3, 5]));
        assert_eq!(game.turn_holder(), Side::B);
        assert_eq!(game.opening().rolls, vec![(3, 5)]);
    }

    #[test]
    fn test_opening_rerolls_ties() {
        let game = Match::new(
            config(11, StepRule::Fixed),
            ScriptedDice::new([4, 4, 6, 6, 5, 2]),
        );
        assert_eq!(game.turn_holder(), Side::A);
        assert_eq!(game.opening().rolls, vec![(4, 4), (6, 6), (5, 2)]);

        let mut events = Vec::new();
        game.announce_opening(&mut events);
        assert_eq!(events.len(), 4);
        assert_eq!(events[3], MatchEvent::FirstMove { side: Side::A });
    }

    #[test]
    fn test_non_six_moves_six_cells_and_passes_turn() {
        let mut game = Match::new(config(11, StepRule::Fixed), ScriptedDice::new([5, 2, 3]));
        let events = game.play_turn();
        assert_eq!(
            events,
            vec![
                MatchEvent::Rolled { side: Side::A, value: 3 },
                MatchEvent::Moved {
                    side: Side::A,
                    pawn: 0,
                    from: c(0, 6),
                    to: c(4, 8)
                },
            ]
        );
        assert_eq!(game.player(Side::A).pawns(), &[c(4, 8)]);
        assert_eq!(game.turn_holder(), Side::B);
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn test_rolled_rule_moves_by_roll() {
        let mut game = Match::new(config(11, StepRule::Rolled), ScriptedDice::new([5, 2, 3]));
        game.play_turn();
        assert_eq!(game.player(Side::A).pawns(), &[c(3, 6)]);
    }

    #[test]
    fn test_six_enters_pawn_then_rolls_again() {
        let mut game = Match::new(
            config(11, StepRule::Fixed),
            ScriptedDice::new([5, 2, 6, 2]),
        );
        let events = game.play_turn();
        assert_eq!(events.len(), 4);
        assert_eq!(events[1], MatchEvent::Entered { side: Side::A, at: c(0, 6) });
        // The earliest pawn moves, not the one just entered.
        assert_eq!(game.player(Side::A).pawns(), &[c(4, 8), c(0, 6)]);
        assert_eq!(game.player(Side::A).reserve_count(), 2);
        assert_eq!(game.stats(Side::A).sixes, 1);
        assert_eq!(game.stats(Side::A).entered, 1);
    }

    #[test]
    fn test_three_sixes_end_the_turn() {
        let mut dice_rolls = vec![5, 2];
        dice_rolls.extend([6, 6, 6, 4]);
        let mut game = Match::new(config(11, StepRule::Fixed), ScriptedDice::new(dice_rolls));
        let events = game.play_turn();
        assert_eq!(events.len(), 6);
        assert_eq!(game.player(Side::A).reserve_count(), 0);
        assert_eq!(game.player(Side::A).pawns().len(), 4);
        assert_eq!(game.turn_holder(), Side::B);
        assert_eq!(game.stats(Side::A).rolls, 3);
    }

    #[test]
    fn test_blocked_move_reports_no_moves() {
        let mut game = synthetic(StepRule::Fixed, [2], (0, vec![c(3, 5)]), (3, vec![]));
        let events = game.play_turn();
        assert_eq!(
            events,
            vec![
                MatchEvent::Rolled { side: Side::A, value: 2 },
                MatchEvent::NoMoves { side: Side::A },
            ]
        );
        assert_eq!(game.player(Side::A).pawns(), &[c(3, 5)]);
        assert_eq!(game.stats(Side::A).stalls, 1);
    }

    #[test]
    fn test_blocked_six_is_silent() {
        let mut game = synthetic(StepRule::Fixed, [6, 2], (0, vec![c(3, 5)]), (3, vec![]));
        let events = game.play_turn();
        assert_eq!(
            events,
            vec![
                MatchEvent::Rolled { side: Side::A, value: 6 },
                MatchEvent::Rolled { side: Side::A, value: 2 },
                MatchEvent::NoMoves { side: Side::A },
            ]
        );
    }

    #[test]
    fn test_landing_captures_opponent() {
        let mut game = synthetic(StepRule::Fixed, [3], (3, vec![c(0, 6)]), (2, vec![c(4, 8)]));
        let events = game.play_turn();
        assert_eq!(
            events.last(),
            Some(&MatchEvent::Captured {
                by: Side::A,
                victim: Side::B,
                at: c(4, 8)
            })
        );
        let b = game.player(Side::B);
        assert!(b.pawns().is_empty());
        assert_eq!(b.reserve_count(), 3);
        assert_eq!(game.player(Side::A).pawns(), &[c(4, 8)]);
        assert_eq!(game.stats(Side::A).captures, 1);
    }

    #[test]
    fn test_capture_takes_first_opponent_pawn() {
        // A already shares (3,6) with B's first pawn and lands on B's second.
        let mut game = synthetic(
            StepRule::Fixed,
            [3],
            (2, vec![c(0, 6), c(3, 6)]),
            (2, vec![c(3, 6), c(4, 8)]),
        );
        let events = game.play_turn();
        assert_eq!(
            events,
            vec![
                MatchEvent::Rolled { side: Side::A, value: 3 },
                MatchEvent::Moved {
                    side: Side::A,
                    pawn: 0,
                    from: c(0, 6),
                    to: c(4, 8)
                },
                MatchEvent::Captured {
                    by: Side::A,
                    victim: Side::B,
                    at: c(3, 6)
                },
            ]
        );
        assert_eq!(game.player(Side::B).pawns(), &[c(4, 8)]);
        assert_eq!(game.player(Side::B).reserve_count(), 3);
        assert_eq!(game.stats(Side::A).captures, 1);
    }

    #[test]
    fn test_six_with_empty_reserve_moves_a_pawn() {
        let mut game = synthetic(StepRule::Rolled, [6, 1], (0, vec![c(0, 6)]), (3, vec![]));
        let events = game.play_turn();
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[1],
            MatchEvent::Moved {
                side: Side::A,
                pawn: 0,
                from: c(0, 6),
                to: c(4, 8)
            }
        );
        assert_eq!(events[2], MatchEvent::Rolled { side: Side::A, value: 1 });
        let after = game.board().next_position(c(4, 8), Side::A);
        assert_eq!(game.player(Side::A).pawns(), &[after]);
        assert_eq!(game.stats(Side::A).sixes, 1);
        assert_eq!(game.stats(Side::A).moves, 2);
        assert_eq!(game.stats(Side::A).entered, 0);
    }

    #[test]
    #[should_panic(expected = "dice script exhausted")]
    fn test_opening_with_short_script_fails_loudly() {
        let _ = Match::new(config(11, StepRule::Fixed), ScriptedDice::new([4, 4]));
    }

    #[test]
    fn test_entering_does_not_capture() {
        let mut game = synthetic(StepRule::Fixed, [6, 1], (1, vec![]), (3, vec![c(0, 6)]));
        let events = game.play_turn();
        assert!(!events.iter().any(|e| matches!(e, MatchEvent::Captured { .. })));
        assert_eq!(game.player(Side::B).pawns(), &[c(0, 6)]);
        assert_eq!(game.player(Side::A).pawns(), &[c(4, 8)]);
    }

    #[test]
    fn test_finishing_last_pawn_wins() {
        let mut game = synthetic(StepRule::Rolled, [2], (0, vec![c(3, 5)]), (3, vec![]));
        assert!(!game.someone_won());
        let outcome = game.play_out(&mut ());
        assert_eq!(outcome, MatchOutcome::Won(Side::A));
        assert_eq!(game.winner(), Some(Side::A));
        assert_eq!(game.turn(), 1);
        assert_eq!(game.player(Side::A).finished_count(), 4);
        assert_eq!(game.stats(Side::A).finished, 1);
    }

    #[test]
    fn test_someone_won_on_synthetic_state() {
        let game = synthetic(StepRule::Fixed, [], (2, vec![]), (0, vec![]));
        assert!(game.someone_won());
        assert_eq!(game.outcome(), MatchOutcome::Won(Side::B));
        assert!(game.is_over());
    }

    #[test]
    fn test_turn_cap_is_a_draw() {
        let mut config = config(11, StepRule::Fixed);
        config.max_turns = 10;
        let mut game = Match::seeded(42, config);
        let outcome = game.play_out(&mut ());
        assert_eq!(outcome, MatchOutcome::Draw);
        assert_eq!(game.turn(), 10);
    }

    #[test]
    fn test_seeded_matches_repeat() {
        let config = config(9, StepRule::Rolled);
        let mut first = Vec::new();
        let mut second = Vec::new();
        Match::seeded(7, config).play_out(&mut first);
        Match::seeded(7, config).play_out(&mut second);
        assert_eq!(first, second);
    }
}
