//! Read-only snapshot of a match handed to presenters.

use crate::game::{Board, MatchEvent, PlayerState, Side};

/// Borrowed view of the board and both sides at the moment an event happens.
#[derive(Debug, Clone, Copy)]
pub struct MatchView<'a> {
    /// Board geometry.
    pub board: &'a Board,
    /// Both sides, indexed by [`Side::index`].
    pub players: &'a [PlayerState; 2],
    /// Number of the turn in progress (0 before the first turn).
    pub turn: u32,
}

impl MatchView<'_> {
    /// State of one side.
    #[must_use]
    pub fn player(&self, side: Side) -> &PlayerState {
        &self.players[side.index()]
    }
}

/// Receives every event of a match together with the state right after it.
///
/// This is the whole contract between the engine and whatever draws it:
/// a frame can be built from the view, and the event's `Display` is the
/// status line.
pub trait Presenter {
    /// Called once per event, in order.
    fn present(&mut self, view: &MatchView<'_>, event: &MatchEvent);
}

/// Discards everything.
impl Presenter for () {
    fn present(&mut self, _view: &MatchView<'_>, _event: &MatchEvent) {}
}

/// Collects the events, dropping the views.
impl Presenter for Vec<MatchEvent> {
    fn present(&mut self, _view: &MatchView<'_>, event: &MatchEvent) {
        self.push(*event);
    }
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn present(&mut self, view: &MatchView<'_>, event: &MatchEvent) {
        (**self).present(view, event);
    }
}
