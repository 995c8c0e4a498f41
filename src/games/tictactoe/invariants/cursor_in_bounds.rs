//! Cursor invariant: the step always indexes an existing snapshot.

use super::super::Game;
use super::Invariant;

/// Invariant: `step < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<Game> for CursorInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.step < game.history.len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing snapshot"
    }
}
