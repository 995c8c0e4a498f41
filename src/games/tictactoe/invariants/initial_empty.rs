//! Starting snapshot invariant: history begins with an empty board.

use super::super::{Game, Square};
use super::Invariant;

/// Invariant: the first snapshot is the empty board with no last move.
pub struct InitialEmptyInvariant;

impl Invariant<Game> for InitialEmptyInvariant {
    fn holds(game: &Game) -> bool {
        match game.history().first() {
            Some(first) => {
                first.last_move().is_none()
                    && first.board().squares().iter().all(|s| *s == Square::Empty)
            }
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts with an empty board and no last move"
    }
}
