//! Alternating turn invariant: marks go down X, O, X, O, ...

use super::super::{Game, Player, Square};
use super::Invariant;

/// Invariant: the mark placed to reach step `i` belongs to the player
/// whose turn it was at step `i - 1`.
///
/// Together with deriving the turn from the cursor, this keeps
/// "X to move" equivalent to "cursor is even".
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| match snapshot.last_move() {
                Some(pos) => {
                    snapshot.board().get(pos) == Square::Occupied(Player::for_step(step - 1))
                }
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}
