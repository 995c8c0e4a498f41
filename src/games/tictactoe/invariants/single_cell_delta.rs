//! Single cell delta invariant: each snapshot adds exactly one mark.

use super::super::{Game, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// That square was empty before, is occupied after, and is the
/// snapshot's recorded last move.
pub struct SingleCellDeltaInvariant;

impl Invariant<Game> for SingleCellDeltaInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(pos) = after.last_move() else {
                return false;
            };

            let changed = before
                .board()
                .squares()
                .iter()
                .zip(after.board().squares())
                .filter(|(a, b)| a != b)
                .count();

            changed == 1
                && before.board().is_empty(pos)
                && after.board().get(pos) != Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty square at its last move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_replayed_game_holds() {
        let game = Game::replay([Position::TopLeft, Position::Center, Position::BottomRight])
            .unwrap();
        assert!(SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut game = Game::replay([Position::Center]).unwrap();
        game.history[1]
            .board
            .set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn test_mismatched_last_move_violates() {
        let mut game = Game::replay([Position::Center]).unwrap();
        game.history[1].last_move = Some(Position::TopLeft);
        assert!(!SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn test_missing_last_move_violates() {
        let mut game = Game::replay([Position::Center]).unwrap();
        game.history[1].last_move = None;
        assert!(!SingleCellDeltaInvariant::holds(&game));
    }
}
