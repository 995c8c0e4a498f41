//! Full-board and draw checks.

use super::super::{Board, Position};
use super::win::check_winner;
use tracing::instrument;

/// No empty square is left.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.occupied_count() == Position::ALL.len()
}

/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Game, Position::*};

    fn played(moves: &[Position]) -> Board {
        Game::replay(moves.iter().copied()).unwrap().current().board().clone()
    }

    #[test]
    fn test_fresh_game_is_open() {
        let board = played(&[]);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_eight_moves_leave_one_square() {
        let board = played(&[
            Center, TopLeft, TopRight, BottomLeft, MiddleLeft, MiddleRight, TopCenter,
            BottomCenter,
        ]);
        assert_eq!(board.occupied_count(), 8);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_ninth_move_without_line_is_draw() {
        let board = played(&[
            Center, TopLeft, TopRight, BottomLeft, MiddleLeft, MiddleRight, TopCenter,
            BottomCenter, BottomRight,
        ]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_ninth_move_completing_line_is_not_draw() {
        // X fills the board and the left column together.
        let board = played(&[
            TopLeft, TopCenter, MiddleLeft, Center, TopRight, MiddleRight, BottomCenter,
            BottomRight, BottomLeft,
        ]);
        assert!(is_full(&board));
        assert!(check_winner(&board).is_some());
        assert!(!is_draw(&board));
    }
}
