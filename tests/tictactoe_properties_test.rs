//! Property-based tests for the time-travel game.
//!
//! Random sequences of placements and jumps are driven through a session
//! and the structural guarantees are checked after every event.

use proptest::prelude::*;
use strictly_rewind::{
    Action, GameSession, InvariantSet, Position, TicTacToePlayer as Player, TimelineInvariants,
};

/// Generate a random cell.
fn arb_position() -> impl Strategy<Value = Position> {
    (0usize..9).prop_map(|i| Position::from_index(i).expect("index in range"))
}

/// Generate a random event; jump targets may be out of range.
fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => arb_position().prop_map(Action::Place),
        1 => (0usize..12).prop_map(Action::JumpTo),
    ]
}

proptest! {
    #[test]
    fn invariants_hold_after_any_events(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mut session = GameSession::new();
        for action in actions {
            let _ = session.apply(action);
            let game = session.game();
            prop_assert!(TimelineInvariants::check_all(game).is_ok());
            prop_assert!(game.step() < game.len());
            prop_assert_eq!(game.to_move() == Player::X, game.step() % 2 == 0);
        }
    }

    #[test]
    fn occupied_moves_are_no_ops(actions in prop::collection::vec(arb_action(), 0..30)) {
        let mut session = GameSession::new();
        for action in actions {
            let _ = session.apply(action);
        }
        let before = session.game().clone();
        for pos in Position::ALL {
            if !session.current_snapshot().board().is_empty(pos) {
                prop_assert!(!session.apply_move(pos));
                prop_assert_eq!(session.game(), &before);
            }
        }
    }

    #[test]
    fn valid_moves_grow_history_by_one(moves in prop::collection::vec(arb_position(), 0..20)) {
        let mut session = GameSession::new();
        let mut applied = 0usize;
        for pos in moves {
            if session.apply_move(pos) {
                applied += 1;
            }
            prop_assert_eq!(session.game().len(), applied + 1);
            prop_assert_eq!(session.game().step(), applied);
        }
    }
}
