//! First-class action types for tic-tac-toe.
//!
//! Actions are the two events the presentation layer can emit: placing a
//! mark on a cell, or moving the history cursor. They are values, so they
//! can be validated, logged and replayed independently of execution.

use super::{Outcome, Position};
use serde::{Deserialize, Serialize};

/// An event fed into the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the current player's mark at a position.
    Place(Position),
    /// Move the history cursor to a step.
    JumpTo(usize),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place(position) => write!(f, "place {}", position.label()),
            Action::JumpTo(step) => write!(f, "jump to step {}", step),
        }
    }
}

/// Error that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The board under the cursor is already decided.
    #[display("Game is already over: {}", _0)]
    GameOver(#[error(not(source))] Outcome),
}

/// Error that can occur when moving the history cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// The requested step is past the end of the history.
    #[display("Invalid step {step}: history has {len} entries")]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

/// Either kind of rejected action.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ActionError {
    /// A placement was rejected.
    #[display("{}", _0)]
    Move(#[error(source)] MoveError),
    /// A jump was rejected.
    #[display("{}", _0)]
    Jump(#[error(source)] JumpError),
}
