//! Tic-tac-toe with a navigable move history.

pub mod action;
pub mod invariants;
pub mod phases;
pub mod position;
pub mod rules;
pub mod timeline;
pub mod types;

pub use action::{Action, ActionError, JumpError, MoveError};
pub use phases::{GameStatus, Outcome};
pub use position::Position;
pub use timeline::{Game, MoveEntry, Snapshot};
pub use types::{Board, Player, Square};

/// Alias matching the glossary: the symbol a player puts down.
pub type Mark = Player;
