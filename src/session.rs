//! Game session management for one interactive player.

use crate::games::tictactoe::{Action, Game, GameStatus, JumpError, MoveEntry, Position, Snapshot};
use tracing::{debug, info, instrument};

/// A single interactive session.
///
/// Owns the one [`Game`] value the presentation layer reads from. Every
/// event swaps in the next game as a whole, so readers never observe a
/// half-applied transition.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    game: Game,
}

impl GameSession {
    /// Creates a session holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self { game: Game::new() }
    }

    /// Returns the game value.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the snapshot under the cursor.
    pub fn current_snapshot(&self) -> &Snapshot {
        self.game.current()
    }

    /// Returns the status of the board under the cursor.
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// Returns the history as a list of jump targets.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        self.game.moves().collect()
    }

    /// Places the current player's mark.
    ///
    /// Occupied squares and moves on a finished board are ignored.
    /// Returns whether the move was applied.
    #[instrument(skip(self), fields(step = self.game.step()))]
    pub fn apply_move(&mut self, position: Position) -> bool {
        match self.game.place(position) {
            Ok(next) => {
                info!(player = %self.game.to_move(), position = %position, "Move applied");
                self.game = next;
                true
            }
            Err(e) => {
                debug!(error = %e, "Ignoring move");
                false
            }
        }
    }

    /// Moves the history cursor.
    ///
    /// # Errors
    ///
    /// Returns `JumpError::OutOfRange` and leaves the session unchanged
    /// when `step` is past the end of the history.
    #[instrument(skip(self), fields(len = self.game.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        self.game = self.game.jump_to(step)?;
        info!(step, "Jumped to step");
        Ok(())
    }

    /// Applies an action from the presentation layer.
    ///
    /// Returns whether the session changed.
    ///
    /// # Errors
    ///
    /// Only out-of-range jumps are reported; rejected moves are ignored.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> Result<bool, JumpError> {
        match action {
            Action::Place(position) => Ok(self.apply_move(position)),
            Action::JumpTo(step) => self.jump_to(step).map(|()| true),
        }
    }

    /// Steps back one move. Returns false at the start.
    #[instrument(skip(self), fields(step = self.game.step()))]
    pub fn undo(&mut self) -> bool {
        self.replace_with(Game::undo)
    }

    /// Steps forward one move. Returns false at the newest snapshot.
    #[instrument(skip(self), fields(step = self.game.step()))]
    pub fn redo(&mut self) -> bool {
        self.replace_with(Game::redo)
    }

    /// Returns to the empty board without discarding the history.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.replace_with(|game| game.jump_to(0).ok());
    }

    fn replace_with(&mut self, f: impl FnOnce(&Game) -> Option<Game>) -> bool {
        match f(&self.game) {
            Some(next) => {
                debug!(from = self.game.step(), to = next.step(), "Cursor moved");
                self.game = next;
                true
            }
            None => false,
        }
    }
}
