//! Time-travel state machine for tic-tac-toe.
//!
//! A [`Game`] is one immutable value holding every snapshot reached so far
//! and a cursor into them. Transitions never mutate a game in place; they
//! return the next game, so the history, the cursor and the derived turn
//! always change together.

use super::action::{Action, ActionError, JumpError, MoveError};
use super::invariants::assert_invariants;
use super::phases::GameStatus;
use super::{rules, Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A board together with the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    pub(super) board: Board,
    pub(super) last_move: Option<Position>,
}

impl Snapshot {
    /// The empty starting snapshot.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move that produced this snapshot (`None` for the start).
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}

/// One line of the move list, keyed by its history step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Move that produced the step (`None` for the start).
    pub position: Option<Position>,
    /// Whether the cursor sits on this step.
    pub is_current: bool,
}

impl MoveEntry {
    /// Human-readable label for the history button.
    pub fn label(&self) -> String {
        match self.position {
            None => "Back to start".to_string(),
            Some(pos) => format!(
                "Back to move into position: {}-{}",
                pos.row(),
                pos.column()
            ),
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Tic-tac-toe game with a navigable history.
///
/// Invariants:
/// - `history[0]` is the empty board with no last move
/// - each later snapshot adds exactly one mark to a previously empty square
/// - `step < history.len()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub(super) history: Vec<Snapshot>,
    pub(super) step: usize,
}

impl Game {
    /// Creates a new game with only the empty snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            step: 0,
        }
    }

    /// Replays placements from a fresh game.
    ///
    /// Stops at the first rejected placement.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> Result<Self, MoveError> {
        positions
            .into_iter()
            .try_fold(Self::new(), |game, pos| game.place(pos))
    }

    /// Returns the snapshot under the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.step]
    }

    /// Returns the cursor position.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of snapshots in the history (never zero).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Returns all snapshots, including those after the cursor.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Whether the cursor is on the newest snapshot.
    pub fn is_latest(&self) -> bool {
        self.step + 1 == self.history.len()
    }

    /// Player whose mark goes down next.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Status of the board under the cursor.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn status(&self) -> GameStatus {
        match rules::outcome(self.current().board()) {
            Some(outcome) => outcome.into(),
            None => GameStatus::InProgress {
                to_move: self.to_move(),
            },
        }
    }

    /// Places the current player's mark, forking history at the cursor.
    ///
    /// Snapshots after the cursor are discarded before the new one is
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` if the current board is decided, or
    /// `MoveError::SquareOccupied` if the square is taken.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn place(&self, position: Position) -> Result<Self, MoveError> {
        let board = self.current().board();
        if let Some(outcome) = rules::outcome(board) {
            return Err(MoveError::GameOver(outcome));
        }
        if !board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let mut next_board = board.clone();
        next_board.set(position, Square::Occupied(self.to_move()));

        let mut history = self.history[..=self.step].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(Snapshot {
            board: next_board,
            last_move: Some(position),
        });

        let next = Self {
            history,
            step: self.step + 1,
        };
        debug!(discarded, len = next.len(), "Placed mark");

        assert_invariants(&next);
        Ok(next)
    }

    /// Moves the cursor to `step`. The history is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `JumpError::OutOfRange` if `step` is not a valid index.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<Self, JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }

        let next = Self {
            history: self.history.clone(),
            step,
        };
        assert_invariants(&next);
        Ok(next)
    }

    /// Steps the cursor back one snapshot, if possible.
    pub fn undo(&self) -> Option<Self> {
        self.step
            .checked_sub(1)
            .and_then(|step| self.jump_to(step).ok())
    }

    /// Steps the cursor forward one snapshot, if possible.
    pub fn redo(&self) -> Option<Self> {
        self.jump_to(self.step + 1).ok()
    }

    /// Applies an action, returning the next game.
    pub fn apply(&self, action: Action) -> Result<Self, ActionError> {
        match action {
            Action::Place(position) => Ok(self.place(position)?),
            Action::JumpTo(step) => Ok(self.jump_to(step)?),
        }
    }

    /// Lazily lists every history step, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = MoveEntry> + '_ {
        self.history
            .iter()
            .enumerate()
            .map(move |(step, snapshot)| MoveEntry {
                step,
                position: snapshot.last_move,
                is_current: step == self.step,
            })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
