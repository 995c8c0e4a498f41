//! Strictly Rewind - tic-tac-toe with time travel
//!
//! Every move is kept as an immutable snapshot, and the game can jump back
//! to any of them. Making a move from an earlier snapshot forks the history
//! at that point.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw evaluation over a 3x3 board
//! - **Game**: one immutable value holding the snapshot history and cursor
//! - **Session**: owns the game for one player and swaps in each transition
//! - **TUI**: ratatui front end that renders the session and feeds it keys
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{GameSession, GameStatus, Position, TicTacToePlayer as Player};
//!
//! let mut session = GameSession::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
//!     session.apply_move(pos);
//! }
//! session.jump_to(1).unwrap();
//! assert_eq!(session.status(), GameStatus::InProgress { to_move: Player::O });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod logging;
mod replay;
mod session;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, TuiConfig, DEFAULT_CONFIG_PATH};

// Crate-level exports - Logging setup
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Replay
pub use replay::{render_text, replay, ReplayError, ReplayReport};

// Crate-level exports - Session management
pub use session::GameSession;

// Crate-level exports - Terminal UI
pub use tui::run_tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    invariants::{
        AlternatingTurnInvariant, CursorInBoundsInvariant, InitialEmptyInvariant, Invariant,
        InvariantSet, InvariantViolation, SingleCellDeltaInvariant, TimelineInvariants,
    },
    rules::{check_winner, is_draw, is_full, outcome, winning_line},
    Action, ActionError, Board, Game, GameStatus, JumpError, Mark, MoveEntry, MoveError, Outcome,
    Position, Snapshot, Square, Player as TicTacToePlayer,
};
