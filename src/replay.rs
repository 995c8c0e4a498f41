//! Non-interactive replay of a move script.

use crate::games::tictactoe::{Game, JumpError, Position};
use crate::session::GameSession;
use serde::Serialize;
use tracing::{instrument, warn};

/// Error raised while replaying a move script.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ReplayError {
    /// A move could not be parsed as a 1-9 key or a unique label.
    #[display("Unknown position: {:?}", _0)]
    #[from(ignore)]
    UnknownPosition(#[error(not(source))] String),
    /// The final jump was out of range.
    #[display("{}", _0)]
    Jump(#[error(source)] JumpError),
}

/// Plays `moves` on a fresh session, then optionally jumps to `jump`.
///
/// Moves use session semantics: a move on an occupied square or a
/// finished board is skipped with a warning.
///
/// # Errors
///
/// Fails on an unparseable move or an out-of-range jump.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay<S: AsRef<str>>(moves: &[S], jump: Option<usize>) -> Result<GameSession, ReplayError> {
    let positions = moves
        .iter()
        .map(|m| {
            Position::from_key_or_label(m.as_ref())
                .ok_or_else(|| ReplayError::UnknownPosition(m.as_ref().to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut session = GameSession::new();
    for position in positions {
        if !session.apply_move(position) {
            warn!(position = %position, "Skipped rejected move");
        }
    }
    if let Some(step) = jump {
        session.jump_to(step)?;
    }
    Ok(session)
}

/// Machine-readable view of a replayed game.
#[derive(Debug, Serialize)]
pub struct ReplayReport<'a> {
    /// Status line of the shown board.
    pub status: String,
    /// The whole game, history and cursor.
    pub game: &'a Game,
}

impl<'a> ReplayReport<'a> {
    /// Builds a report for the session's game.
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            status: session.status().to_string(),
            game: session.game(),
        }
    }
}

/// Renders the board, status and move list as plain text.
pub fn render_text(session: &GameSession) -> String {
    let mut out = String::new();
    out.push_str(&session.current_snapshot().board().display());
    out.push_str("\n\n");
    out.push_str(&session.status().to_string());
    out.push('\n');
    for entry in session.move_list() {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, entry.step, entry.label()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, Player};

    #[test]
    fn test_replay_skips_rejected_moves() {
        let session = replay(&["5", "5", "1"], None).unwrap();
        assert_eq!(session.game().len(), 3);
        assert_eq!(session.status(), GameStatus::InProgress { to_move: Player::X });
    }

    #[test]
    fn test_replay_accepts_labels() {
        let session = replay(&["center", "top-left"], None).unwrap();
        assert_eq!(
            session.current_snapshot().last_move(),
            Some(Position::TopLeft)
        );
    }

    #[test]
    fn test_replay_rejects_unknown_move() {
        assert_eq!(
            replay(&["5", "nowhere"], None).unwrap_err(),
            ReplayError::UnknownPosition("nowhere".to_string())
        );
    }

    #[test]
    fn test_replay_rejects_ambiguous_label() {
        assert_eq!(
            replay(&["left"], None).unwrap_err(),
            ReplayError::UnknownPosition("left".to_string())
        );
    }

    #[test]
    fn test_replay_jump_out_of_range() {
        let err = replay(&["5"], Some(4)).unwrap_err();
        assert_eq!(err, ReplayError::Jump(JumpError::OutOfRange { step: 4, len: 2 }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_render_text_marks_current_step() {
        let session = replay(&["1", "5"], Some(1)).unwrap();
        let text = render_text(&session);
        assert!(text.starts_with("X|2|3\n-+-+-\n4|5|6"));
        assert!(text.contains("Next player: O"));
        assert!(text.contains("> 1. Back to move into position: 0-0"));
        assert!(text.contains("  2. Back to move into position: 1-1"));
    }

    #[test]
    fn test_report_serializes_history() {
        let session = replay(&["1"], None).unwrap();
        let json = serde_json::to_value(ReplayReport::new(&session)).unwrap();
        assert_eq!(json["status"], "Next player: O");
        assert_eq!(json["game"]["step"], 1);
        assert_eq!(json["game"]["history"][1]["last_move"], "TopLeft");
    }
}
