//! Application state and logic.

use crate::config::TuiConfig;
use crate::games::tictactoe::Position;
use crate::session::GameSession;
use crossterm::event::KeyCode;
use tracing::{debug, instrument};

use super::input::{command_for, move_cursor, move_selection, Command, Focus};

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected: usize,
    highlight_last_move: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            session: GameSession::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            highlight_last_move: *config.highlight_last_move(),
            should_quit: false,
        }
    }

    /// Gets the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the highlighted history step.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether to highlight the last move's square.
    pub fn highlight_last_move(&self) -> bool {
        self.highlight_last_move
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(command) = command_for(key) else {
            return;
        };
        debug!(?command, "Handling command");

        match command {
            Command::Quit => self.should_quit = true,
            Command::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.selected = self.session.game().step();
            }
            Command::Navigate(key) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::History => {
                    self.selected = move_selection(self.selected, self.session.game().len(), key);
                }
            },
            Command::Select => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::History => self.jump_to(self.selected),
            },
            Command::PlaceAt(position) => {
                self.cursor = position;
                self.place(position);
            }
            Command::Undo => {
                self.session.undo();
                self.sync_selection();
            }
            Command::Redo => {
                self.session.redo();
                self.sync_selection();
            }
            Command::Restart => {
                self.session.restart();
                self.sync_selection();
            }
        }
    }

    fn place(&mut self, position: Position) {
        if self.session.apply_move(position) {
            self.sync_selection();
        }
    }

    fn jump_to(&mut self, step: usize) {
        // The selection is clamped to the history, so this only fails if
        // the two drifted apart.
        if let Err(e) = self.session.jump_to(step) {
            tracing::warn!(error = %e, "History selection out of range");
        }
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        self.selected = self.session.game().step();
    }
}
