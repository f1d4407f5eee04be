//! Boundary between the game core and whatever presents it.
//!
//! The core never touches the terminal directly. It renders tiles, reports
//! validation problems, announces the outcome and traces what it is doing
//! through [`GameInterface`], and receives already classified key presses
//! from it.

use crate::engine::Verdict;
use crate::word::Word;
use std::fmt;
use std::io;
use std::time::Duration;

/// A key press after classification by the input source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    /// Uppercase A-Z.
    Letter(char),
    Delete,
    Submit,
    /// Abandon the current game and start another with a fresh secret.
    NewGame,
    Quit,
}

impl KeyInput {
    /// Classify a typed character. Letters are case-insensitive; anything
    /// that is not an ASCII letter is ignored.
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::Letter(c.to_ascii_uppercase()))
    }
}

/// How a finished game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    /// All rows were used; carries the secret word.
    Lost(Word),
}

impl Outcome {
    /// Text shown to the player.
    pub fn announcement(&self) -> String {
        match self {
            Self::Won => "Congrats! YOU WON".to_string(),
            Self::Lost(secret) => format!("GAME OVER: the word was {secret}"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "won"),
            Self::Lost(secret) => write!(f, "lost ({secret})"),
        }
    }
}

/// Severity tag of a diagnostics message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn log_level(self) -> log::Level {
        match self {
            Self::Info | Self::Success => log::Level::Info,
            Self::Error => log::Level::Warn,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Rendering, notification, diagnostics and input for one player.
pub trait GameInterface {
    /// Show `letter` in the tile at `(row, column)`.
    fn render_letter(&mut self, row: usize, column: usize, letter: char);

    /// Tag the tile at `(row, column)` with its verdict. The tag persists.
    fn render_verdict(&mut self, row: usize, column: usize, verdict: Verdict);

    /// Remove both letter and verdict from a tile.
    fn clear_tile(&mut self, row: usize, column: usize);

    /// Wipe the board for a new game.
    fn reset(&mut self);

    /// User-visible validation message, e.g. an incomplete row.
    fn show_message(&mut self, message: &str);

    /// Announce the end of the game. Called at most once per game.
    fn notify(&mut self, outcome: &Outcome);

    /// Observational trace message. Never read back by the game.
    fn diagnostic(&mut self, severity: Severity, message: &str);

    /// Next classified key press.
    ///
    /// With `Some(timeout)` the call must return within roughly that time,
    /// yielding `Ok(None)` if nothing arrived. With `None` the interface may
    /// wait as long as it likes. Returning `Ok(Some(KeyInput::Quit))` ends
    /// the session.
    fn read_key(&mut self, timeout: Option<Duration>) -> io::Result<Option<KeyInput>>;
}
