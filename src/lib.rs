// Library interface for the word-guessing game
// This allows integration tests to access internal modules

pub mod cli;
pub mod controller;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod game_loop;
pub mod game_state;
pub mod interface;
pub mod logging;
pub mod notice;
pub mod tui;
pub mod word;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use controller::{InputError, Session, Step};
pub use engine::{Verdict, score};
pub use error::AppError;
pub use game_loop::{LoopConfig, game_loop};
pub use game_state::{Board, GameState, MAX_GUESSES, Tile};
pub use interface::{GameInterface, KeyInput, Outcome, Severity};
pub use word::{WORD_LENGTH, Word};
pub use wordbank::{SecretSource, load_wordbank_from_file, load_wordbank_from_str};
