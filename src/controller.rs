//! Row and tile state machine for one game.
//!
//! A [`Session`] owns the [`GameState`] and the [`Board`], turns add, delete
//! and submit intents into state changes, scores complete rows and decides
//! when the game is won or lost. Every change is mirrored to the
//! [`GameInterface`] passed to each call.

use crate::engine::{self, Verdict};
use crate::game_state::{Board, ColumnMove, GameState, MAX_GUESSES};
use crate::interface::{GameInterface, KeyInput, Outcome, Severity};
use crate::word::{WORD_LENGTH, Word};
use crate::{debug_log, info_log};
use thiserror::Error;

/// Rejected intents. Each one is reported where it happens and leaves the
/// session untouched.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Row is full, cannot add letter")]
    RowFull,
    #[error("No letters to delete")]
    RowEmpty,
    #[error("Please enter 5 letters!")]
    IncompleteRow,
}

/// What an accepted intent did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Letter written or removed.
    Edited,
    /// Game already over; nothing changed.
    Ignored,
    /// A full row was scored.
    Scored {
        row: usize,
        verdicts: [Verdict; WORD_LENGTH],
        outcome: Option<Outcome>,
    },
}

#[derive(Debug)]
pub struct Session {
    state: GameState,
    board: Board,
}

impl Session {
    pub fn new(secret: Word) -> Self {
        Self {
            state: GameState::new(secret),
            board: Board::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Letters typed so far in the active row.
    pub fn current_word(&self) -> String {
        if self.state.row() >= MAX_GUESSES {
            return String::new();
        }
        self.board.word_in_row(self.state.row())
    }

    /// Dispatch a classified key. Keys that are not game intents are ignored.
    pub fn handle_key<I: GameInterface + ?Sized>(
        &mut self,
        key: KeyInput,
        ui: &mut I,
    ) -> Result<Step, InputError> {
        match key {
            KeyInput::Letter(c) => self.add_letter(c, ui),
            KeyInput::Delete => self.delete_letter(ui),
            KeyInput::Submit => self.submit_row(ui),
            KeyInput::NewGame | KeyInput::Quit => Ok(Step::Ignored),
        }
    }

    /// Write `letter` into the next free tile of the active row. Anything
    /// other than an ASCII letter is ignored.
    pub fn add_letter<I: GameInterface + ?Sized>(
        &mut self,
        letter: char,
        ui: &mut I,
    ) -> Result<Step, InputError> {
        if self.state.is_finished() {
            return Ok(Step::Ignored);
        }
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            debug_log!("add_letter() - ignoring non-letter {:?}", letter);
            return Ok(Step::Ignored);
        }

        let (row, column) = (self.state.row(), self.state.column());
        if column >= WORD_LENGTH {
            return Err(self.reject(InputError::RowFull, ui));
        }

        self.board.tile_mut(row, column).letter = Some(letter);
        self.state.advance_column(ColumnMove::Forward);
        ui.render_letter(row, column, letter);
        debug_log!(
            "add_letter() - '{}' at row {}, tile {}, current word: '{}'",
            letter,
            row,
            column,
            self.current_word()
        );
        Ok(Step::Edited)
    }

    /// Remove the most recently typed letter of the active row.
    pub fn delete_letter<I: GameInterface + ?Sized>(
        &mut self,
        ui: &mut I,
    ) -> Result<Step, InputError> {
        if self.state.is_finished() {
            return Ok(Step::Ignored);
        }
        if self.state.column() == 0 {
            return Err(self.reject(InputError::RowEmpty, ui));
        }

        self.state.advance_column(ColumnMove::Back);
        let (row, column) = (self.state.row(), self.state.column());
        let tile = self.board.tile_mut(row, column);
        let removed = tile.letter.unwrap_or(' ');
        tile.clear();
        ui.clear_tile(row, column);
        report(ui, Severity::Info, &format!("Deleted letter: {removed}"));
        Ok(Step::Edited)
    }

    /// Score the active row if it is full, then check for a win or for
    /// running out of rows.
    pub fn submit_row<I: GameInterface + ?Sized>(
        &mut self,
        ui: &mut I,
    ) -> Result<Step, InputError> {
        if self.state.is_finished() {
            return Ok(Step::Ignored);
        }
        report(ui, Severity::Info, "Submitting guess");

        let row = self.state.row();
        let guess = match (self.state.column(), self.board.full_word(row)) {
            (WORD_LENGTH, Some(guess)) => guess,
            _ => {
                let err = self.reject(InputError::IncompleteRow, ui);
                ui.show_message(&err.to_string());
                return Err(err);
            }
        };

        let secret = *self.state.secret();
        let verdicts = engine::score(&guess, &secret);
        for (column, verdict) in verdicts.iter().enumerate() {
            self.board.tile_mut(row, column).verdict = Some(*verdict);
            ui.render_verdict(row, column, *verdict);
        }
        info_log!(
            "submit_row() - row {}: {} -> {}",
            row,
            guess,
            verdicts.iter().map(|v| v.symbol()).collect::<String>()
        );

        self.state.advance_row();

        let outcome = if guess == secret {
            report(ui, Severity::Success, "Game Status: PLAYER WON");
            Some(Outcome::Won)
        } else if self.state.row() >= MAX_GUESSES {
            report(
                ui,
                Severity::Success,
                &format!("Game Status: Player Lost. Correct Word {secret}"),
            );
            Some(Outcome::Lost(secret))
        } else {
            None
        };
        if outcome.is_some() {
            self.state.finish();
        }

        Ok(Step::Scored {
            row,
            verdicts,
            outcome,
        })
    }

    fn reject<I: GameInterface + ?Sized>(&self, err: InputError, ui: &mut I) -> InputError {
        report(ui, Severity::Error, &err.to_string());
        err
    }
}

/// Send a diagnostic to the interface and to the log.
pub(crate) fn report<I: GameInterface + ?Sized>(ui: &mut I, severity: Severity, message: &str) {
    log::log!(severity.log_level(), "{message}");
    ui.diagnostic(severity, message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::time::Duration;
    use Verdict::{Absent, Correct, Present};

    #[derive(Default)]
    struct Recorder {
        letters: Vec<(usize, usize, char)>,
        verdicts: Vec<(usize, usize, Verdict)>,
        cleared: Vec<(usize, usize)>,
        messages: Vec<String>,
        diagnostics: Vec<(Severity, String)>,
    }

    impl GameInterface for Recorder {
        fn render_letter(&mut self, row: usize, column: usize, letter: char) {
            self.letters.push((row, column, letter));
        }
        fn render_verdict(&mut self, row: usize, column: usize, verdict: Verdict) {
            self.verdicts.push((row, column, verdict));
        }
        fn clear_tile(&mut self, row: usize, column: usize) {
            self.cleared.push((row, column));
        }
        fn reset(&mut self) {}
        fn show_message(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
        fn notify(&mut self, _outcome: &Outcome) {}
        fn diagnostic(&mut self, severity: Severity, message: &str) {
            self.diagnostics.push((severity, message.to_string()));
        }
        fn read_key(&mut self, _timeout: Option<Duration>) -> io::Result<Option<KeyInput>> {
            Ok(Some(KeyInput::Quit))
        }
    }

    fn session() -> (Session, Recorder) {
        (Session::new(Word::parse("WORDS").unwrap()), Recorder::default())
    }

    fn type_word(session: &mut Session, ui: &mut Recorder, word: &str) {
        for c in word.chars() {
            session.add_letter(c, ui).unwrap();
        }
    }

    fn submit(session: &mut Session, ui: &mut Recorder, word: &str) -> Step {
        type_word(session, ui, word);
        session.submit_row(ui).unwrap()
    }

    #[test]
    fn test_add_letter_fills_tiles_in_order() {
        let (mut session, mut ui) = session();
        type_word(&mut session, &mut ui, "cra");
        assert_eq!(session.state().column(), 3);
        assert_eq!(session.current_word(), "CRA");
        assert_eq!(ui.letters, [(0, 0, 'C'), (0, 1, 'R'), (0, 2, 'A')]);
    }

    #[test]
    fn test_sixth_letter_rejected() {
        let (mut session, mut ui) = session();
        type_word(&mut session, &mut ui, "CRANE");
        let board_before = session.board().clone();

        assert_eq!(session.add_letter('X', &mut ui), Err(InputError::RowFull));
        assert_eq!(session.state().column(), WORD_LENGTH);
        assert_eq!(session.board(), &board_before);
        assert_eq!(ui.letters.len(), 5);
        assert_eq!(
            ui.diagnostics.last(),
            Some(&(Severity::Error, "Row is full, cannot add letter".to_string()))
        );
    }

    #[test]
    fn test_non_letters_ignored() {
        let (mut session, mut ui) = session();
        session.add_letter('w', &mut ui).unwrap();
        for c in ['1', ' ', '-', 'é', 'ß'] {
            assert_eq!(session.add_letter(c, &mut ui), Ok(Step::Ignored));
        }
        assert_eq!(session.state().column(), 1);
        assert_eq!(session.current_word(), "W");
        assert_eq!(ui.letters, [(0, 0, 'W')]);
        assert!(ui.diagnostics.is_empty());
    }

    #[test]
    fn test_delete_on_empty_row_rejected() {
        let (mut session, mut ui) = session();
        assert_eq!(session.delete_letter(&mut ui), Err(InputError::RowEmpty));
        assert_eq!(session.state().column(), 0);
        assert!(ui.cleared.is_empty());
        assert_eq!(ui.diagnostics.last().map(|d| d.0), Some(Severity::Error));
    }

    #[test]
    fn test_add_then_delete_restores_state() {
        let (mut session, mut ui) = session();
        type_word(&mut session, &mut ui, "CR");
        let board_before = session.board().clone();

        session.add_letter('A', &mut ui).unwrap();
        assert_eq!(session.delete_letter(&mut ui), Ok(Step::Edited));

        assert_eq!(session.state().column(), 2);
        assert_eq!(session.board(), &board_before);
        assert_eq!(ui.cleared, [(0, 2)]);
        assert!(
            ui.diagnostics
                .iter()
                .any(|(_, m)| m == "Deleted letter: A")
        );
    }

    #[test]
    fn test_submit_incomplete_row_rejected() {
        let (mut session, mut ui) = session();
        type_word(&mut session, &mut ui, "WOR");

        assert_eq!(session.submit_row(&mut ui), Err(InputError::IncompleteRow));
        assert_eq!(session.state().row(), 0);
        assert_eq!(session.state().column(), 3);
        assert!(ui.verdicts.is_empty());
        assert_eq!(ui.messages, ["Please enter 5 letters!"]);
    }

    #[test]
    fn test_submit_scores_and_advances() {
        let (mut session, mut ui) = session();
        let step = submit(&mut session, &mut ui, "WORLD");

        assert_eq!(
            step,
            Step::Scored {
                row: 0,
                verdicts: [Correct, Correct, Correct, Absent, Present],
                outcome: None,
            }
        );
        assert_eq!(session.state().row(), 1);
        assert_eq!(session.state().column(), 0);
        assert!(!session.state().is_finished());
        assert_eq!(session.board().tile(0, 4).verdict, Some(Present));
        assert_eq!(ui.verdicts.len(), 5);
        assert_eq!(session.current_word(), "");
    }

    #[test]
    fn test_win_finishes_game() {
        let (mut session, mut ui) = session();
        submit(&mut session, &mut ui, "WORLD");
        let step = submit(&mut session, &mut ui, "WORDS");

        assert_eq!(
            step,
            Step::Scored {
                row: 1,
                verdicts: [Correct; 5],
                outcome: Some(Outcome::Won),
            }
        );
        assert!(session.state().is_finished());
        assert_eq!(session.state().row(), 2);
    }

    #[test]
    fn test_loss_after_six_rows() {
        let (mut session, mut ui) = session();
        for _ in 0..5 {
            let step = submit(&mut session, &mut ui, "CRANE");
            assert!(matches!(step, Step::Scored { outcome: None, .. }));
        }
        let step = submit(&mut session, &mut ui, "CRANE");
        let secret = Word::parse("WORDS").unwrap();
        assert!(matches!(
            step,
            Step::Scored { row: 5, outcome: Some(Outcome::Lost(s)), .. } if s == secret
        ));
        assert!(session.state().is_finished());
        assert_eq!(session.state().row(), MAX_GUESSES);
        assert_eq!(session.current_word(), "");
    }

    #[test]
    fn test_win_on_last_row_beats_exhaustion() {
        let (mut session, mut ui) = session();
        for _ in 0..5 {
            submit(&mut session, &mut ui, "CRANE");
        }
        let step = submit(&mut session, &mut ui, "WORDS");
        assert!(matches!(
            step,
            Step::Scored { row: 5, outcome: Some(Outcome::Won), .. }
        ));
    }

    #[test]
    fn test_finished_session_ignores_everything() {
        let (mut session, mut ui) = session();
        submit(&mut session, &mut ui, "WORDS");
        let board_before = session.board().clone();
        let (row, column) = (session.state().row(), session.state().column());
        let rendered = ui.letters.len();

        for key in [KeyInput::Letter('A'), KeyInput::Delete, KeyInput::Submit] {
            assert_eq!(session.handle_key(key, &mut ui), Ok(Step::Ignored));
        }
        assert_eq!(session.board(), &board_before);
        assert_eq!(session.state().row(), row);
        assert_eq!(session.state().column(), column);
        assert!(session.state().is_finished());
        assert_eq!(ui.letters.len(), rendered);
    }

    #[test]
    fn test_handle_key_dispatch() {
        let (mut session, mut ui) = session();
        assert_eq!(
            session.handle_key(KeyInput::Letter('w'), &mut ui),
            Ok(Step::Edited)
        );
        assert_eq!(session.handle_key(KeyInput::Quit, &mut ui), Ok(Step::Ignored));
        assert_eq!(session.handle_key(KeyInput::Delete, &mut ui), Ok(Step::Edited));
        assert_eq!(
            session.handle_key(KeyInput::Submit, &mut ui),
            Err(InputError::IncompleteRow)
        );
    }

    #[test]
    fn test_win_and_loss_diagnostics() {
        let (mut won, mut won_ui) = session();
        submit(&mut won, &mut won_ui, "WORDS");
        assert_eq!(
            won_ui.diagnostics.last(),
            Some(&(Severity::Success, "Game Status: PLAYER WON".to_string()))
        );

        let (mut lost, mut lost_ui) = session();
        for _ in 0..MAX_GUESSES {
            submit(&mut lost, &mut lost_ui, "FUZZY");
        }
        assert_eq!(
            lost_ui.diagnostics.last().map(|d| d.1.as_str()),
            Some("Game Status: Player Lost. Correct Word WORDS")
        );
    }
}
