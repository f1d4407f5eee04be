use crate::engine::Verdict;
use crate::word::{WORD_LENGTH, Word};

pub const MAX_GUESSES: usize = 6;

/// Direction for [`GameState::advance_column`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnMove {
    Forward,
    Back,
}

/// Progress through a single game: the active tile and whether the game is over.
///
/// Only the input controller mutates this. `row` never decreases, `column`
/// stays within `0..=WORD_LENGTH` and `finished` never goes back to false.
#[derive(Clone, Debug)]
pub struct GameState {
    secret: Word,
    row: usize,
    column: usize,
    finished: bool,
}

impl GameState {
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            row: 0,
            column: 0,
            finished: false,
        }
    }

    pub fn secret(&self) -> &Word {
        &self.secret
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Move the column cursor by one. Returns false and leaves the cursor
    /// alone when the move would leave `0..=WORD_LENGTH`.
    pub fn advance_column(&mut self, step: ColumnMove) -> bool {
        match step {
            ColumnMove::Forward if self.column < WORD_LENGTH => self.column += 1,
            ColumnMove::Back if self.column > 0 => self.column -= 1,
            _ => return false,
        }
        true
    }

    /// Start the next row. Callers check `is_finished` first; the row index
    /// tops out at `MAX_GUESSES`.
    pub fn advance_row(&mut self) {
        debug_assert!(self.row < MAX_GUESSES, "advance_row past the last row");
        self.row = (self.row + 1).min(MAX_GUESSES);
        self.column = 0;
    }

    pub fn finish(&mut self) {
        self.finished = true;
    }
}

/// A single letter cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub verdict: Option<Verdict>,
}

impl Tile {
    pub fn is_filled(&self) -> bool {
        self.letter.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub type Row = [Tile; WORD_LENGTH];

/// Six rows of five tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    rows: [Row; MAX_GUESSES],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row; MAX_GUESSES] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> &Row {
        &self.rows[row]
    }

    pub fn tile(&self, row: usize, column: usize) -> &Tile {
        &self.rows[row][column]
    }

    pub(crate) fn tile_mut(&mut self, row: usize, column: usize) -> &mut Tile {
        &mut self.rows[row][column]
    }

    /// Letters of a row up to the first empty tile.
    pub fn word_in_row(&self, row: usize) -> String {
        self.rows[row].iter().map_while(|t| t.letter).collect()
    }

    /// The row as a word, if all five tiles are filled.
    pub fn full_word(&self, row: usize) -> Option<Word> {
        let mut letters = [' '; WORD_LENGTH];
        for (slot, tile) in letters.iter_mut().zip(&self.rows[row]) {
            *slot = tile.letter?;
        }
        Some(Word::from_letters(letters))
    }
}
