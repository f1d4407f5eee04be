use std::fmt;
use thiserror::Error;

pub const WORD_LENGTH: usize = 5;

/// Secret used when nothing else is configured.
pub const DEFAULT_SECRET: Word = Word(*b"WORDS");

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordError {
    #[error("words have 5 letters, got {0}")]
    Length(usize),
    #[error("'{0}' is not a letter")]
    NotALetter(char),
}

/// A five letter word, stored as uppercase ASCII.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word, ignoring surrounding whitespace and case.
    pub fn parse(input: &str) -> Result<Self, WordError> {
        let input = input.trim();
        let mut letters = [0u8; WORD_LENGTH];
        let mut len = 0;
        for c in input.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(WordError::NotALetter(c));
            }
            if len < WORD_LENGTH {
                letters[len] = c.to_ascii_uppercase() as u8;
            }
            len += 1;
        }
        if len != WORD_LENGTH {
            return Err(WordError::Length(len));
        }
        Ok(Self(letters))
    }

    /// Build a word from letters already known to be uppercase A-Z.
    pub(crate) fn from_letters(letters: [char; WORD_LENGTH]) -> Self {
        Self(letters.map(|c| c as u8))
    }

    pub fn letters(&self) -> [char; WORD_LENGTH] {
        self.0.map(char::from)
    }

    pub fn as_bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.letters() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({self})")
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
