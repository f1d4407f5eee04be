use crate::error::AppError;
use crate::word::{DEFAULT_SECRET, Word};
use rand::seq::SliceRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Parse a newline-delimited list, skipping lines that are not five letters.
pub fn load_wordbank_from_str(data: &str) -> Vec<Word> {
    data.lines().filter_map(|line| Word::parse(line).ok()).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Ok(word) = Word::parse(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Where each game's secret word comes from.
#[derive(Clone, Debug)]
pub enum SecretSource {
    /// Same word every game.
    Fixed(Word),
    /// Uniformly random pick per game.
    Random(Vec<Word>),
}

impl SecretSource {
    pub fn random(words: Vec<Word>) -> Result<Self, AppError> {
        if words.is_empty() {
            return Err(AppError::EmptyWordbank);
        }
        Ok(Self::Random(words))
    }

    pub fn next_secret(&self) -> Word {
        match self {
            Self::Fixed(word) => *word,
            Self::Random(words) => words
                .choose(&mut rand::thread_rng())
                .copied()
                .unwrap_or(DEFAULT_SECRET),
        }
    }
}
