use crate::word::{WORD_LENGTH, Word};

/// Scoring outcome for a single letter of a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Right letter, right position (green).
    Correct,
    /// Right letter, wrong position (yellow).
    Present,
    /// Letter not available at this position (gray).
    Absent,
}

impl Verdict {
    /// G/Y/X notation used for plain-text feedback.
    pub fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }
}

// Never equal to an uppercase letter
const CONSUMED: u8 = b'_';

/// Score `guess` against `secret`.
///
/// Exact matches are claimed first, then every remaining guess letter takes
/// the first unclaimed occurrence of itself in the secret. A secret letter is
/// claimed at most once, so repeated guess letters beyond the count in the
/// secret stay `Absent`.
pub fn score(guess: &Word, secret: &Word) -> [Verdict; WORD_LENGTH] {
    let mut verdicts = [Verdict::Absent; WORD_LENGTH];
    let mut secret_remaining = *secret.as_bytes();
    let mut guess_remaining = *guess.as_bytes();

    // First pass: exact positions
    for i in 0..WORD_LENGTH {
        if guess_remaining[i] == secret_remaining[i] {
            verdicts[i] = Verdict::Correct;
            secret_remaining[i] = CONSUMED;
            guess_remaining[i] = CONSUMED;
        }
    }

    // Second pass: wrong positions
    for i in 0..WORD_LENGTH {
        if guess_remaining[i] == CONSUMED {
            continue;
        }
        if let Some(pos) = secret_remaining
            .iter()
            .position(|&c| c == guess_remaining[i])
        {
            verdicts[i] = Verdict::Present;
            secret_remaining[pos] = CONSUMED;
        }
    }

    verdicts
}
