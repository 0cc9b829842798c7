//! Per-letter feedback and guess records.
//!
//! `classify` scores a guess against a secret the way the game does:
//! greens first, then yellows against whatever letters of the secret
//! remain, so duplicate letters are never over-credited.

use crate::error::WordleError;

/// Word length for this game.
pub const WORD_LENGTH: usize = 5;

/// Outcome for a single letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter, right position (green).
    Correct,
    /// Letter is in the word but not at this position (yellow).
    Present,
    /// Letter is not in the word, or all its occurrences are already accounted for (gray).
    Absent,
}

impl Feedback {
    /// Parse from a feedback character (G=green, Y=yellow, X=gray).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Feedback::Correct),
            'Y' => Some(Feedback::Present),
            'X' => Some(Feedback::Absent),
            _ => None,
        }
    }

    /// Convert to a feedback character for display.
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => 'G',
            Feedback::Present => 'Y',
            Feedback::Absent => 'X',
        }
    }
}

/// One letter of a guess together with its position and outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterFeedback {
    pub letter: char,
    pub position: usize,
    pub feedback: Feedback,
}

/// A guessed word and its five per-letter outcomes, in index order.
///
/// Records are created once per turn and never mutated; the history owns
/// them in turn order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub word: String,
    pub feedback: Vec<LetterFeedback>,
}

impl Guess {
    /// Build a record from an already-known outcome sequence.
    pub fn new(word: &str, outcomes: [Feedback; WORD_LENGTH]) -> Guess {
        let word = word.to_lowercase();
        let feedback = word
            .chars()
            .zip(outcomes)
            .enumerate()
            .map(|(position, (letter, feedback))| LetterFeedback {
                letter,
                position,
                feedback,
            })
            .collect();
        Guess { word, feedback }
    }

    /// Score `guess` against `secret` and build the record in one step.
    pub fn scored(secret: &str, guess: &str) -> Result<Guess, WordleError> {
        let outcomes = classify(secret, guess)?;
        Ok(Guess::new(guess, outcomes))
    }
}

/// Check that a word is exactly five ASCII letters, returning its
/// lowercase characters.
pub(crate) fn validate(word: &str) -> Result<Vec<char>, WordleError> {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    if chars.len() != WORD_LENGTH {
        return Err(WordleError::InvalidLength {
            word: word.to_string(),
            length: chars.len(),
        });
    }
    if let Some(&ch) = chars.iter().find(|c| !c.is_ascii_alphabetic()) {
        return Err(WordleError::InvalidCharacter {
            word: word.to_string(),
            ch,
        });
    }
    Ok(chars)
}

/// Score a guess against the secret, one outcome per position.
///
/// First pass marks greens and collects the unmatched secret letters into a
/// remaining-letter pool. Second pass marks each leftover guess letter
/// yellow only if it can still consume an occurrence from that pool,
/// otherwise gray. A letter guessed twice when the secret holds it once
/// credits one occurrence as present and the other as absent.
pub fn classify(secret: &str, guess: &str) -> Result<[Feedback; WORD_LENGTH], WordleError> {
    let secret_chars = validate(secret)?;
    let guess_chars = validate(guess)?;

    let mut outcomes = [Feedback::Absent; WORD_LENGTH];
    let mut remaining = [0u8; 26];

    // First pass: greens.
    for i in 0..WORD_LENGTH {
        if guess_chars[i] == secret_chars[i] {
            outcomes[i] = Feedback::Correct;
        } else {
            remaining[(secret_chars[i] as u8 - b'a') as usize] += 1;
        }
    }

    // Second pass: yellows consume from the remaining pool, the rest are gray.
    for i in 0..WORD_LENGTH {
        if outcomes[i] == Feedback::Correct {
            continue;
        }
        let idx = (guess_chars[i] as u8 - b'a') as usize;
        if remaining[idx] > 0 {
            outcomes[i] = Feedback::Present;
            remaining[idx] -= 1;
        }
    }

    Ok(outcomes)
}
