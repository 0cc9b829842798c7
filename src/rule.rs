//! The composed matching rule built from a guess history.
//!
//! Every call to [`Rule::from_history`] replays the whole history from
//! scratch: green and yellow outcomes append positional constraints in
//! the exact order they are replayed, while gray outcomes only feed a
//! call-local absent-letter set that is serialized once, after the full
//! replay, right before the trailing length constraint. A letter grayed
//! in one turn and confirmed present in a later one is promoted out of
//! that set; a letter grayed again after a promotion is re-added. The
//! last replayed classification always wins.

use crate::feedback::{Feedback, Guess, WORD_LENGTH};
use log::debug;
use std::collections::BTreeSet;
use std::fmt;

/// One fragment of the composed rule, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// The letter must be at this position (green).
    At { position: usize, letter: char },
    /// The letter must occur somewhere, but not at this position (yellow).
    PresentNotAt { position: usize, letter: char },
    /// None of these letters may occur anywhere (the surviving gray set).
    ExcludesAll(Vec<char>),
    /// The candidate must be exactly this many letters long.
    ExactLength(usize),
}

impl Constraint {
    fn is_satisfied_by(&self, chars: &[char]) -> bool {
        match self {
            Constraint::At { position, letter } => chars.get(*position) == Some(letter),
            Constraint::PresentNotAt { position, letter } => {
                chars.contains(letter) && chars.get(*position) != Some(letter)
            }
            Constraint::ExcludesAll(letters) => {
                !chars.iter().any(|c| letters.binary_search(c).is_ok())
            }
            Constraint::ExactLength(length) => chars.len() == *length,
        }
    }
}

/// The accumulated matcher equivalent to all feedback seen so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    constraints: Vec<Constraint>,
}

impl Rule {
    /// Replay the full history and compose one rule from it.
    pub fn from_history(history: &[Guess]) -> Rule {
        let mut constraints = Vec::new();
        // Scoped to this call: never shared across games or callers.
        let mut absent: BTreeSet<char> = BTreeSet::new();

        for guess in history {
            for lf in &guess.feedback {
                let letter = lf.letter.to_ascii_lowercase();
                match lf.feedback {
                    Feedback::Correct => {
                        absent.remove(&letter);
                        constraints.push(Constraint::At {
                            position: lf.position,
                            letter,
                        });
                    }
                    Feedback::Present => {
                        absent.remove(&letter);
                        constraints.push(Constraint::PresentNotAt {
                            position: lf.position,
                            letter,
                        });
                    }
                    Feedback::Absent => {
                        // No per-position constraint: absence is one global
                        // fragment emitted after the replay.
                        absent.insert(letter);
                    }
                }
            }
        }

        if !absent.is_empty() {
            constraints.push(Constraint::ExcludesAll(absent.into_iter().collect()));
        }
        constraints.push(Constraint::ExactLength(WORD_LENGTH));

        let rule = Rule { constraints };
        debug!("composed rule from {} guesses: {rule}", history.len());
        rule
    }

    /// Returns `true` iff the candidate satisfies every accumulated
    /// constraint. Case-insensitive, whole-word.
    pub fn matches(&self, word: &str) -> bool {
        let chars: Vec<char> = word.to_lowercase().chars().collect();
        self.constraints.iter().all(|c| c.is_satisfied_by(&chars))
    }

    /// The constraints in emission order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}

/// Renders the rule as the anchored, case-insensitive lookahead pattern it
/// is equivalent to, e.g. `(?i)^(?=.{2}a)(?=.*b)(?!.{0}b)(?!.*[xyz]).{5}$`.
/// The form is deterministic for a given history and is what structural
/// equality tests compare.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(?i)^")?;
        for constraint in &self.constraints {
            match constraint {
                Constraint::At { position, letter } => {
                    write!(f, "(?=.{{{position}}}{letter})")?;
                }
                Constraint::PresentNotAt { position, letter } => {
                    write!(f, "(?=.*{letter})(?!.{{{position}}}{letter})")?;
                }
                Constraint::ExcludesAll(letters) => {
                    write!(f, "(?!.*[")?;
                    for letter in letters {
                        write!(f, "{letter}")?;
                    }
                    write!(f, "])")?;
                }
                Constraint::ExactLength(length) => {
                    write!(f, ".{{{length}}}$")?;
                }
            }
        }
        Ok(())
    }
}
