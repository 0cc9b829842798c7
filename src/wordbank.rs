//! Word list loading: the legal-guess dictionary and the optional
//! historical-answer pool.

use crate::error::WordleError;
use crate::feedback::WORD_LENGTH;
use chrono::NaiveDate;
use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

fn is_legal_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parse a newline-delimited word list. Words are canonicalized to
/// lowercase; anything that is not five ASCII letters is dropped.
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| is_legal_word(word))
        .collect()
}

/// Load a word list from a file.
///
/// A missing or unreadable file is a [`WordleError::DataUnavailable`], not
/// an empty list: callers can always tell "no dictionary" apart from "no
/// candidates".
pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordleError> {
    let file = File::open(&path).map_err(|source| WordleError::DataUnavailable {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| WordleError::DataUnavailable {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        let word = line.trim().to_lowercase();
        if is_legal_word(&word) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Parse a `date,word` answer-history CSV (the format the NYT scrape
/// produces, e.g. `2021-06-19,cigar`). Rows with an unparseable date or an
/// illegal word are skipped with a warning; row order is preserved.
pub fn load_answers_from_str(data: &str) -> Vec<String> {
    let mut answers = Vec::new();
    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((date, word)) = line.split_once(',') else {
            warn!("skipping answer row without a date column: '{line}'");
            continue;
        };
        if NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").is_err() {
            warn!("skipping answer row with bad date '{date}'");
            continue;
        }
        let word = word.trim().to_lowercase();
        if is_legal_word(&word) {
            answers.push(word);
        } else {
            warn!("skipping illegal answer word '{word}'");
        }
    }
    answers
}

/// Load the answer-history CSV from a file.
pub fn load_answers_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordleError> {
    let data = std::fs::read_to_string(&path).map_err(|source| WordleError::DataUnavailable {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    Ok(load_answers_from_str(&data))
}

/// Default location of the scraped answer history, if a data dir exists.
#[must_use]
pub fn default_answers_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("wordle-filter").join("wordle_history.csv"))
}
