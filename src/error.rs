use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors surfaced by the engine and its word list loaders.
#[derive(Debug)]
pub enum WordleError {
    /// A secret or guess was not exactly five letters.
    InvalidLength { word: String, length: usize },
    /// A secret or guess contained something other than an ASCII letter.
    InvalidCharacter { word: String, ch: char },
    /// A word list or answer history file could not be read.
    DataUnavailable { path: PathBuf, source: io::Error },
}

impl fmt::Display for WordleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { word, length } => {
                write!(f, "'{word}' must be exactly 5 letters, got {length}")
            }
            Self::InvalidCharacter { word, ch } => {
                write!(f, "'{word}' contains invalid character '{ch}'")
            }
            Self::DataUnavailable { path, source } => {
                write!(f, "failed to load word list from '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for WordleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DataUnavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}
