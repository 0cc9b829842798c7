// Library interface for wordle-filter
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod feedback;
pub mod game;
pub mod rule;
pub mod solver;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::WordleError;
pub use feedback::{Feedback, Guess, LetterFeedback, WORD_LENGTH, classify};
pub use game::{GameOutcome, play_game};
pub use rule::{Constraint, Rule};
pub use solver::filter_candidates;
pub use wordbank::{
    load_answers_from_file, load_answers_from_str, load_wordbank_from_file, load_wordbank_from_str,
};
