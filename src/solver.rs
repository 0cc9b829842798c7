//! Narrowing the dictionary down to the candidates still consistent with
//! every guess made so far.

use crate::feedback::Guess;
use crate::rule::Rule;
use log::debug;
use std::collections::HashSet;

/// Filter the dictionary down to words consistent with the whole history.
///
/// Words already guessed are never returned, even if they would satisfy the
/// rule. The output is a stable subsequence of `dictionary`: relative order
/// is preserved and the dictionary itself is untouched.
pub fn filter_candidates(dictionary: &[String], history: &[Guess]) -> Vec<String> {
    let tried: HashSet<String> = history.iter().map(|g| g.word.to_lowercase()).collect();
    let rule = Rule::from_history(history);

    let candidates: Vec<String> = dictionary
        .iter()
        .filter(|word| !tried.contains(&word.to_lowercase()) && rule.matches(word))
        .cloned()
        .collect();

    debug!(
        "{} of {} dictionary words remain after {} guesses",
        candidates.len(),
        dictionary.len(),
        history.len()
    );
    candidates
}
