//! Interactive console game: the caller owns the secret, this loop owns
//! the turns. Generic over `BufRead` so tests can drive it with a
//! `Cursor`.

use crate::error::WordleError;
use crate::feedback::{self, Feedback, Guess};
use crate::solver::filter_candidates;
use crossterm::style::Stylize;
use log::info;
use std::io::BufRead;

pub const MAX_TURNS: usize = 6;
const MAX_CANDIDATES_DISPLAY: usize = 8;

/// How a game ended.
#[derive(Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// The secret was guessed, in this many turns.
    Solved(usize),
    /// Six turns passed without finding the secret.
    OutOfTurns,
    /// The player quit (or input ended).
    Quit,
}

enum GuessInput {
    Valid(String),
    Invalid,
    Exit,
}

/// Run one game against `secret`, reading guesses from `reader`.
///
/// Guesses must be five letters and present in the dictionary. After each
/// turn the feedback tiles and the remaining candidate pool are printed.
pub fn play_game<R: BufRead>(
    secret: &str,
    dictionary: &[String],
    mut reader: R,
) -> Result<GameOutcome, WordleError> {
    let secret = secret.to_lowercase();
    feedback::validate(&secret)?;
    info!("starting game, {} dictionary words", dictionary.len());

    let mut history: Vec<Guess> = Vec::new();

    for turn in 1..=MAX_TURNS {
        let guess = loop {
            match read_guess(&mut reader, turn) {
                GuessInput::Exit => {
                    println!("Exiting. The word was '{}'.", secret.to_uppercase());
                    return Ok(GameOutcome::Quit);
                }
                GuessInput::Valid(word) if dictionary.iter().any(|w| w.eq_ignore_ascii_case(&word)) => {
                    break word;
                }
                GuessInput::Valid(word) => {
                    println!("'{word}' is not in the dictionary.");
                }
                GuessInput::Invalid => {}
            }
        };

        let record = Guess::scored(&secret, &guess)?;
        display_feedback(&record);

        let solved = record.word == secret;
        history.push(record);
        if solved {
            println!("Solved in {turn} turn{}!", if turn == 1 { "" } else { "s" });
            return Ok(GameOutcome::Solved(turn));
        }

        let candidates = filter_candidates(dictionary, &history);
        display_candidates(&candidates);
    }

    println!("Out of turns. The word was '{}'.", secret.to_uppercase());
    Ok(GameOutcome::OutOfTurns)
}

fn read_guess<R: BufRead>(reader: &mut R, turn: usize) -> GuessInput {
    println!("\nTurn {turn}/{MAX_TURNS} - enter your guess (5 letters, or 'exit' to quit):");
    let mut input = String::new();
    // A closed stdin ends the game rather than spinning on empty reads.
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return GuessInput::Exit,
        Ok(_) => {}
    }
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "exit" => GuessInput::Exit,
        word if feedback::validate(word).is_ok() => GuessInput::Valid(word.to_string()),
        _ => {
            println!("Invalid guess. Please enter 5 letters.");
            GuessInput::Invalid
        }
    }
}

fn display_feedback(guess: &Guess) {
    print!("   ");
    for lf in &guess.feedback {
        let tile = format!(" {} ", lf.letter.to_ascii_uppercase());
        match lf.feedback {
            Feedback::Correct => print!("{}", tile.black().on_green()),
            Feedback::Present => print!("{}", tile.black().on_yellow()),
            Feedback::Absent => print!("{}", tile.white().on_dark_grey()),
        }
    }
    println!();
}

fn display_candidates(candidates: &[String]) {
    println!("Candidates left: {}", candidates.len());
    if candidates.is_empty() {
        println!("No dictionary word fits the feedback so far.");
        return;
    }
    let examples: Vec<&str> = candidates
        .iter()
        .take(MAX_CANDIDATES_DISPLAY)
        .map(String::as_str)
        .collect();
    println!("Examples: {}", examples.join(", "));
}
