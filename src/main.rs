mod cli;
mod error;
mod feedback;
mod game;
mod rule;
mod solver;
mod wordbank;

use cli::parse_cli;
use game::play_game;
use log::{info, warn};
use rand::seq::IndexedRandom;
use std::io;
use wordbank::{
    EMBEDDED_WORDBANK, default_answers_path, load_answers_from_file, load_wordbank_from_file,
    load_wordbank_from_str,
};

fn load_answers(path_flag: Option<&str>) -> Vec<String> {
    if let Some(path) = path_flag {
        match load_answers_from_file(path) {
            Ok(answers) => return answers,
            Err(e) => {
                eprintln!("{e}");
                return Vec::new();
            }
        }
    }
    // Fall back to the scraped history in the data dir, if one is there.
    if let Some(path) = default_answers_path()
        && path.exists()
    {
        match load_answers_from_file(&path) {
            Ok(answers) => {
                info!("loaded {} answers from {}", answers.len(), path.display());
                return answers;
            }
            Err(e) => warn!("{e}"),
        }
    }
    Vec::new()
}

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let wordbank = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("{e}");
                return;
            }
        },
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    if wordbank.is_empty() {
        eprintln!("Word bank is empty; nothing to play with.");
        return;
    }
    println!("Loaded {} words.", wordbank.len());

    let answers = load_answers(cli.answers_path.as_deref());

    let secret = match &cli.secret {
        Some(word) => word.to_lowercase(),
        None => {
            let mut rng = rand::rng();
            let pool = if answers.is_empty() { &wordbank } else { &answers };
            match pool.choose(&mut rng) {
                Some(word) => word.clone(),
                None => {
                    eprintln!("No words to pick a secret from.");
                    return;
                }
            }
        }
    };

    println!("Guess the 5-letter word in {} tries.", game::MAX_TURNS);
    if let Err(e) = play_game(&secret, &wordbank, io::stdin().lock()) {
        eprintln!("{e}");
    }
}
