use clap::Parser;

/// Wordle filter CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word bank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Path to a date,word answer-history CSV used to draw the secret
    #[arg(short = 'a', long = "answers")]
    pub answers_path: Option<String>,

    /// Play against this secret instead of a random one
    #[arg(long)]
    pub secret: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
