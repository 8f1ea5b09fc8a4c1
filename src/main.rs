//! Wordle Assistant CLI
//!
//! Interactive command-line front end: loads the word lists, prints the
//! opening guess and walks the player through the following rounds.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use wordle_assistant::config::{self, Config};
use wordle_assistant::{HttpFetcher, Session, SessionEnd, WordSource, WordleAssistant};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the cached word lists.
    #[arg(long, default_value = ".")]
    cache_dir: PathBuf,

    /// Where to download the list of accepted guesses if it is not cached.
    #[arg(long, default_value = config::VALID_WORDS_URL)]
    valid_url: String,

    /// Where to download the list of possible answers if it is not cached.
    #[arg(long, default_value = config::SOLUTIONS_URL)]
    solutions_url: String,

    /// Rounds to play after the opening guess.
    #[arg(short, long, default_value_t = config::DEFAULT_ROUNDS)]
    rounds: usize,

    /// How many ranked suggestions to show.
    #[arg(short = 'n', long, default_value_t = config::DEFAULT_SUGGESTIONS)]
    suggestions: usize,

    /// Draw candidates from every accepted word rather than only the
    /// possible answers.
    #[arg(long)]
    full_dictionary: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            cache_dir: args.cache_dir,
            valid_url: args.valid_url,
            solutions_url: args.solutions_url,
            rounds: args.rounds,
            suggestions: args.suggestions,
            full_dictionary: args.full_dictionary,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::from(Args::parse());

    let fetcher = HttpFetcher;
    let valid = WordSource::valid(&config)
        .load(&fetcher)
        .context("failed to load the valid word list")?;
    let solutions = WordSource::solutions(&config)
        .load(&fetcher)
        .context("failed to load the solutions list")?;
    info!("loaded {} valid words, {} solutions", valid.len(), solutions.len());

    let pool = if config.full_dictionary {
        valid
    } else {
        solutions.clone()
    };
    let assistant =
        WordleAssistant::start(pool, &solutions).context("failed to pick an opening guess")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), assistant, &config);
    match session.run()? {
        SessionEnd::Solved(word) => info!("solved: {}", word),
        SessionEnd::RoundsExhausted { candidates } => {
            info!("rounds exhausted with {} candidates left", candidates.len())
        }
    }
    Ok(())
}
