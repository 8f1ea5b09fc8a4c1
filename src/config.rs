//! Runtime settings for the assistant.

use std::path::PathBuf;

pub const VALID_WORDS_URL: &str = "https://gist.githubusercontent.com/dracos/dd0668f281e685bad51479e5acaadb93/raw/6bfa15d263d6d5b63840a8e5b64e04b382fdb079/valid-wordle-words.txt";
pub const SOLUTIONS_URL: &str = "https://gist.githubusercontent.com/cfreshman/a03ef2cba789d8cf00c08f767e0fad7b/raw/45c977427419a1e0edee8fd395af1e0a4966273b/wordle-answers-alphabetical.txt";

pub const VALID_WORDS_FILE: &str = "valid-wordle-words.txt";
pub const SOLUTIONS_FILE: &str = "valid-wordle-solutions.txt";

/// Rounds played after the starter word.
pub const DEFAULT_ROUNDS: usize = 5;

/// Ranked suggestions shown per round.
pub const DEFAULT_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the two word-list cache files
    pub cache_dir: PathBuf,
    pub valid_url: String,
    pub solutions_url: String,
    pub rounds: usize,
    pub suggestions: usize,
    /// Narrow and rank the valid list instead of the solutions list
    pub full_dictionary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("."),
            valid_url: VALID_WORDS_URL.to_string(),
            solutions_url: SOLUTIONS_URL.to_string(),
            rounds: DEFAULT_ROUNDS,
            suggestions: DEFAULT_SUGGESTIONS,
            full_dictionary: false,
        }
    }
}

impl Config {
    pub fn valid_cache(&self) -> PathBuf {
        self.cache_dir.join(VALID_WORDS_FILE)
    }

    pub fn solutions_cache(&self) -> PathBuf {
        self.cache_dir.join(SOLUTIONS_FILE)
    }
}
