//! # Wordle Assistant
//!
//! An interactive helper for five-letter word-deduction puzzles.
//!
//! The assistant keeps a working list of candidate words, prunes it with the
//! green/yellow clues the player reports, and proposes the next guess either
//! by cumulative letter frequency or by picking a word with five distinct
//! letters.

pub mod config;
pub mod error;
pub mod feedback;
pub mod session;
pub mod solver;
pub mod source;

pub use config::Config;
pub use error::{Error, Result};
pub use feedback::{Clues, Feedback};
pub use session::{Session, SessionEnd};
pub use solver::{LetterFrequency, Narrowed, WordleAssistant};
pub use source::{Fetch, HttpFetcher, WordSource};

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Returns true if `word` is exactly five ASCII letters.
pub fn is_wordle_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Returns true if `word` is five letters and none of them repeats,
/// ignoring case.
pub fn has_unique_letters(word: &str) -> bool {
    if !is_wordle_word(word) {
        return false;
    }
    let mut seen = [false; 26];
    for c in letters(word) {
        if !c.is_ascii_lowercase() {
            return false;
        }
        let idx = (c as u8 - b'a') as usize;
        if seen[idx] {
            return false;
        }
        seen[idx] = true;
    }
    true
}

/// Iterate over the letters of `word`, lowercased.
pub(crate) fn letters(word: &str) -> impl Iterator<Item = char> + '_ {
    word.chars().map(|c| c.to_ascii_lowercase())
}
