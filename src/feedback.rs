//! Clues reported by the player after a guess.
//!
//! The player types two five-character patterns per round, one for green
//! letters and one for yellow letters, using `_` for positions that carry no
//! clue of that color. Gray letters are never typed; they are inferred from
//! the words guessed so far.

use std::collections::{BTreeMap, BTreeSet};

use crate::{letters, WORD_LENGTH};

/// Marks the blank positions of a pattern.
pub const WILDCARD: char = '_';

/// What the clues say about a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word (gray)
    Absent,
}

/// Green and yellow letters keyed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clues {
    pub green: BTreeMap<usize, char>,
    pub yellow: BTreeMap<usize, char>,
}

impl Clues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build clues from a green and a yellow pattern such as `"a___t"`.
    ///
    /// Returns `None` if either pattern is malformed; see [`parse_pattern`].
    pub fn from_patterns(green: &str, yellow: &str) -> Option<Self> {
        Some(Self {
            green: parse_pattern(green)?,
            yellow: parse_pattern(yellow)?,
        })
    }

    /// Add a green letter at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not less than [`WORD_LENGTH`].
    pub fn with_green(mut self, position: usize, letter: char) -> Self {
        assert!(position < WORD_LENGTH, "clue position {} out of range", position);
        self.green.insert(position, letter.to_ascii_lowercase());
        self
    }

    /// Add a yellow letter at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not less than [`WORD_LENGTH`].
    pub fn with_yellow(mut self, position: usize, letter: char) -> Self {
        assert!(position < WORD_LENGTH, "clue position {} out of range", position);
        self.yellow.insert(position, letter.to_ascii_lowercase());
        self
    }

    /// Classify a letter against these clues. Green wins over yellow; a
    /// letter carrying neither color is absent.
    pub fn classify(&self, letter: char) -> Feedback {
        let letter = letter.to_ascii_lowercase();
        if self.green.values().any(|&c| c == letter) {
            Feedback::Correct
        } else if self.yellow.values().any(|&c| c == letter) {
            Feedback::Present
        } else {
            Feedback::Absent
        }
    }

    /// Letters of previous guesses that are neither green nor yellow.
    pub fn gray_letters<S: AsRef<str>>(&self, guessed: &[S]) -> BTreeSet<char> {
        guessed
            .iter()
            .flat_map(|word| letters(word.as_ref()))
            .filter(|&c| self.classify(c) == Feedback::Absent)
            .collect()
    }

    /// Positions whose letter is already known.
    pub fn fixed_positions(&self) -> BTreeSet<usize> {
        self.green.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.green.is_empty() && self.yellow.is_empty()
    }
}

/// Parse a clue pattern like `"a___t"` into a position → letter map.
///
/// An empty pattern means no clues. Anything else must be exactly five
/// characters, each an ASCII letter or `_`. Letters are lowercased.
pub fn parse_pattern(s: &str) -> Option<BTreeMap<usize, char>> {
    let s = s.trim();
    if s.is_empty() {
        return Some(BTreeMap::new());
    }
    if s.chars().count() != WORD_LENGTH {
        return None;
    }

    let mut map = BTreeMap::new();
    for (i, c) in s.chars().enumerate() {
        match c {
            WILDCARD => {}
            c if c.is_ascii_alphabetic() => {
                map.insert(i, c.to_ascii_lowercase());
            }
            _ => return None,
        }
    }
    Some(map)
}

impl std::fmt::Display for Clues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let render = |map: &BTreeMap<usize, char>| -> String {
            (0..WORD_LENGTH)
                .map(|i| map.get(&i).copied().unwrap_or(WILDCARD))
                .collect()
        };
        write!(f, "green {} yellow {}", render(&self.green), render(&self.yellow))
    }
}
