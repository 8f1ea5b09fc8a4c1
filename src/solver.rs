//! Candidate narrowing and letter-frequency ranking.
//!
//! Everything here is a plain function of its inputs: the candidate list,
//! the clues for the current round and the words guessed so far. The
//! [`WordleAssistant`] wrapper only threads that state from one round to the
//! next.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};

use log::debug;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::feedback::Clues;
use crate::{has_unique_letters, letters};

/// Occurrence count of each letter over a list of words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequency(HashMap<char, usize>);

impl LetterFrequency {
    /// Count every letter of every word. Repeated letters count once per
    /// occurrence.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        Self::excluding_positions(words, &BTreeSet::new())
    }

    /// Like [`LetterFrequency::from_words`], but skipping the given positions.
    pub fn excluding_positions<S: AsRef<str>>(words: &[S], skip: &BTreeSet<usize>) -> Self {
        let mut counts = HashMap::new();
        for word in words {
            for (i, c) in letters(word.as_ref()).enumerate() {
                if skip.contains(&i) {
                    continue;
                }
                *counts.entry(c).or_insert(0) += 1;
            }
        }
        Self(counts)
    }

    pub fn count(&self, letter: char) -> usize {
        self.0
            .get(&letter.to_ascii_lowercase())
            .copied()
            .unwrap_or(0)
    }

    /// Sum of the counts of each letter in `word`. Letters missing from the
    /// histogram add nothing.
    pub fn score(&self, word: &str) -> usize {
        letters(word).map(|c| self.count(c)).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(char, usize)> for LetterFrequency {
    fn from_iter<I: IntoIterator<Item = (char, usize)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(c, n)| (c.to_ascii_lowercase(), n))
                .collect(),
        )
    }
}

/// Sort `words` by descending score. Equal scores keep their input order.
pub fn rank_by(words: Vec<String>, frequency: &LetterFrequency) -> Vec<String> {
    let scores: Vec<usize> = words.par_iter().map(|w| frequency.score(w)).collect();
    let mut scored: Vec<(usize, String)> = scores.into_iter().zip(words).collect();
    scored.sort_by_key(|(score, _)| Reverse(*score));
    scored.into_iter().map(|(_, word)| word).collect()
}

/// Rank candidates by the frequency of their letters at positions not yet
/// fixed by a green clue.
pub fn rank(words: Vec<String>, clues: &Clues) -> Vec<String> {
    let frequency = LetterFrequency::excluding_positions(&words, &clues.fixed_positions());
    debug!("ranking {} candidates over {} letters", words.len(), frequency.len());
    rank_by(words, &frequency)
}

/// Remove and return the first word at or after `offset` whose five letters
/// are all distinct.
pub fn pick_unique(words: &mut Vec<String>, offset: usize) -> Result<String> {
    let idx = words
        .iter()
        .enumerate()
        .skip(offset)
        .find(|(_, w)| has_unique_letters(w))
        .map(|(i, _)| i)
        .ok_or(Error::ExhaustedCandidates {
            offset,
            len: words.len(),
        })?;
    Ok(words.remove(idx))
}

/// Pick the opening guess from the solutions list.
///
/// Returns the ranked list without the starter, and the starter as the first
/// entry of a fresh guessed-words list.
pub fn starter_word(solutions: Vec<String>) -> Result<(Vec<String>, Vec<String>)> {
    let frequency = LetterFrequency::from_words(&solutions);
    starter_with(solutions, &frequency)
}

/// Pick the opening guess from `pool`, weighting letters by how often they
/// appear in `solutions`.
pub fn starter_word_from(
    pool: Vec<String>,
    solutions: &[String],
) -> Result<(Vec<String>, Vec<String>)> {
    let frequency = LetterFrequency::from_words(solutions);
    starter_with(pool, &frequency)
}

fn starter_with(
    pool: Vec<String>,
    frequency: &LetterFrequency,
) -> Result<(Vec<String>, Vec<String>)> {
    let mut ranked = rank_by(pool, frequency);
    let guess = pick_unique(&mut ranked, 0)?;
    Ok((ranked, vec![guess]))
}

/// Outcome of applying a round of clues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narrowed {
    /// Exactly one candidate is left.
    Solved(String),
    /// Zero or several candidates are left.
    Remaining(Vec<String>),
}

impl Narrowed {
    pub fn into_candidates(self) -> Vec<String> {
        match self {
            Narrowed::Solved(word) => vec![word],
            Narrowed::Remaining(words) => words,
        }
    }
}

/// Keep the candidates consistent with `clues` and with the gray letters
/// implied by `guessed`.
pub fn narrow(words: &[String], clues: &Clues, guessed: &[String]) -> Narrowed {
    let gray = clues.gray_letters(guessed);
    debug!("gray letters: {:?}", gray);

    let mut remaining: Vec<String> = words
        .iter()
        .filter(|word| is_consistent(word, clues, &gray))
        .cloned()
        .collect();
    debug!("narrowed {} candidates to {}", words.len(), remaining.len());

    if remaining.len() == 1 {
        Narrowed::Solved(remaining.remove(0))
    } else {
        Narrowed::Remaining(remaining)
    }
}

/// Check a single word against green, yellow and gray constraints.
pub fn is_consistent(word: &str, clues: &Clues, gray: &BTreeSet<char>) -> bool {
    let chars: Vec<char> = letters(word).collect();

    let greens_hold = clues
        .green
        .iter()
        .all(|(&pos, &letter)| chars.get(pos) == Some(&letter));

    let yellows_hold = clues
        .yellow
        .iter()
        .all(|(&pos, &letter)| chars.get(pos) != Some(&letter) && chars.contains(&letter));

    greens_hold && yellows_hold && !chars.iter().any(|c| gray.contains(c))
}

/// The candidate list and the guesses made so far.
#[derive(Debug, Clone, Default)]
pub struct WordleAssistant {
    candidates: Vec<String>,
    guessed: Vec<String>,
}

impl WordleAssistant {
    pub fn new(candidates: Vec<String>, guessed: Vec<String>) -> Self {
        Self {
            candidates,
            guessed,
        }
    }

    /// Rank `pool` by letter frequency over `solutions` and take the best
    /// unique-letter word as the opening guess.
    pub fn start(pool: Vec<String>, solutions: &[String]) -> Result<Self> {
        let (candidates, guessed) = starter_word_from(pool, solutions)?;
        Ok(Self::new(candidates, guessed))
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn guessed(&self) -> &[String] {
        &self.guessed
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn starter(&self) -> Option<&str> {
        self.guessed.first().map(String::as_str)
    }

    /// Narrow the candidates with this round's clues. Returns the answer once
    /// only one word is left.
    pub fn apply_clues(&mut self, clues: &Clues) -> Option<String> {
        let narrowed = narrow(&self.candidates, clues, &self.guessed);
        let solved = match &narrowed {
            Narrowed::Solved(word) => Some(word.clone()),
            Narrowed::Remaining(_) => None,
        };
        self.candidates = narrowed.into_candidates();
        solved
    }

    /// Take the first unique-letter candidate as the next guess.
    pub fn propose_unique(&mut self) -> Result<String> {
        let guess = pick_unique(&mut self.candidates, 0)?;
        self.guessed.push(guess.clone());
        Ok(guess)
    }

    /// Re-order the candidates by letter frequency and return them.
    pub fn rank(&mut self, clues: &Clues) -> &[String] {
        let candidates = std::mem::take(&mut self.candidates);
        self.candidates = rank(candidates, clues);
        &self.candidates
    }

    /// Record a guess the player made. Returns false, leaving everything
    /// untouched, if the word is not a current candidate.
    pub fn record_guess(&mut self, word: &str) -> bool {
        match self.candidates.iter().position(|w| w.eq_ignore_ascii_case(word)) {
            Some(idx) => {
                let word = self.candidates.remove(idx);
                self.guessed.push(word);
                true
            }
            None => false,
        }
    }
}
