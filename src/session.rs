//! The interactive loop.
//!
//! A session prints the opening guess, then for a fixed number of rounds asks
//! the player which kind of suggestion they want, reads the green and yellow
//! clues, narrows the candidates and proposes the next guess. It stops early
//! once the clues leave a single candidate.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use log::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::feedback::{parse_pattern, Clues};
use crate::solver::WordleAssistant;

/// Width of the `=====` separator lines.
pub const SEPARATOR_WIDTH: usize = 64;

/// A separator line with `title` centered in it. Odd padding goes right.
pub fn separator(title: &str) -> String {
    let len = title.chars().count();
    let pad = SEPARATOR_WIDTH.saturating_sub(len) / 2;
    format!("{}{}{}", "=".repeat(pad), title, "=".repeat(pad + len % 2))
}

/// Which kind of guess the player asked for this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proposal {
    /// The first candidate with five distinct letters
    Unique,
    /// The candidates ordered by letter frequency
    Ranked,
}

impl Proposal {
    /// `U` (any case) asks for a unique-letter word, anything else for the
    /// ranked list.
    pub fn from_choice(choice: &str) -> Self {
        if choice.trim().eq_ignore_ascii_case("u") {
            Proposal::Unique
        } else {
            Proposal::Ranked
        }
    }
}

/// How a session finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The clues narrowed the candidates down to this word.
    Solved(String),
    /// Every round was played without a unique answer.
    RoundsExhausted { candidates: Vec<String> },
}

pub struct Session<R, W> {
    input: R,
    output: W,
    assistant: WordleAssistant,
    rounds: usize,
    suggestions: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, assistant: WordleAssistant, config: &Config) -> Self {
        Self {
            input,
            output,
            assistant,
            rounds: config.rounds,
            suggestions: config.suggestions,
        }
    }

    pub fn assistant(&self) -> &WordleAssistant {
        &self.assistant
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<SessionEnd> {
        writeln!(self.output, "{}", separator("Wordle Solver"))?;
        writeln!(self.output, "Start with this word:")?;
        if let Some(starter) = self.assistant.starter() {
            writeln!(self.output, "{}", starter)?;
        }

        for round in 1..=self.rounds {
            debug!("round {} with {} candidates", round, self.assistant.remaining_count());
            if let Some(word) = self.round()? {
                return Ok(SessionEnd::Solved(word));
            }
        }

        Ok(SessionEnd::RoundsExhausted {
            candidates: self.assistant.candidates().to_vec(),
        })
    }

    /// Play one round. Returns the answer if the clues pinned it down.
    fn round(&mut self) -> Result<Option<String>> {
        writeln!(self.output, "{}", separator(""))?;
        writeln!(self.output, "Enter U to get another unique guess.")?;
        writeln!(self.output, "Otherwise, enter anything else.")?;
        let proposal = Proposal::from_choice(&self.read_line()?);
        writeln!(self.output, "{}", separator(""))?;

        let clues = self.read_clues()?;
        debug!("clues: {}", clues);

        if let Some(word) = self.assistant.apply_clues(&clues) {
            writeln!(self.output, "{}", separator("The word is"))?;
            writeln!(self.output, "{}", word)?;
            return Ok(Some(word));
        }

        match proposal {
            Proposal::Unique => self.propose_unique()?,
            Proposal::Ranked => self.propose_ranked(&clues)?,
        };
        Ok(None)
    }

    fn propose_unique(&mut self) -> Result<String> {
        let guess = self.assistant.propose_unique()?;
        writeln!(self.output, "{}", separator(""))?;
        writeln!(self.output, "Unique guess:\n{}", guess)?;
        Ok(guess)
    }

    fn propose_ranked(&mut self, clues: &Clues) -> Result<String> {
        if self.assistant.remaining_count() == 0 {
            return Err(Error::ExhaustedCandidates { offset: 0, len: 0 });
        }

        writeln!(self.output, "Calculating most common characters not guessed yet...")?;
        writeln!(self.output, "Ordering words by frequency of letters not guessed yet...")?;
        let ranked = self.assistant.rank(clues);
        let top: Vec<String> = ranked.iter().take(self.suggestions).cloned().collect();

        writeln!(self.output, "{}", separator("Most likely words to guess next"))?;
        for word in &top {
            writeln!(self.output, "{}", word)?;
        }

        write!(self.output, "Enter the word you guessed: ")?;
        self.output.flush()?;
        loop {
            let guess = self.read_line()?.trim().to_ascii_lowercase();
            if self.assistant.record_guess(&guess) {
                return Ok(guess);
            }
            writeln!(self.output, "Invalid guess. Please enter a valid word.")?;
        }
    }

    fn read_clues(&mut self) -> Result<Clues> {
        writeln!(self.output, "Enter the letters you have discovered so far:")?;
        writeln!(self.output, "First enter the green letters, ex. a___t:")?;
        let green = self.read_pattern()?;
        writeln!(self.output, "Enter the yellow letters:")?;
        let yellow = self.read_pattern()?;
        Ok(Clues { green, yellow })
    }

    fn read_pattern(&mut self) -> Result<BTreeMap<usize, char>> {
        loop {
            if let Some(pattern) = parse_pattern(&self.read_line()?) {
                return Ok(pattern);
            }
            writeln!(self.output, "Invalid input. Please enter 5 letters.")?;
        }
    }

    fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
