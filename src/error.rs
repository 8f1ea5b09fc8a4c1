//! Errors surfaced by the assistant.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The word list was not cached and the fallback download failed.
    #[error("could not fetch word list from {url}: {reason}")]
    SourceUnavailable { url: String, reason: String },

    /// No candidate at or after `offset` qualifies as a guess.
    #[error("no candidate left to propose (searched from index {offset} of {len})")]
    ExhaustedCandidates { offset: usize, len: usize },

    #[error("input closed before the session finished")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
