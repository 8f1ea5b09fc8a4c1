//! Word lists, read from a local cache file or downloaded on first use.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::is_wordle_word;

/// Retrieves the body of a word-list URL.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP GET.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetcher;

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let unavailable = |reason: String| Error::SourceUnavailable {
            url: url.to_string(),
            reason,
        };
        let response = ureq::get(url).call().map_err(|e| unavailable(e.to_string()))?;
        response.into_string().map_err(|e| unavailable(e.to_string()))
    }
}

/// A word list cached at `cache` and downloadable from `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    pub cache: PathBuf,
    pub url: String,
}

impl WordSource {
    pub fn new(cache: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            cache: cache.into(),
            url: url.into(),
        }
    }

    /// Every word the game accepts as a guess.
    pub fn valid(config: &Config) -> Self {
        Self::new(config.valid_cache(), config.valid_url.clone())
    }

    /// Words that can be the answer.
    pub fn solutions(config: &Config) -> Self {
        Self::new(config.solutions_cache(), config.solutions_url.clone())
    }

    /// Read the cached list, downloading and caching it first if the cache
    /// file does not exist.
    pub fn load<F: Fetch + ?Sized>(&self, fetcher: &F) -> Result<Vec<String>> {
        let text = match fs::read_to_string(&self.cache) {
            Ok(text) => {
                debug!("read word list from {}", self.cache.display());
                text
            }
            Err(e) if e.kind() == ErrorKind::NotFound => self.download(fetcher)?,
            Err(e) => return Err(e.into()),
        };
        Ok(parse_word_list(&text))
    }

    fn download<F: Fetch + ?Sized>(&self, fetcher: &F) -> Result<String> {
        info!("{} not found, fetching {}", self.cache.display(), self.url);
        let body = fetcher.fetch(&self.url)?;

        let mut lines: Vec<&str> = body.split('\n').collect();
        if lines.last() == Some(&"") {
            lines.pop();
        }
        let text = lines.join("\n");

        write_cache(&self.cache, &text)?;
        info!("cached {} lines to {}", lines.len(), self.cache.display());
        Ok(text)
    }
}

fn write_cache(path: &Path, text: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, text)?;
    Ok(())
}

/// One word per line. Lines are trimmed and lowercased; blank lines,
/// malformed words and repeats are dropped.
pub fn parse_word_list(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for line in text.lines() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if !is_wordle_word(word) {
            warn!("skipping malformed word list entry {:?}", word);
            continue;
        }
        let word = word.to_ascii_lowercase();
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }
    words
}
