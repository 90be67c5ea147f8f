//! wordlist filtering
//!
//! raw lines become a [`Wordlist`] by running a [`FilterSpec`] over them.
//! stages run in a fixed order:
//!
//! 1. transliteration (if enabled)
//! 2. dedup, keeping the first occurrence
//! 3. minimum length
//! 4. maximum length
//! 5. pattern
//!
//! lengths count unicode code points. blank lines are ordinary words of
//! length zero, so `min_length = 1` drops them.

use std::collections::HashSet;

use regex::Regex;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::{Error, Result};

/// best-effort ascii rendering of a word
///
/// decomposes to NFD and drops every non-ascii char, so accents are
/// stripped (`café` -> `cafe`) and chars with no ascii base vanish.
pub fn transliterate(word: &str) -> String {
    word.nfd().filter(char::is_ascii).collect()
}

/// which words to keep
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub transliterate: bool,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// keep only words the regex matches somewhere
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.pattern = Some(Regex::new(pattern)?);
        Ok(self)
    }

    pub fn with_transliterate(mut self, transliterate: bool) -> Self {
        self.transliterate = transliterate;
        self
    }

    /// run every stage over `lines`, may return an empty list
    pub fn apply<I, S>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = lines.into_iter().map(Into::into).collect();
        debug!(words = words.len(), "filtering wordlist");

        if self.transliterate {
            words = words.iter().map(|word| transliterate(word)).collect();
            debug!(words = words.len(), "transliterated");
        }

        let mut seen = HashSet::with_capacity(words.len());
        words.retain(|word| seen.insert(word.clone()));
        debug!(words = words.len(), "deduplicated");

        if let Some(min) = self.min_length {
            words.retain(|word| word.chars().count() >= min);
            debug!(min, words = words.len(), "applied minimum length");
        }

        if let Some(max) = self.max_length {
            words.retain(|word| word.chars().count() <= max);
            debug!(max, words = words.len(), "applied maximum length");
        }

        if let Some(pattern) = &self.pattern {
            words.retain(|word| pattern.is_match(word));
            debug!(%pattern, words = words.len(), "applied pattern");
        }

        words
    }
}

/// non-empty pool of candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// filter raw lines into a wordlist
    pub fn build<I, S>(lines: I, spec: &FilterSpec) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_words(spec.apply(lines))
    }

    /// wrap already filtered words
    pub fn from_words(words: Vec<String>) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::EmptyWordlist);
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// always false for a built wordlist
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}
