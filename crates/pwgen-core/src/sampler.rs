//! passphrase sampling
//!
//! words are drawn independently and uniformly, with replacement, from a
//! [`Wordlist`]. the random source is owned by the [`PassphraseSampler`]
//! and must be a [`CryptoRng`]; predictable generators would let an
//! attacker recover the passphrase from the generator state.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

use crate::Wordlist;

/// per-word case transform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextTransform {
    #[default]
    None,
    Lower,
    Upper,
    /// first char title case, rest lower case
    Capitalize,
}

impl TextTransform {
    pub fn apply(self, word: &str) -> String {
        match self {
            Self::None => word.to_string(),
            Self::Lower => word.to_lowercase(),
            Self::Upper => word.to_uppercase(),
            Self::Capitalize => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        let mut out = titlecase(first);
                        out.push_str(&chars.as_str().to_lowercase());
                        out
                    }
                    None => String::new(),
                }
            }
        }
    }
}

/// title case of a single char
///
/// std only has upper case. the latin digraphs, sharp s and the latin
/// ligatures are the cases where the two differ.
fn titlecase(c: char) -> String {
    let title = match c {
        '\u{01C4}'..='\u{01C6}' => "\u{01C5}",
        '\u{01C7}'..='\u{01C9}' => "\u{01C8}",
        '\u{01CA}'..='\u{01CC}' => "\u{01CB}",
        '\u{01F1}'..='\u{01F3}' => "\u{01F2}",
        'ß' => "Ss",
        '\u{FB00}' => "Ff",
        '\u{FB01}' => "Fi",
        '\u{FB02}' => "Fl",
        '\u{FB03}' => "Ffi",
        '\u{FB04}' => "Ffl",
        '\u{FB05}' | '\u{FB06}' => "St",
        _ => return c.to_uppercase().collect(),
    };
    title.to_string()
}

/// chosen words plus how to render them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passphrase {
    words: Vec<String>,
    separator: String,
    transform: TextTransform,
}

impl Passphrase {
    pub fn new(words: Vec<String>, separator: impl Into<String>, transform: TextTransform) -> Self {
        Self {
            words,
            separator: separator.into(),
            transform,
        }
    }

    /// the drawn words, before the transform
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn transform(&self) -> TextTransform {
        self.transform
    }
}

impl fmt::Display for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(&self.separator)?;
            }
            f.write_str(&self.transform.apply(word))?;
        }
        Ok(())
    }
}

/// draws passphrases from a wordlist
pub struct PassphraseSampler<R> {
    rng: R,
}

impl PassphraseSampler<OsRng> {
    /// sampler backed by the operating system's random source
    pub fn from_os() -> Self {
        Self::new(OsRng)
    }
}

impl<R: RngCore + CryptoRng> PassphraseSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// draw `length` words with replacement
    pub fn sample(
        &mut self,
        wordlist: &Wordlist,
        length: u32,
        separator: &str,
        transform: TextTransform,
    ) -> Passphrase {
        let words = (0..length)
            .map(|_| {
                let index = self.rng.gen_range(0..wordlist.len());
                wordlist.words()[index].clone()
            })
            .collect();
        Passphrase::new(words, separator, transform)
    }

    /// `count` independent passphrases
    pub fn sample_many(
        &mut self,
        wordlist: &Wordlist,
        length: u32,
        separator: &str,
        transform: TextTransform,
        count: u32,
    ) -> Vec<Passphrase> {
        (0..count)
            .map(|_| self.sample(wordlist, length, separator, transform))
            .collect()
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}
