//! passphrase sizing
//!
//! each word drawn uniformly from a list of `n` words adds `log2(n)` bits.
//! a bit target is turned into a word count by dividing and rounding up.

use tracing::debug;

use crate::{Error, Result};

/// decimal places kept before rounding a word count up, so an exactly
/// reachable target (20 bits at 2 bits/word) gives 10 and not 11
const ROUNDING_DIGITS: i32 = 9;

/// how long the passphrase should be
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntropyTarget {
    /// fixed number of words
    WordCount(u32),
    /// smallest number of words reaching at least this many bits
    MinBits(f64),
}

impl Default for EntropyTarget {
    fn default() -> Self {
        Self::WordCount(6)
    }
}

/// bits contributed by one word drawn from `wordlist_size` words
pub fn bits_per_word(wordlist_size: usize) -> f64 {
    (wordlist_size as f64).log2()
}

/// total entropy of `length` words drawn from `wordlist_size` words
pub fn entropy_bits(wordlist_size: usize, length: u32) -> f64 {
    bits_per_word(wordlist_size) * f64::from(length)
}

/// `ceil(x)` after rounding away float noise below 1e-9
fn ceil_rounded(x: f64) -> f64 {
    let scale = 10f64.powi(ROUNDING_DIGITS);
    ((x * scale).round() / scale).ceil()
}

/// number of words to draw for `target`
pub fn resolve_length(wordlist_size: usize, target: EntropyTarget) -> Result<u32> {
    let length = match target {
        EntropyTarget::WordCount(n) => n,
        EntropyTarget::MinBits(bits) => {
            if !bits.is_finite() {
                return Err(Error::InvalidBits(bits));
            }
            if wordlist_size < 2 {
                return Err(Error::InsufficientWordlist(wordlist_size));
            }
            let words = ceil_rounded(bits / bits_per_word(wordlist_size));
            if words > f64::from(u32::MAX) {
                return Err(Error::InvalidBits(bits));
            }
            // negative targets clamp to zero and are rejected below
            words.max(0.0) as u32
        }
    };

    if length == 0 {
        return Err(Error::InvalidLength(length));
    }

    debug!(wordlist_size, ?target, length, "resolved passphrase length");
    Ok(length)
}
