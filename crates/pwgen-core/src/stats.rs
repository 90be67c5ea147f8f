//! passphrase statistics

use std::fmt;

use crate::entropy::entropy_bits;

/// case sensitive alphanumeric symbols
const ALNUM_SYMBOLS: f64 = 62.0;
/// printable ascii symbols
const ASCII_SYMBOLS: f64 = 95.0;

#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub wordlist_size: usize,
    /// words per passphrase
    pub length: u32,
    /// passphrases generated
    pub count: usize,
    pub entropy_bits: f64,
    /// mean passphrase length in chars, rounded half to even
    pub avg_length_chars: u64,
    /// random alphanumeric password length with the same entropy
    pub equivalent_alnum_len: u64,
    /// random printable ascii password length with the same entropy
    pub equivalent_ascii_len: u64,
}

/// summarize rendered passphrases drawn from `wordlist_size` words
pub fn report<S: AsRef<str>>(wordlist_size: usize, length: u32, passphrases: &[S]) -> StatsSummary {
    let bits = entropy_bits(wordlist_size, length);

    let avg_length_chars = if passphrases.is_empty() {
        0
    } else {
        let total: usize = passphrases.iter().map(|p| p.as_ref().chars().count()).sum();
        (total as f64 / passphrases.len() as f64).round_ties_even() as u64
    };

    StatsSummary {
        wordlist_size,
        length,
        count: passphrases.len(),
        entropy_bits: bits,
        avg_length_chars,
        equivalent_alnum_len: (bits / ALNUM_SYMBOLS.log2()).ceil() as u64,
        equivalent_ascii_len: (bits / ASCII_SYMBOLS.log2()).ceil() as u64,
    }
}

impl fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "===========")?;
        writeln!(f, "Number of words in passphrase: {}", self.length)?;
        writeln!(f, "Wordlist length: {} words", self.wordlist_size)?;
        writeln!(f, "Passphrase strength (entropy): {:.1} bits", self.entropy_bits)?;
        writeln!(f)?;
        writeln!(
            f,
            "{} length: {} chars",
            if self.count > 1 { "Average passphrase" } else { "Passphrase" },
            self.avg_length_chars
        )?;
        writeln!(
            f,
            "Length of equivalent case sensitive alphanumeric password: {} chars",
            self.equivalent_alnum_len
        )?;
        write!(
            f,
            "Length of equivalent all ASCII printable characters password: {} chars",
            self.equivalent_ascii_len
        )
    }
}
