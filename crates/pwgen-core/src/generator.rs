//! generation pipeline
//!
//! source -> filter -> sizing happen once in [`Generator::prepare`];
//! passphrases are then drawn on demand.

use rand::{CryptoRng, RngCore};
use tracing::info;

use crate::config::GeneratorConfig;
use crate::entropy::{entropy_bits, resolve_length};
use crate::sampler::{Passphrase, PassphraseSampler, TextTransform};
use crate::source::Registry;
use crate::stats::{report, StatsSummary};
use crate::wordlist::Wordlist;
use crate::Result;

/// a loaded, filtered and sized wordlist ready for sampling
#[derive(Debug, Clone)]
pub struct Generator {
    wordlist: Wordlist,
    length: u32,
    separator: String,
    transform: TextTransform,
}

impl Generator {
    /// read, filter and size the wordlist described by `config`
    pub fn prepare(config: &GeneratorConfig, registry: &Registry) -> Result<Self> {
        let lines = config.source.read_lines(registry)?;
        let wordlist = Wordlist::build(lines, &config.filter)?;
        let length = resolve_length(wordlist.len(), config.target)?;

        info!(
            source = %config.source,
            words = wordlist.len(),
            length,
            bits = entropy_bits(wordlist.len(), length),
            "wordlist ready"
        );

        Ok(Self::new(
            wordlist,
            length,
            config.separator.clone(),
            config.transform,
        ))
    }

    pub fn new(wordlist: Wordlist, length: u32, separator: String, transform: TextTransform) -> Self {
        Self {
            wordlist,
            length,
            separator,
            transform,
        }
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// words per passphrase
    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn entropy_bits(&self) -> f64 {
        entropy_bits(self.wordlist.len(), self.length)
    }

    /// draw one passphrase
    pub fn generate<R: RngCore + CryptoRng>(&self, sampler: &mut PassphraseSampler<R>) -> Passphrase {
        sampler.sample(&self.wordlist, self.length, &self.separator, self.transform)
    }

    /// statistics over rendered passphrases from this generator
    pub fn stats<S: AsRef<str>>(&self, passphrases: &[S]) -> StatsSummary {
        report(self.wordlist.len(), self.length, passphrases)
    }
}
