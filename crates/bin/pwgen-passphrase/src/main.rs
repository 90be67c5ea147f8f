//! pwgen-passphrase CLI
//!
//! Generates secure random passphrases from a wordlist.
//!
//! ## Usage
//!
//! ```bash
//! # six words from the default wordlist
//! pwgen-passphrase
//!
//! # at least 80 bits, capitalized words joined by dashes, with statistics
//! pwgen-passphrase -b 80 -C -s - -t
//!
//! # five passphrases from a compressed file, words of 4-7 chars
//! pwgen-passphrase -f words.txt.gz --min 4 --max 7 -n 5
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use pwgen_core::{Generator, GeneratorConfig, GeneratorOptions, PassphraseSampler, Settings};

mod clipboard;

#[derive(Parser, Debug)]
#[command(name = "pwgen-passphrase")]
#[command(about = "generate secure random passphrase from wordlist", version)]
struct Cli {
    /// Show statistics about generated passphrase
    #[arg(short = 't', long)]
    stats: bool,

    /// Copy generated passphrase to clipboard
    #[arg(short, long)]
    clipboard: bool,

    /// Words separator (default is space)
    #[arg(short, long)]
    separator: Option<String>,

    /// Generate multiple passphrases
    #[arg(short = 'n', long, default_value_t = 1)]
    count: u32,

    /// Select built-in wordlist (default is bip0039)
    #[arg(short, long)]
    wordlist: Option<String>,

    /// Path to external wordlist file
    #[arg(short = 'f', long)]
    wordlist_file: Option<PathBuf>,

    /// Length of generated passphrase (number of words, default is 6)
    #[arg(short, long)]
    length: Option<u32>,

    /// Minimal passphrase strength (bits of entropy)
    #[arg(short, long)]
    bits: Option<f64>,

    /// Make words lowercase
    #[arg(short = 'L', long)]
    lower: bool,

    /// Make words uppercase
    #[arg(short = 'U', long)]
    upper: bool,

    /// Make words capitalized
    #[arg(short = 'C', long)]
    capitalize: bool,

    /// Limit minimum length of word
    #[arg(long = "min")]
    min_length: Option<usize>,

    /// Limit maximum length of word
    #[arg(long = "max")]
    max_length: Option<usize>,

    /// Transliterate words to ASCII
    #[arg(short = 'T', long)]
    transliterate: bool,

    /// Keep only words matching regular expression
    #[arg(short, long)]
    pattern: Option<String>,

    /// List available built-in wordlists and exit
    #[arg(long)]
    list: bool,

    /// Settings file
    #[arg(long, env = "PWGEN_PASSPHRASE_CONFIG")]
    config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            wordlist: self.wordlist.clone(),
            wordlist_file: self.wordlist_file.clone(),
            length: self.length,
            bits: self.bits,
            lower: self.lower,
            upper: self.upper,
            capitalize: self.capitalize,
            min_length: self.min_length,
            max_length: self.max_length,
            pattern: self.pattern.clone(),
            transliterate: self.transliterate,
            separator: self.separator.clone(),
            count: Some(self.count),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing, stdout is reserved for passphrases
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("pwgen_passphrase={level},pwgen_core={level}").into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::discover(cli.config.as_deref()).context("failed to load settings")?;
    let registry = settings.registry();
    debug!(?settings, dir = ?registry.dir(), "configured");

    if cli.list {
        for name in registry.names()? {
            println!("{}", name);
        }
        return Ok(());
    }

    let config = GeneratorConfig::new(cli.options(), &settings)?;
    let generator = Generator::prepare(&config, &registry)
        .with_context(|| format!("failed to prepare wordlist {}", config.source))?;

    let mut sampler = PassphraseSampler::from_os();
    let mut passphrases = Vec::with_capacity(config.count as usize);
    for _ in 0..config.count {
        let passphrase = generator.generate(&mut sampler).to_string();
        println!("{}", passphrase);
        passphrases.push(passphrase);
    }

    if cli.stats {
        println!();
        println!("{}", generator.stats(&passphrases));
    }

    if cli.clipboard {
        let text = passphrases.join(clipboard::LINE_SEPARATOR);
        clipboard::copy(&text).context("failed to copy passphrase to clipboard")?;
        info!(count = passphrases.len(), "copied to clipboard");
    }

    Ok(())
}
