//! error types for pwgen-core

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    // === wordlist source errors ===
    #[error("wordlist not found: {0}")]
    NotFound(String),

    #[error("failed to read wordlist {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("wordlist {} is not valid utf-8 text", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    // === filtering errors ===
    #[error("no words left in wordlist after filtering")]
    EmptyWordlist,

    #[error("invalid word pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    // === sizing errors ===
    #[error("invalid passphrase length: {0} words (must be at least 1)")]
    InvalidLength(u32),

    #[error("wordlist too small for entropy target: {0} words (need at least 2)")]
    InsufficientWordlist(usize),

    #[error("invalid entropy target: {0} bits")]
    InvalidBits(f64),

    // === configuration errors ===
    #[error("invalid passphrase count: {0} (must be at least 1)")]
    InvalidCount(u32),

    #[error("conflicting options: {0} and {1} cannot be used together")]
    ConflictingOptions(&'static str, &'static str),

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
