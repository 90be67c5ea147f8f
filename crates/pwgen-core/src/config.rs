//! configuration
//!
//! two layers:
//!
//! - [`Settings`]: optional toml file with defaults, stored at
//!   `~/.config/pwgen-passphrase/config.toml` on linux
//! - [`GeneratorConfig`]: one validated run, built from [`GeneratorOptions`]
//!   (usually the command line) on top of the settings
//!
//! ```toml
//! wordlist = "diceware"
//! wordlists_dir = "/usr/share/pwgen-passphrase/wordlists"
//! separator = "-"
//! length = 7
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entropy::EntropyTarget;
use crate::sampler::TextTransform;
use crate::source::{Registry, WordSource, EMBEDDED_BIP0039};
use crate::wordlist::FilterSpec;
use crate::{Error, Result};

/// overrides the wordlist directory from settings
pub const WORDLISTS_DIR_ENV: &str = "PWGEN_WORDLISTS_DIR";

const APP_DIR: &str = "pwgen-passphrase";
const CONFIG_FILE_NAME: &str = "config.toml";
const WORDLISTS_DIR_NAME: &str = "wordlists";

/// defaults read from the settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// wordlist used when none is given
    pub wordlist: String,
    /// directory of named wordlists
    pub wordlists_dir: Option<PathBuf>,
    pub separator: String,
    /// words per passphrase when neither length nor bits is given
    pub length: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wordlist: EMBEDDED_BIP0039.to_string(),
            wordlists_dir: None,
            separator: " ".to_string(),
            length: 6,
        }
    }
}

impl Settings {
    /// platform config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE_NAME))
    }

    /// parse a settings file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// load `path` if given, otherwise the default file if it exists
    ///
    /// an explicitly given file must exist, the default one may not.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            debug!(path = %path.display(), "loading settings");
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading settings");
                Self::load(&path)
            }
            _ => {
                debug!("no settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// wordlist directory: env var, then settings, then platform data dir
    pub fn wordlists_dir(&self) -> Option<PathBuf> {
        std::env::var_os(WORDLISTS_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.wordlists_dir.clone())
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR).join(WORDLISTS_DIR_NAME)))
    }

    pub fn registry(&self) -> Registry {
        match self.wordlists_dir() {
            Some(dir) => Registry::new(dir),
            None => Registry::embedded(),
        }
    }
}

/// raw, unvalidated options for one run
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    pub wordlist: Option<String>,
    pub wordlist_file: Option<PathBuf>,
    pub length: Option<u32>,
    pub bits: Option<f64>,
    pub lower: bool,
    pub upper: bool,
    pub capitalize: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<String>,
    pub transliterate: bool,
    pub separator: Option<String>,
    pub count: Option<u32>,
}

/// validated configuration for one run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub source: WordSource,
    pub filter: FilterSpec,
    pub target: EntropyTarget,
    pub transform: TextTransform,
    pub separator: String,
    pub count: u32,
}

impl GeneratorConfig {
    /// check option exclusivity and fill gaps from `settings`
    pub fn new(options: GeneratorOptions, settings: &Settings) -> Result<Self> {
        let source = match (options.wordlist, options.wordlist_file) {
            (Some(_), Some(_)) => {
                return Err(Error::ConflictingOptions("--wordlist", "--wordlist-file"))
            }
            (Some(name), None) => WordSource::Builtin(name),
            (None, Some(path)) => WordSource::File(path),
            (None, None) => WordSource::Builtin(settings.wordlist.clone()),
        };

        let target = match (options.length, options.bits) {
            (Some(_), Some(_)) => return Err(Error::ConflictingOptions("--length", "--bits")),
            (Some(length), None) => EntropyTarget::WordCount(length),
            (None, Some(bits)) => EntropyTarget::MinBits(bits),
            (None, None) => EntropyTarget::WordCount(settings.length),
        };

        let transform = match (options.lower, options.upper, options.capitalize) {
            (false, false, false) => TextTransform::None,
            (true, false, false) => TextTransform::Lower,
            (false, true, false) => TextTransform::Upper,
            (false, false, true) => TextTransform::Capitalize,
            (true, true, _) => return Err(Error::ConflictingOptions("--lower", "--upper")),
            (true, _, true) => return Err(Error::ConflictingOptions("--lower", "--capitalize")),
            (_, true, true) => return Err(Error::ConflictingOptions("--upper", "--capitalize")),
        };

        let count = options.count.unwrap_or(1);
        if count == 0 {
            return Err(Error::InvalidCount(count));
        }

        let mut filter = FilterSpec::new().with_transliterate(options.transliterate);
        if let Some(min) = options.min_length {
            filter = filter.with_min_length(min);
        }
        if let Some(max) = options.max_length {
            filter = filter.with_max_length(max);
        }
        if let Some(pattern) = options.pattern.as_deref() {
            filter = filter.with_pattern(pattern)?;
        }

        Ok(Self {
            source,
            filter,
            target,
            transform,
            separator: options.separator.unwrap_or_else(|| settings.separator.clone()),
            count,
        })
    }
}
