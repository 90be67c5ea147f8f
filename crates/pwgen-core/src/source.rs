//! wordlist sources
//!
//! a wordlist is either a named entry in a [`Registry`] or an external file.
//! registry entries are plain files in a directory, one word per line,
//! optionally compressed. the decoder is picked from the file extension:
//!
//! - `.gz` gzip
//! - `.bz2` bzip2
//! - `.xz` xz container
//! - `.lzma` legacy lzma-alone container
//! - anything else is read as plain text
//!
//! the registry also carries the BIP-0039 english list as an embedded
//! fallback, so generation works without any data files installed.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use bzip2::read::BzDecoder;
use flate2::read::MultiGzDecoder;
use regex::Regex;
use tracing::{debug, trace};
use xz2::read::XzDecoder;
use xz2::stream::Stream;

use crate::{Error, Result};

/// name of the embedded BIP-0039 english wordlist
pub const EMBEDDED_BIP0039: &str = "bip0039";

/// `name[.txt][.(gz|bz2|xz|lzma)]`
static FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+?)(?:\.txt)?(?:\.(?:gz|bz2|xz|lzma))?$")
        .expect("wordlist file name pattern is valid")
});

/// derive the registry name of a wordlist file from its file name
///
/// strips a compression suffix and then an optional `.txt`, so
/// `diceware.txt.gz`, `diceware.gz` and `diceware` all map to `diceware`.
pub fn display_name(file_name: &str) -> Option<String> {
    FILE_NAME
        .captures(file_name)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str().to_string())
}

/// compression of a wordlist file, selected by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Bzip2,
    Xz,
    Lzma,
}

impl Compression {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("gz") => Self::Gzip,
            Some("bz2") => Self::Bzip2,
            Some("xz") => Self::Xz,
            Some("lzma") => Self::Lzma,
            _ => Self::None,
        }
    }

    /// wrap a raw reader in the matching decoder
    pub fn decoder<'a, R: Read + 'a>(self, reader: R) -> io::Result<Box<dyn Read + 'a>> {
        Ok(match self {
            Self::None => Box::new(reader),
            Self::Gzip => Box::new(MultiGzDecoder::new(reader)),
            Self::Bzip2 => Box::new(BzDecoder::new(reader)),
            Self::Xz => Box::new(XzDecoder::new(reader)),
            Self::Lzma => {
                let stream = Stream::new_lzma_decoder(u64::MAX)
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
                Box::new(XzDecoder::new_stream(reader, stream))
            }
        })
    }
}

/// split text into lines
///
/// `\r\n` is treated like `\n` and a trailing newline does not add an
/// empty line. blank lines in the middle are kept.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}

/// read a wordlist file, decompressing it if needed
pub fn read_file(path: &Path) -> Result<Vec<String>> {
    let compression = Compression::from_path(path);
    debug!(path = %path.display(), ?compression, "reading wordlist file");

    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut bytes = Vec::new();
    compression
        .decoder(BufReader::new(file))
        .and_then(|mut reader| reader.read_to_end(&mut bytes))
        .map_err(|e| Error::io(path, e))?;

    let text = String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = split_lines(&text);
    debug!(lines = lines.len(), "read wordlist file");
    Ok(lines)
}

fn embedded_bip0039() -> Vec<String> {
    bip39::Language::English
        .word_list()
        .iter()
        .map(|word| word.to_string())
        .collect()
}

/// named wordlists: a directory of files plus the embedded list
///
/// a file whose display name collides with an embedded list shadows it.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    dir: Option<PathBuf>,
}

impl Registry {
    /// registry backed by a directory of wordlist files
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// registry with only the embedded lists
    pub fn embedded() -> Self {
        Self { dir: None }
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// (name, path) of every wordlist file, sorted by file name
    fn entries(&self) -> Result<Vec<(String, PathBuf)>> {
        let Some(dir) = self.dir.as_deref() else {
            return Ok(Vec::new());
        };
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "wordlist directory does not exist");
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if file_name.starts_with('.') {
                continue;
            }
            if let Some(name) = display_name(file_name) {
                trace!(%name, path = %path.display(), "found wordlist");
                entries.push((name, path));
            }
        }
        entries.sort_by(|a, b| a.1.cmp(&b.1));
        Ok(entries)
    }

    /// names of all available wordlists, sorted
    pub fn names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.entries()?.into_iter().map(|(name, _)| name).collect();
        names.push(EMBEDDED_BIP0039.to_string());
        names.sort();
        names.dedup();
        Ok(names)
    }

    /// path of the file backing `name`, if the directory has one
    pub fn find(&self, name: &str) -> Result<Option<PathBuf>> {
        Ok(self
            .entries()?
            .into_iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, path)| path))
    }

    /// load the lines of a named wordlist
    pub fn load(&self, name: &str) -> Result<Vec<String>> {
        if let Some(path) = self.find(name)? {
            return read_file(&path);
        }
        if name == EMBEDDED_BIP0039 {
            debug!(%name, "using embedded wordlist");
            return Ok(embedded_bip0039());
        }
        Err(Error::NotFound(name.to_string()))
    }
}

/// where the raw wordlist comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// a named wordlist in the registry
    Builtin(String),
    /// an external file
    File(PathBuf),
}

impl WordSource {
    pub fn read_lines(&self, registry: &Registry) -> Result<Vec<String>> {
        match self {
            Self::Builtin(name) => registry.load(name),
            Self::File(path) => read_file(path),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(name) => write!(f, "{}", name),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
