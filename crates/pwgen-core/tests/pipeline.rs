//! end to end tests: registry files on disk through to rendered passphrases

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use pwgen_core::source::{read_file, EMBEDDED_BIP0039};
use pwgen_core::{
    Error, Generator, GeneratorConfig, GeneratorOptions, PassphraseSampler, Registry, Settings,
    WordSource,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tempfile::TempDir;

const WORDS: &[&str] = &["apple", "banana", "cherry", "date", "elderberry", "fig", "grape", "kiwi"];

fn word_text() -> String {
    let mut text = WORDS.join("\n");
    text.push('\n');
    text
}

fn write_plain(path: &Path, text: &str) {
    fs::write(path, text).unwrap();
}

fn write_gzip(path: &Path, text: &str) {
    let file = fs::File::create(path).unwrap();
    let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

fn write_bzip2(path: &Path, text: &str) {
    let file = fs::File::create(path).unwrap();
    let mut encoder = bzip2::write::BzEncoder::new(file, bzip2::Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

fn write_xz(path: &Path, text: &str) {
    let file = fs::File::create(path).unwrap();
    let mut encoder = xz2::write::XzEncoder::new(file, 6);
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

fn write_lzma(path: &Path, text: &str) {
    let file = fs::File::create(path).unwrap();
    let options = xz2::stream::LzmaOptions::new_preset(6).unwrap();
    let stream = xz2::stream::Stream::new_lzma_encoder(&options).unwrap();
    let mut encoder = xz2::write::XzEncoder::new_stream(file, stream);
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

/// registry dir with the same list in every supported encoding
fn registry_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let text = word_text();
    write_plain(&dir.path().join("plain.txt"), &text);
    write_plain(&dir.path().join("bare"), &text);
    write_gzip(&dir.path().join("gzipped.txt.gz"), &text);
    write_bzip2(&dir.path().join("bzipped.bz2"), &text);
    write_xz(&dir.path().join("xzipped.txt.xz"), &text);
    write_lzma(&dir.path().join("lzmad.lzma"), &text);
    write_plain(&dir.path().join(".hidden.txt"), &text);
    dir
}

fn seeded() -> PassphraseSampler<ChaCha20Rng> {
    PassphraseSampler::new(ChaCha20Rng::seed_from_u64(42))
}

#[test]
fn test_registry_names() {
    let dir = registry_dir();
    let registry = Registry::new(dir.path());
    assert_eq!(
        registry.names().unwrap(),
        vec!["bare", EMBEDDED_BIP0039, "bzipped", "gzipped", "lzmad", "plain", "xzipped"]
    );
}

#[test]
fn test_every_encoding_decodes_to_same_lines() {
    let dir = registry_dir();
    let registry = Registry::new(dir.path());
    for name in ["plain", "bare", "gzipped", "bzipped", "xzipped", "lzmad"] {
        let lines = registry.load(name).unwrap();
        assert_eq!(lines, WORDS, "wordlist {}", name);
    }
}

#[test]
fn test_directory_shadows_embedded_list() {
    let dir = TempDir::new().unwrap();
    write_plain(&dir.path().join("bip0039.txt"), "one\ntwo\n");
    let registry = Registry::new(dir.path());
    assert_eq!(registry.load(EMBEDDED_BIP0039).unwrap(), vec!["one", "two"]);
}

#[test]
fn test_unknown_registry_name() {
    let dir = registry_dir();
    let registry = Registry::new(dir.path());
    assert!(matches!(registry.load("diceware"), Err(Error::NotFound(_))));
}

#[test]
fn test_crlf_and_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dos.txt");
    write_plain(&path, "alpha\r\n\r\nbravo\r\n");
    assert_eq!(read_file(&path).unwrap(), vec!["alpha", "", "bravo"]);
}

#[test]
fn test_invalid_utf8_is_decode_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9\n").unwrap();
    let err = read_file(&path).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_corrupt_gzip_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.gz");
    fs::write(&path, b"definitely not gzip").unwrap();
    let err = read_file(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_generate_from_file() {
    let dir = TempDir::new().unwrap();
    let path: PathBuf = dir.path().join("fruit.txt");
    write_plain(&path, "apple\nbanana\ncherry\ndate\n");

    let options = GeneratorOptions {
        wordlist_file: Some(path),
        length: Some(3),
        ..Default::default()
    };
    let config = GeneratorConfig::new(options, &Settings::default()).unwrap();
    let generator = Generator::prepare(&config, &Registry::embedded()).unwrap();

    let rendered = generator.generate(&mut seeded()).to_string();
    let tokens: Vec<&str> = rendered.split(' ').collect();
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|t| ["apple", "banana", "cherry", "date"].contains(t)));
}

#[test]
fn test_generate_with_bits_and_filters() {
    let dir = registry_dir();
    let options = GeneratorOptions {
        wordlist: Some("gzipped".into()),
        // apple banana cherry grape: 4 words, 2 bits each
        min_length: Some(5),
        max_length: Some(6),
        bits: Some(20.0),
        upper: true,
        separator: Some("-".into()),
        ..Default::default()
    };
    let config = GeneratorConfig::new(options, &Settings::default()).unwrap();
    let generator = Generator::prepare(&config, &Registry::new(dir.path())).unwrap();

    assert_eq!(generator.wordlist().words(), &["apple", "banana", "cherry", "grape"]);
    assert_eq!(generator.length(), 10);
    assert_eq!(generator.entropy_bits(), 20.0);

    let phrase = generator.generate(&mut seeded());
    let rendered = phrase.to_string();
    assert_eq!(rendered.split('-').count(), 10);
    assert!(rendered.split('-').all(|t| ["APPLE", "BANANA", "CHERRY", "GRAPE"].contains(&t)));

    let stats = generator.stats(&[rendered]);
    assert_eq!(stats.length, 10);
    assert_eq!(stats.wordlist_size, 4);
}

#[test]
fn test_filters_leaving_nothing_fail_before_sampling() {
    let options = GeneratorOptions {
        min_length: Some(20),
        ..Default::default()
    };
    let config = GeneratorConfig::new(options, &Settings::default()).unwrap();
    let err = Generator::prepare(&config, &Registry::embedded()).unwrap_err();
    assert!(matches!(err, Error::EmptyWordlist));
}

#[test]
fn test_bits_on_single_word_list() {
    let options = GeneratorOptions {
        pattern: Some("^zoo$".into()),
        bits: Some(40.0),
        ..Default::default()
    };
    let config = GeneratorConfig::new(options, &Settings::default()).unwrap();
    let err = Generator::prepare(&config, &Registry::embedded()).unwrap_err();
    assert!(matches!(err, Error::InsufficientWordlist(1)));
}

#[test]
fn test_default_run_uses_embedded_list() {
    let config = GeneratorConfig::new(GeneratorOptions::default(), &Settings::default()).unwrap();
    assert_eq!(config.source, WordSource::Builtin(EMBEDDED_BIP0039.into()));

    let generator = Generator::prepare(&config, &Registry::embedded()).unwrap();
    assert_eq!(generator.wordlist().len(), 2048);
    assert_eq!(generator.length(), 6);
    assert_eq!(generator.entropy_bits(), 66.0);

    let mut sampler = PassphraseSampler::from_os();
    let a = generator.generate(&mut sampler);
    let b = generator.generate(&mut sampler);
    assert_eq!(a.len(), 6);
    // 2048^6 possibilities
    assert_ne!(a, b);
}

#[test]
fn test_settings_file_points_at_registry() {
    let dir = registry_dir();
    let settings_path = dir.path().join("config.toml");
    write_plain(
        &settings_path,
        &format!(
            "wordlist = \"xzipped\"\nwordlists_dir = {:?}\nseparator = \"_\"\nlength = 2\n",
            dir.path().display().to_string()
        ),
    );

    let settings = Settings::discover(Some(&settings_path)).unwrap();
    assert_eq!(settings.wordlist, "xzipped");
    assert_eq!(settings.wordlists_dir.as_deref(), Some(dir.path()));

    let config = GeneratorConfig::new(GeneratorOptions::default(), &settings).unwrap();
    let generator = Generator::prepare(&config, &Registry::new(dir.path())).unwrap();
    let rendered = generator.generate(&mut seeded()).to_string();
    assert_eq!(rendered.split('_').count(), 2);
}
