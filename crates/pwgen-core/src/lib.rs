//! # pwgen-core
//!
//! secure wordlist-based passphrase generation.
//!
//! ## pipeline
//!
//! ```text
//! ┌────────────┐   ┌──────────────┐   ┌───────────────┐   ┌──────────────┐
//! │ WordSource │──▶│ FilterSpec   │──▶│ resolve_length│──▶│ Passphrase   │
//! │ registry / │   │ translit,    │   │ word count or │   │ Sampler      │
//! │ file, gz.. │   │ len, pattern │   │ min bits      │   │ (CryptoRng)  │
//! └────────────┘   └──────────────┘   └───────────────┘   └──────┬───────┘
//!                                                                │
//!                                                         ┌──────▼──────┐
//!                                                         │ stats report│
//!                                                         └─────────────┘
//! ```
//!
//! ## usage
//!
//! ```rust,no_run
//! use pwgen_core::{Generator, GeneratorConfig, GeneratorOptions, PassphraseSampler, Settings};
//!
//! let settings = Settings::default();
//! let options = GeneratorOptions { bits: Some(64.0), ..Default::default() };
//! let config = GeneratorConfig::new(options, &settings)?;
//! let generator = Generator::prepare(&config, &settings.registry())?;
//!
//! let mut sampler = PassphraseSampler::from_os();
//! println!("{}", generator.generate(&mut sampler));
//! # Ok::<(), pwgen_core::Error>(())
//! ```

pub mod config;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod sampler;
pub mod source;
pub mod stats;
pub mod wordlist;

pub use config::{GeneratorConfig, GeneratorOptions, Settings};
pub use entropy::{bits_per_word, entropy_bits, resolve_length, EntropyTarget};
pub use error::{Error, Result};
pub use generator::Generator;
pub use sampler::{Passphrase, PassphraseSampler, TextTransform};
pub use source::{Registry, WordSource};
pub use stats::{report, StatsSummary};
pub use wordlist::{FilterSpec, Wordlist};
