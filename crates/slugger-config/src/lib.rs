//! Configuration for the slugger pipeline.
//!
//! A [`Config`] is an immutable snapshot built once from defaults plus zero or more
//! [`ConfigOption`]s, or loaded from a `slugger.toml` file. The pipeline takes its own copy
//! and never mutates it.

#![warn(missing_docs)]

mod error;
mod options;
mod parse;
mod templates;
mod validate;

use std::{fmt, path::Path, sync::Arc};

pub use error::ConfigError;
pub use options::ConfigOption;
pub use parse::{
    RawConfig, RawSlugSettings, RawSuffixSettings, parse_config_file, parse_config_str,
};
use serde::Deserialize;
pub use templates::config_template;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default separator placed between slug tokens.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Default maximum slug length in bytes.
pub const DEFAULT_MAX_LENGTH: usize = 240;

/// Default number of letters produced by the hash suffix strategy.
pub const DEFAULT_SUFFIX_LENGTH: usize = 6;

/// Language whose character table is applied before diacritic stripping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// `@` and `&` spelled out in English.
    #[default]
    English,
    /// Umlauts and eszett expanded, `&` as "und".
    German,
    /// Accented vowels and ñ flattened, `&` as "y".
    Spanish,
    /// Any selector without a table; text passes through unchanged.
    Other,
}

impl Language {
    /// Resolves a language name or ISO 639-1 code, case-insensitively.
    ///
    /// Unknown names resolve to [`Language::Other`] rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Self::English,
            "german" | "deutsch" | "de" => Self::German,
            "spanish" | "espanol" | "español" | "es" => Self::Spanish,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::English => "english",
            Self::German => "german",
            Self::Spanish => "spanish",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Policy for appending a disambiguating token to a slug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuffixStrategy {
    /// No suffix.
    #[default]
    None,
    /// Decimal counter, internal or supplied by a [`CounterProvider`].
    Numbered,
    /// Current Unix time in base 36.
    #[serde(alias = "timestamp")]
    TimestampBased,
    /// Letters derived from a DJB2 hash of the slug.
    #[serde(alias = "hash")]
    HashBased,
}

impl fmt::Display for SuffixStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Numbered => "numbered",
            Self::TimestampBased => "timestamp-based",
            Self::HashBased => "hash-based",
        };
        f.write_str(name)
    }
}

/// Caller-supplied source of counter values for the numbered suffix strategy.
///
/// The provider is called once per slug and its value is used verbatim. Uniqueness and
/// persistence (for example a database sequence) are the caller's responsibility.
#[derive(Clone)]
pub struct CounterProvider(Arc<dyn Fn() -> i64 + Send + Sync>);

impl CounterProvider {
    /// Wraps a function returning the next counter value.
    pub fn new(provider: impl Fn() -> i64 + Send + Sync + 'static) -> Self {
        Self(Arc::new(provider))
    }

    /// Fetches the next counter value.
    pub fn next_value(&self) -> i64 {
        (self.0)()
    }
}

impl fmt::Debug for CounterProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CounterProvider(..)")
    }
}

/// Resolved slug configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lowercase input before any other step.
    pub lowercase: bool,
    /// Token separator, used verbatim.
    pub separator: String,
    /// Maximum slug length in bytes before suffixing; 0 disables truncation.
    pub max_length: usize,
    /// Character table selector.
    pub language: Language,
    /// Suffix policy.
    pub suffix_strategy: SuffixStrategy,
    /// Letter count for the hash strategy.
    pub suffix_length: usize,
    /// IANA timezone for the timestamp strategy; empty or unknown means UTC.
    pub timestamp_timezone: String,
    /// Counter source for the numbered strategy.
    pub counter_provider: Option<CounterProvider>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lowercase: true,
            separator: DEFAULT_SEPARATOR.to_string(),
            max_length: DEFAULT_MAX_LENGTH,
            language: Language::English,
            suffix_strategy: SuffixStrategy::None,
            suffix_length: DEFAULT_SUFFIX_LENGTH,
            timestamp_timezone: String::new(),
            counter_provider: None,
        }
    }
}

impl Config {
    /// Builds a configuration from defaults and the given options, applied in order.
    pub fn with_options(options: impl IntoIterator<Item = ConfigOption>) -> Self {
        let mut config = Self::default();
        for option in options {
            option.apply(&mut config);
        }
        config
    }

    /// Loads a `slugger.toml` file and resolves it against the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Ok(parse_config_file(path)?.into_config())
    }

    /// Checks the configuration for settings that degrade silently at slug time.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }
}
