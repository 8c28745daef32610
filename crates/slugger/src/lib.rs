//! URL slug generation.
//!
//! Converts titles and names into lowercase, ASCII, separator-delimited slugs. The pipeline:
//! - Lowercase the input (unless disabled)
//! - Apply the language's character table (`ß` → `ss`, `&` → `und`)
//! - Strip remaining diacritics through canonical decomposition
//! - Drop characters outside `[a-z0-9]`, whitespace and the separator
//! - Collapse whitespace and separator runs, trim the ends
//! - Truncate to the configured byte length
//! - Append a suffix from the configured strategy
//!
//! ```
//! use slugger::{Config, ConfigOption, Language, Slugger};
//!
//! let slugger = Slugger::new(Config::with_options([ConfigOption::Language(Language::German)]));
//! assert_eq!(slugger.slugify("Fähigkeit & Übermaß"), "faehigkeit-und-uebermass");
//! ```
//!
//! The individual stages are internal; only [`Slugger`] runs them.
//!
//! ```compile_fail
//! use slugger::Cleaner;
//! ```

#![warn(missing_docs)]

mod clean;
mod normalize;
mod replace;
mod suffix;
mod tables;

use std::borrow::Cow;

pub use slugger_config::{
    Config, ConfigError, ConfigOption, ConfigWarning, CounterProvider, Language, SuffixStrategy,
};
use tracing::debug;

use crate::{
    clean::Cleaner, normalize::strip_diacritics, replace::LanguageReplacer, suffix::Suffixer,
};

/// A configured slug pipeline.
///
/// Construction resolves the language table, cleanup rules and suffix strategy once;
/// [`Slugger::slugify`] can then be called any number of times, including from several
/// threads through a shared reference.
#[derive(Debug)]
pub struct Slugger {
    /// Configuration snapshot this pipeline was built from.
    config: Config,
    /// Character table for the configured language.
    replacer: LanguageReplacer,
    /// Disallowed-character filter and separator collapsing.
    cleaner: Cleaner,
    /// Resolved suffix strategy.
    suffixer: Suffixer,
}

impl Slugger {
    /// Builds a pipeline from `config`.
    pub fn new(config: Config) -> Self {
        if config.language == Language::Other {
            debug!("no character table for language, transliteration disabled");
        }
        let replacer = LanguageReplacer::new(config.language);
        let cleaner = Cleaner::new(&config.separator, config.lowercase);
        let suffixer = Suffixer::from_config(&config);
        debug!(
            language = %config.language,
            suffix = %config.suffix_strategy,
            max_length = config.max_length,
            "slugger ready"
        );

        Self {
            config,
            replacer,
            cleaner,
            suffixer,
        }
    }

    /// Returns the configuration this pipeline was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Converts `input` into a slug.
    ///
    /// Never fails. The separator and suffix are appended after truncation, so a suffixed
    /// slug may be longer than `max_length`; with a suffix strategy selected, even empty
    /// input yields `separator + suffix`.
    pub fn slugify(&self, input: &str) -> String {
        let text = if self.config.lowercase {
            Cow::Owned(input.to_lowercase())
        } else {
            Cow::Borrowed(input)
        };
        let text = self.replacer.replace(&text);
        let text = strip_diacritics(&text);

        let slug = self.cleaner.clean(&text);
        let mut slug = self.cleaner.truncate(slug, self.config.max_length);

        if self.config.suffix_strategy != SuffixStrategy::None {
            let suffix = self.suffixer.generate_suffix(&slug);
            slug.push_str(&self.config.separator);
            slug.push_str(&suffix);
        }

        slug
    }
}

impl Default for Slugger {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Slugifies `input` with the default configuration.
pub fn slugify(input: &str) -> String {
    Slugger::default().slugify(input)
}
