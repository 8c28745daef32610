//! Configuration file parsing.
//!
//! Parses `slugger.toml` files into intermediate `RawConfig` structures whose fields are
//! all optional, then overlays the present values onto the defaults.

use std::{fs, path::Path};

use serde::Deserialize;
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::{Config, ConfigError, Language, SuffixStrategy};

/// Raw configuration as parsed directly from a TOML file.
///
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Slug shape settings.
    pub slug: Option<RawSlugSettings>,
    /// Suffix settings.
    pub suffix: Option<RawSuffixSettings>,
}

/// Raw `[slug]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSlugSettings {
    /// Lowercase input before cleanup.
    pub lowercase: Option<bool>,
    /// Token separator.
    pub separator: Option<String>,
    /// Maximum pre-suffix length in bytes (0 = unbounded).
    pub max_length: Option<usize>,
    /// Language name or code; unknown names fall back to no transliteration.
    pub language: Option<String>,
}

/// Raw `[suffix]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSuffixSettings {
    /// Suffix strategy.
    pub strategy: Option<SuffixStrategy>,
    /// Letter count for the hash strategy.
    pub length: Option<usize>,
    /// IANA timezone for the timestamp strategy.
    pub timezone: Option<String>,
}

impl RawConfig {
    /// Overlays every value present in this raw config onto `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref slug) = self.slug {
            apply_raw_slug(config, slug);
        }
        if let Some(ref suffix) = self.suffix {
            apply_raw_suffix(config, suffix);
        }
    }

    /// Resolves this raw config against the defaults.
    pub fn into_config(self) -> Config {
        let mut config = Config::default();
        self.apply(&mut config);
        config
    }
}

/// Applies raw slug settings to result, overwriting any present values.
fn apply_raw_slug(result: &mut Config, raw: &RawSlugSettings) {
    if let Some(v) = raw.lowercase {
        result.lowercase = v;
    }
    if let Some(ref v) = raw.separator {
        result.separator.clone_from(v);
    }
    if let Some(v) = raw.max_length {
        result.max_length = v;
    }
    if let Some(ref v) = raw.language {
        result.language = Language::from_name(v);
    }
}

/// Applies raw suffix settings to result, overwriting any present values.
fn apply_raw_suffix(result: &mut Config, raw: &RawSuffixSettings) {
    if let Some(v) = raw.strategy {
        result.suffix_strategy = v;
    }
    if let Some(v) = raw.length {
        result.suffix_length = v;
    }
    if let Some(ref v) = raw.timezone {
        result.timestamp_timezone.clone_from(v);
    }
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
///
/// Useful for validating template content (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}
