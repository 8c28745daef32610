//! Configuration validation.
//!
//! The pipeline degrades silently on questionable settings. Validation lets callers find
//! those settings up front without changing what the pipeline does with them.

use std::fmt;

use chrono_tz::Tz;

use crate::{Config, Language, SuffixStrategy};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The separator is empty, so tokens run together.
    EmptySeparator,
    /// The separator contains ASCII letters or digits, which are also slug content and get
    /// trimmed from the slug's ends.
    SeparatorOverlapsContent {
        /// The configured separator.
        separator: String,
    },
    /// No character table exists for the language; text is not transliterated.
    UnsupportedLanguage,
    /// The timestamp timezone is not a known IANA identifier; UTC is used instead.
    UnknownTimezone {
        /// The configured timezone.
        timezone: String,
    },
    /// The hash strategy is selected with a length of zero, producing an empty suffix.
    ZeroHashLength,
    /// A counter provider is set but the numbered strategy is not selected.
    UnusedCounterProvider {
        /// The strategy actually selected.
        strategy: SuffixStrategy,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySeparator => write!(f, "separator is empty"),
            Self::SeparatorOverlapsContent { separator } => {
                write!(
                    f,
                    "separator '{separator}' contains letters or digits that are trimmed from slug ends"
                )
            }
            Self::UnsupportedLanguage => {
                write!(f, "language has no character table; text is not transliterated")
            }
            Self::UnknownTimezone { timezone } => {
                write!(f, "unknown timezone '{timezone}', UTC is used instead")
            }
            Self::ZeroHashLength => write!(f, "hash suffix length is 0; suffix will be empty"),
            Self::UnusedCounterProvider { strategy } => {
                write!(f, "counter provider is ignored by the {strategy} suffix strategy")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.separator.is_empty() {
        warnings.push(ConfigWarning::EmptySeparator);
    } else if config.separator.chars().any(|c| c.is_ascii_alphanumeric()) {
        warnings.push(ConfigWarning::SeparatorOverlapsContent {
            separator: config.separator.clone(),
        });
    }

    if config.language == Language::Other {
        warnings.push(ConfigWarning::UnsupportedLanguage);
    }

    match config.suffix_strategy {
        SuffixStrategy::TimestampBased => {
            let timezone = &config.timestamp_timezone;
            if !timezone.is_empty() && timezone.parse::<Tz>().is_err() {
                warnings.push(ConfigWarning::UnknownTimezone {
                    timezone: timezone.clone(),
                });
            }
        }
        SuffixStrategy::HashBased if config.suffix_length == 0 => {
            warnings.push(ConfigWarning::ZeroHashLength);
        }
        _ => {}
    }

    if config.counter_provider.is_some() && config.suffix_strategy != SuffixStrategy::Numbered {
        warnings.push(ConfigWarning::UnusedCounterProvider {
            strategy: config.suffix_strategy,
        });
    }

    warnings
}
