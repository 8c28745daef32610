//! Option accumulation for [`Config`].

use crate::{Config, CounterProvider, Language, SuffixStrategy};

/// A single override applied on top of the default configuration.
///
/// Options apply in order; a later option wins over an earlier one touching the same
/// field. The strategy-specific options also select their strategy.
#[derive(Debug, Clone)]
pub enum ConfigOption {
    /// Keep the input's case.
    WithoutLowercase,
    /// Use a different separator.
    Separator(String),
    /// Bound the pre-suffix slug length in bytes; 0 disables truncation.
    MaxLength(usize),
    /// Select the character table.
    Language(Language),
    /// Select a suffix strategy without touching its parameters.
    SuffixStrategy(SuffixStrategy),
    /// Select the hash strategy with the given letter count.
    HashSuffixLength(usize),
    /// Select the timestamp strategy with the given IANA timezone.
    TimestampTimezone(String),
    /// Select the numbered strategy backed by an external counter.
    NumberedCounterProvider(CounterProvider),
    /// Disable suffixing.
    NoSuffix,
}

impl ConfigOption {
    /// Applies this option to `config`.
    pub fn apply(self, config: &mut Config) {
        match self {
            Self::WithoutLowercase => config.lowercase = false,
            Self::Separator(separator) => config.separator = separator,
            Self::MaxLength(max_length) => config.max_length = max_length,
            Self::Language(language) => config.language = language,
            Self::SuffixStrategy(strategy) => config.suffix_strategy = strategy,
            Self::HashSuffixLength(length) => {
                config.suffix_strategy = SuffixStrategy::HashBased;
                config.suffix_length = length;
            }
            Self::TimestampTimezone(timezone) => {
                config.suffix_strategy = SuffixStrategy::TimestampBased;
                config.timestamp_timezone = timezone;
            }
            Self::NumberedCounterProvider(provider) => {
                config.suffix_strategy = SuffixStrategy::Numbered;
                config.counter_provider = Some(provider);
            }
            Self::NoSuffix => config.suffix_strategy = SuffixStrategy::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_options_is_default() {
        let config = Config::with_options([]);
        assert!(config.lowercase);
        assert_eq!(config.separator, "-");
        assert_eq!(config.max_length, 240);
    }

    #[test]
    fn test_separator_and_max_length() {
        let config = Config::with_options([
            ConfigOption::Separator("_".into()),
            ConfigOption::MaxLength(10),
        ]);
        assert!(config.lowercase);
        assert_eq!(config.separator, "_");
        assert_eq!(config.max_length, 10);
    }

    #[test]
    fn test_without_lowercase() {
        let config = Config::with_options([ConfigOption::WithoutLowercase]);
        assert!(!config.lowercase);
        assert_eq!(config.separator, "-");
        assert_eq!(config.max_length, 240);
    }

    #[test]
    fn test_hash_length_selects_hash_strategy() {
        let config = Config::with_options([ConfigOption::HashSuffixLength(4)]);
        assert_eq!(config.suffix_strategy, SuffixStrategy::HashBased);
        assert_eq!(config.suffix_length, 4);
    }

    #[test]
    fn test_timezone_selects_timestamp_strategy() {
        let config = Config::with_options([ConfigOption::TimestampTimezone(
            "Europe/Berlin".into(),
        )]);
        assert_eq!(config.suffix_strategy, SuffixStrategy::TimestampBased);
        assert_eq!(config.timestamp_timezone, "Europe/Berlin");
    }

    #[test]
    fn test_counter_provider_selects_numbered_strategy() {
        let config = Config::with_options([ConfigOption::NumberedCounterProvider(
            CounterProvider::new(|| 7),
        )]);
        assert_eq!(config.suffix_strategy, SuffixStrategy::Numbered);
        assert_eq!(config.counter_provider.map(|p| p.next_value()), Some(7));
    }

    #[test]
    fn test_later_option_wins() {
        let config = Config::with_options([
            ConfigOption::HashSuffixLength(8),
            ConfigOption::NoSuffix,
            ConfigOption::Language(Language::Spanish),
            ConfigOption::Language(Language::German),
        ]);
        assert_eq!(config.suffix_strategy, SuffixStrategy::None);
        assert_eq!(config.suffix_length, 8);
        assert_eq!(config.language, Language::German);
    }
}
