//! Suffix strategies for disambiguating slugs.
//!
//! A [`Suffixer`] is resolved once from the configuration and held by the pipeline for
//! its lifetime. Only the numbered strategy keeps state.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use slugger_config::{Config, CounterProvider, SuffixStrategy};
use tracing::debug;

/// DJB2 seed.
const DJB2_SEED: u32 = 5381;

/// Digits used for base-36 rendering.
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The suffix strategy held by a pipeline instance.
#[derive(Debug)]
pub enum Suffixer {
    /// Produces nothing.
    None,
    /// Decimal counter.
    Numbered(NumberedSuffixer),
    /// Base-36 Unix seconds.
    Timestamp(TimestampSuffixer),
    /// Letters from a DJB2 hash of the slug.
    Hash(HashSuffixer),
}

impl Suffixer {
    /// Resolves the strategy selected by `config`.
    pub fn from_config(config: &Config) -> Self {
        match config.suffix_strategy {
            SuffixStrategy::None => Self::None,
            SuffixStrategy::Numbered => {
                Self::Numbered(NumberedSuffixer::new(config.counter_provider.clone()))
            }
            SuffixStrategy::TimestampBased => {
                Self::Timestamp(TimestampSuffixer::new(&config.timestamp_timezone))
            }
            SuffixStrategy::HashBased => Self::Hash(HashSuffixer::new(config.suffix_length)),
        }
    }

    /// Produces the suffix for `slug`.
    pub fn generate_suffix(&self, slug: &str) -> String {
        match self {
            Self::None => String::new(),
            Self::Numbered(numbered) => numbered.generate_suffix(),
            Self::Timestamp(timestamp) => timestamp.generate_suffix(),
            Self::Hash(hash) => hash.generate_suffix(slug),
        }
    }
}

/// Deterministic letters derived from the slug text.
#[derive(Debug, Clone, Copy)]
pub struct HashSuffixer {
    /// Number of letters to emit.
    length: usize,
}

impl HashSuffixer {
    /// Creates a hash suffixer emitting `length` letters.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Encodes the slug's DJB2 hash as lowercase letters, least significant first.
    ///
    /// Not collision-proof. Once the hash is exhausted the remaining letters are `a`.
    pub fn generate_suffix(&self, slug: &str) -> String {
        let mut value = djb2(slug);
        let mut suffix = String::with_capacity(self.length);
        for _ in 0..self.length {
            suffix.push(char::from(b'a' + (value % 26) as u8));
            value /= 26;
        }
        suffix
    }
}

/// DJB2 over the Unicode scalar values of `text`, wrapping at 32 bits.
fn djb2(text: &str) -> u32 {
    text.chars().fold(DJB2_SEED, |hash, c| {
        hash.wrapping_mul(33).wrapping_add(u32::from(c))
    })
}

/// Current Unix time rendered in base 36.
#[derive(Debug, Clone, Copy)]
pub struct TimestampSuffixer {
    /// Zone the clock reading is converted into.
    timezone: Tz,
}

impl TimestampSuffixer {
    /// Resolves `timezone`, falling back to UTC when it is empty or unknown.
    pub fn new(timezone: &str) -> Self {
        let timezone = if timezone.is_empty() {
            Tz::UTC
        } else {
            timezone.parse::<Tz>().unwrap_or_else(|_| {
                debug!(timezone, "unknown timestamp timezone, using UTC");
                Tz::UTC
            })
        };
        Self { timezone }
    }

    /// Renders the current time.
    pub fn generate_suffix(&self) -> String {
        self.suffix_at(Utc::now())
    }

    /// Renders `now`. Epoch seconds do not depend on the zone, so neither does the
    /// result.
    pub fn suffix_at(&self, now: DateTime<Utc>) -> String {
        to_base36(now.with_timezone(&self.timezone).timestamp())
    }
}

/// Renders `value` in lowercase base 36 with a leading `-` when negative.
fn to_base36(value: i64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut remaining = value.unsigned_abs();
    let mut digits = Vec::new();
    while remaining > 0 {
        digits.push(BASE36_DIGITS[(remaining % 36) as usize]);
        remaining /= 36;
    }
    if value < 0 {
        digits.push(b'-');
    }
    digits.iter().rev().map(|&b| char::from(b)).collect()
}

/// Decimal counter, either external or scoped to the pipeline instance.
#[derive(Debug)]
pub struct NumberedSuffixer {
    /// Last value handed out by the internal counter.
    counter: AtomicI64,
    /// External counter source; takes precedence over the internal counter.
    provider: Option<CounterProvider>,
}

impl NumberedSuffixer {
    /// Creates a numbered suffixer. Without a provider the first suffix is `1`.
    pub fn new(provider: Option<CounterProvider>) -> Self {
        Self {
            counter: AtomicI64::new(0),
            provider,
        }
    }

    /// Returns the next counter value as decimal digits.
    ///
    /// The internal counter is not persisted and restarts with each pipeline instance.
    pub fn generate_suffix(&self) -> String {
        let value = match &self.provider {
            Some(provider) => provider.next_value(),
            None => self.counter.fetch_add(1, Ordering::Relaxed).wrapping_add(1),
        };
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_djb2_known_values() {
        assert_eq!(djb2(""), 5381);
        assert_eq!(djb2("a"), 5381 * 33 + 97);
    }

    #[test]
    fn test_hash_suffix() {
        let hash = HashSuffixer::new(6);
        assert_eq!(hash.generate_suffix("hello-world"), "ownwco");
        assert_eq!(hash.generate_suffix("my-post"), "swgpop");
        assert_eq!(hash.generate_suffix(""), "zyhaaa");
    }

    #[test]
    fn test_hash_suffix_is_deterministic() {
        let hash = HashSuffixer::new(6);
        assert_eq!(
            hash.generate_suffix("hello_world"),
            hash.generate_suffix("hello_world")
        );
        assert_eq!(hash.generate_suffix("hello_world"), "snlwuw");
    }

    #[test]
    fn test_hash_suffix_length() {
        assert_eq!(HashSuffixer::new(3).generate_suffix("hello-world"), "own");
        assert_eq!(HashSuffixer::new(0).generate_suffix("hello-world"), "");
        // 26^7 exceeds u32::MAX, so long suffixes pad with 'a'
        assert_eq!(
            HashSuffixer::new(10).generate_suffix("hello-world"),
            "ownwcoeaaa"
        );
    }

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(-36), "-10");
        assert_eq!(to_base36(1_700_000_000), "s44we8");
    }

    #[test]
    fn test_timestamp_suffix_at() {
        let suffixer = TimestampSuffixer::new("UTC");
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(suffixer.suffix_at(now), "s44we8");
    }

    #[test]
    fn test_timestamp_timezone_does_not_change_suffix() {
        // Epoch seconds are zone-independent; the configured zone has no visible effect.
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let tokyo = TimestampSuffixer::new("Asia/Tokyo");
        let utc = TimestampSuffixer::new("");
        assert_eq!(tokyo.timezone, Tz::Asia__Tokyo);
        assert_eq!(tokyo.suffix_at(now), utc.suffix_at(now));
    }

    #[test]
    fn test_unknown_timezone_falls_back_to_utc() {
        assert_eq!(TimestampSuffixer::new("Not/AZone").timezone, Tz::UTC);
        assert_eq!(TimestampSuffixer::new("").timezone, Tz::UTC);
    }

    #[test]
    fn test_timestamp_suffix_is_current() {
        let before = Utc::now().timestamp();
        let suffix = TimestampSuffixer::new("Europe/Berlin").generate_suffix();
        let after = Utc::now().timestamp();
        let value = i64::from_str_radix(&suffix, 36).unwrap();
        assert!((before..=after).contains(&value));
    }

    #[test]
    fn test_numbered_internal_counter() {
        let numbered = NumberedSuffixer::new(None);
        assert_eq!(numbered.generate_suffix(), "1");
        assert_eq!(numbered.generate_suffix(), "2");
        assert_eq!(numbered.generate_suffix(), "3");
    }

    #[test]
    fn test_numbered_counter_wraps_at_max() {
        let numbered = NumberedSuffixer::new(None);
        numbered.counter.store(i64::MAX - 1, Ordering::Relaxed);
        assert_eq!(numbered.generate_suffix(), i64::MAX.to_string());
        assert_eq!(numbered.generate_suffix(), i64::MIN.to_string());
    }

    #[test]
    fn test_numbered_counter_is_per_instance() {
        let first = NumberedSuffixer::new(None);
        first.generate_suffix();
        let second = NumberedSuffixer::new(None);
        assert_eq!(second.generate_suffix(), "1");
    }

    #[test]
    fn test_numbered_provider_used_verbatim() {
        let next = Arc::new(AtomicI64::new(100));
        let source = Arc::clone(&next);
        let numbered = NumberedSuffixer::new(Some(CounterProvider::new(move || {
            source.fetch_add(5, Ordering::SeqCst)
        })));
        assert_eq!(numbered.generate_suffix(), "100");
        assert_eq!(numbered.generate_suffix(), "105");
        assert_eq!(next.load(Ordering::SeqCst), 110);

        let negative = NumberedSuffixer::new(Some(CounterProvider::new(|| -4)));
        assert_eq!(negative.generate_suffix(), "-4");
    }

    #[test]
    fn test_from_config() {
        let config = Config::default();
        assert!(matches!(Suffixer::from_config(&config), Suffixer::None));
        assert_eq!(Suffixer::None.generate_suffix("anything"), "");

        let config = Config {
            suffix_strategy: SuffixStrategy::HashBased,
            suffix_length: 3,
            ..Config::default()
        };
        let suffixer = Suffixer::from_config(&config);
        assert_eq!(suffixer.generate_suffix("hello-world"), "own");
    }
}
