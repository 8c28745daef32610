//! Language-specific literal substitution.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};
use slugger_config::Language;

use crate::tables::{self, Mapping};

/// Combined matcher for the English table.
static ENGLISH_MATCHER: LazyLock<Regex> = LazyLock::new(|| compile_matcher(tables::ENGLISH));
/// Combined matcher for the German table.
static GERMAN_MATCHER: LazyLock<Regex> = LazyLock::new(|| compile_matcher(tables::GERMAN));
/// Combined matcher for the Spanish table.
static SPANISH_MATCHER: LazyLock<Regex> = LazyLock::new(|| compile_matcher(tables::SPANISH));

/// Builds one alternation of the escaped table keys, in table order.
fn compile_matcher(table: &[Mapping]) -> Regex {
    let pattern = table
        .iter()
        .map(|(key, _)| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern).expect("escaped table keys should compile")
}

/// Applies a language's character table to text.
///
/// Resolved once from a [`Language`]; languages without a table pass text through.
#[derive(Debug, Clone, Copy)]
pub enum LanguageReplacer {
    /// Substitute every table key in a single leftmost-first pass.
    Mapped {
        /// Alternation of the table's keys.
        matcher: &'static Regex,
        /// Source and replacement pairs.
        table: &'static [Mapping],
    },
    /// Leave text unchanged.
    Passthrough,
}

impl LanguageReplacer {
    /// Resolves the replacer for `language`.
    pub fn new(language: Language) -> Self {
        let (matcher, table) = match language {
            Language::English => (&*ENGLISH_MATCHER, tables::ENGLISH),
            Language::German => (&*GERMAN_MATCHER, tables::GERMAN),
            Language::Spanish => (&*SPANISH_MATCHER, tables::SPANISH),
            Language::Other => return Self::Passthrough,
        };
        Self::Mapped { matcher, table }
    }

    /// Replaces every table key in `text`. Output is never re-scanned.
    pub fn replace<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::Mapped { matcher, table } => matcher.replace_all(text, |caps: &Captures<'_>| {
                let key = &caps[0];
                table
                    .iter()
                    .find(|&&(source, _)| source == key)
                    .map_or(key, |&(_, replacement)| replacement)
                    .to_string()
            }),
            Self::Passthrough => Cow::Borrowed(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_german_replacer() {
        let replacer = LanguageReplacer::new(Language::German);
        assert_eq!(
            replacer.replace("Fähigkeit Straße über"),
            "Faehigkeit Strasse ueber"
        );
    }

    #[test]
    fn test_english_replacer_leaves_accents() {
        let replacer = LanguageReplacer::new(Language::English);
        assert_eq!(replacer.replace("Café & Drinks"), "Café and Drinks");
    }

    #[test]
    fn test_spanish_replacer() {
        let replacer = LanguageReplacer::new(Language::Spanish);
        assert_eq!(
            replacer.replace("niño corazón jalapeño"),
            "nino corazon jalapeno"
        );
        assert_eq!(replacer.replace("Ñandú & Pingüino"), "Nandu y Pinguino");
    }

    #[test]
    fn test_other_language_passes_through() {
        let replacer = LanguageReplacer::new(Language::Other);
        assert!(matches!(replacer, LanguageReplacer::Passthrough));
        assert_eq!(replacer.replace("Fähigkeit & Co @ Home"), "Fähigkeit & Co @ Home");
    }

    #[test]
    fn test_no_match_borrows() {
        let replacer = LanguageReplacer::new(Language::German);
        assert!(matches!(replacer.replace("plain ascii"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_single_pass() {
        // "at" produced by '@' is not fed back through the matcher
        let replacer = LanguageReplacer::new(Language::English);
        assert_eq!(replacer.replace("@@&"), "atatand");
    }
}
