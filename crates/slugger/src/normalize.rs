//! Diacritic stripping via canonical decomposition.

use std::borrow::Cow;

use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_normalization::UnicodeNormalization;

/// Removes nonspacing marks from `text`.
///
/// Decomposes to NFD, drops every `Mn` code point, then recomposes to NFC so characters
/// without a base-letter decomposition keep their composed form. ASCII input is returned
/// borrowed.
pub fn strip_diacritics(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.nfd()
            .filter(|&c| get_general_category(c) != GeneralCategory::NonspacingMark)
            .nfc()
            .collect(),
    )
}
