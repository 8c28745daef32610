//! Character-class cleanup, separator collapsing and truncation.

/// Precompiled cleanup rules for one separator and case setting.
///
/// The separator's characters are treated as literal members of a set, never as a
/// pattern, so any separator string is safe.
#[derive(Debug, Clone)]
pub struct Cleaner {
    /// Whether ASCII uppercase letters survive cleanup.
    keep_uppercase: bool,
    /// Separator placed between tokens.
    separator: String,
}

impl Cleaner {
    /// Compiles cleanup rules for `separator`. Uppercase survives only when
    /// `lowercase` is off.
    pub fn new(separator: &str, lowercase: bool) -> Self {
        Self {
            keep_uppercase: !lowercase,
            separator: separator.to_string(),
        }
    }

    /// Returns true if `c` belongs to the separator set.
    fn is_separator(&self, c: char) -> bool {
        self.separator.contains(c)
    }

    /// Returns true if `c` splits tokens. Only ASCII space, tab, newline, form feed and
    /// carriage return count as whitespace; other Unicode spaces are disallowed.
    fn is_break(&self, c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r') || self.is_separator(c)
    }

    /// Returns true if `c` survives the disallowed-character filter.
    fn is_allowed(&self, c: char) -> bool {
        c.is_ascii_lowercase()
            || c.is_ascii_digit()
            || (self.keep_uppercase && c.is_ascii_uppercase())
            || self.is_break(c)
    }

    /// Drops disallowed characters, collapses every run of whitespace or separator
    /// characters into one separator, and trims separators from both ends.
    pub fn clean(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut in_break = false;
        for c in text.chars().filter(|&c| self.is_allowed(c)) {
            if self.is_break(c) {
                if !in_break {
                    result.push_str(&self.separator);
                }
                in_break = true;
            } else {
                result.push(c);
                in_break = false;
            }
        }
        self.trim(&result).to_string()
    }

    /// Cuts `slug` to at most `max_length` bytes and re-trims separators.
    ///
    /// A cut that would split a multi-byte separator backs off to the previous character
    /// boundary. A `max_length` of zero leaves the slug untouched.
    pub fn truncate(&self, slug: String, max_length: usize) -> String {
        if max_length == 0 || slug.len() <= max_length {
            return slug;
        }
        let mut end = max_length;
        while !slug.is_char_boundary(end) {
            end -= 1;
        }
        self.trim(&slug[..end]).to_string()
    }

    /// Strips separator characters from both ends.
    fn trim<'a>(&self, text: &'a str) -> &'a str {
        text.trim_matches(|c: char| self.is_separator(c))
    }
}
