//! Per-language character mapping tables.
//!
//! Keys are matched literally and must not be substrings of one another. Pairs are listed
//! in priority order for the leftmost-first matcher built from them.

/// A source substring and its ASCII replacement.
pub type Mapping = (&'static str, &'static str);

/// English: spell out the common symbols.
pub const ENGLISH: &[Mapping] = &[("@", "at"), ("&", "and")];

/// German: expand umlauts and eszett.
pub const GERMAN: &[Mapping] = &[
    ("ä", "ae"),
    ("ö", "oe"),
    ("ü", "ue"),
    ("ß", "ss"),
    ("Ä", "Ae"),
    ("Ö", "Oe"),
    ("Ü", "Ue"),
    ("@", "at"),
    ("&", "und"),
];

/// Spanish: flatten accented vowels and ñ.
pub const SPANISH: &[Mapping] = &[
    ("á", "a"),
    ("é", "e"),
    ("í", "i"),
    ("ó", "o"),
    ("ú", "u"),
    ("ñ", "n"),
    ("ü", "u"),
    ("Á", "A"),
    ("É", "E"),
    ("Í", "I"),
    ("Ó", "O"),
    ("Ú", "U"),
    ("Ñ", "N"),
    ("Ü", "U"),
    ("@", "at"),
    ("&", "y"),
];
