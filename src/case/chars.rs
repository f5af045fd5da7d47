//! Character classification over the Latin-1 code page.
//!
//! Classes come from fixed code-point ranges. Anything the tables do not
//! cover, including every non-Latin script, lands in [`CharClass::Symbol`]
//! and is therefore treated as a delimiter by the segmenter.

use crate::models::CharClass;

const CONTROL: &[(u32, u32)] = &[(0x00, 0x09), (0x0B, 0x0C), (0x0E, 0x1F), (0x7F, 0x7F)];

const LINE_BREAK: &[(u32, u32)] = &[(0x0A, 0x0A), (0x0D, 0x0D)];

const DIGIT: &[(u32, u32)] = &[(0x30, 0x39)];

// ß sits among the uppercase block but has no uppercase form in Latin-1.
const LOWER: &[(u32, u32)] = &[(0x61, 0x7A), (0xDF, 0xF6), (0xF8, 0xFF)];

const UPPER: &[(u32, u32)] = &[(0x41, 0x5A), (0xC0, 0xD6), (0xD8, 0xDE)];

// Listed for completeness; the fallback below also yields Symbol.
// × (0xD7) and ÷ (0xF7) are symbols.
const SYMBOL: &[(u32, u32)] = &[
    (0x20, 0x2F),
    (0x3A, 0x40),
    (0x5B, 0x60),
    (0x7B, 0x7E),
    (0x80, 0xBF),
    (0xD7, 0xD7),
    (0xF7, 0xF7),
];

const TABLE: &[(&[(u32, u32)], CharClass)] = &[
    (CONTROL, CharClass::Control),
    (LINE_BREAK, CharClass::LineBreak),
    (DIGIT, CharClass::Digit),
    (LOWER, CharClass::Lower),
    (UPPER, CharClass::Upper),
    (SYMBOL, CharClass::Symbol),
];

/// Classify a single character
pub fn classify(c: char) -> CharClass {
    let cp = c as u32;
    TABLE
        .iter()
        .find(|(ranges, _)| ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp)))
        .map(|&(_, class)| class)
        .unwrap_or(CharClass::Symbol)
}

/// Apostrophes are part of a word, never a delimiter
pub fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

/// A character that separates words
pub fn is_delimiter(c: char) -> bool {
    classify(c) == CharClass::Symbol && !is_apostrophe(c)
}

pub fn is_lower(c: char) -> bool {
    classify(c) == CharClass::Lower
}

pub fn is_upper(c: char) -> bool {
    classify(c) == CharClass::Upper
}

/// Uppercase a lowercase letter.
///
/// Only maps within the tables: `ß` and `ÿ` have no Latin-1 uppercase and
/// are returned unchanged, as is every non-letter.
pub fn upper(c: char) -> char {
    if !is_lower(c) {
        return c;
    }
    single(c.to_uppercase()).filter(|&u| is_upper(u)).unwrap_or(c)
}

/// Lowercase an uppercase letter; the inverse of [`upper`]
pub fn lower(c: char) -> char {
    if !is_upper(c) {
        return c;
    }
    single(c.to_lowercase()).filter(|&l| is_lower(l)).unwrap_or(c)
}

/// A lowercase letter that has an uppercase form
pub fn is_cased_lower(c: char) -> bool {
    upper(c) != c
}

/// True when `text` contains at least one lowercase letter with an uppercase form
pub fn has_lower(text: &str) -> bool {
    text.chars().any(is_cased_lower)
}

pub fn has_delimiter(text: &str) -> bool {
    text.chars().any(is_delimiter)
}

pub fn to_lower_str(text: &str) -> String {
    text.chars().map(lower).collect()
}

pub fn to_upper_str(text: &str) -> String {
    text.chars().map(upper).collect()
}

fn single(mut it: impl Iterator<Item = char>) -> Option<char> {
    let first = it.next()?;
    match it.next() {
        Some(_) => None,
        None => Some(first),
    }
}
