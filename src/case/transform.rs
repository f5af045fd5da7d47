//! The case transformers.
//!
//! Each `to_*` function renders arbitrary text in one canonical style. All of
//! them are total and idempotent: `to_x(&to_x(s)) == to_x(s)`.

use super::chars::{self, classify, is_delimiter};
use super::segment::{self, Prep};
use crate::models::{CaseStyle, CharClass};

/// Words kept lowercase in Title Case unless first or last
pub const MINOR_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "en", "for", "if", "in", "of", "on", "or", "the",
    "to", "v", "vs", "via",
];

/// Separator used when the caller passes an empty fill
const DEFAULT_FILL: &str = " ";

fn separator(fill: &str) -> &str {
    if fill.is_empty() {
        DEFAULT_FILL
    } else {
        fill
    }
}

fn apostrophes(text: &str, strip: bool) -> String {
    if strip {
        segment::strip_apostrophes(text)
    } else {
        text.to_string()
    }
}

/// `hello world`
pub fn to_lower(text: &str) -> String {
    to_lower_with(text, "", false)
}

/// Lowercase words joined by `fill` (a single space when empty)
pub fn to_lower_with(text: &str, fill: &str, strip_apostrophes: bool) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = apostrophes(text, strip_apostrophes);
    let text = segment::prep(&text, Prep::default());
    segment::fill(&chars::to_lower_str(&text), separator(fill))
}

/// `HELLO WORLD`
pub fn to_upper(text: &str) -> String {
    to_upper_with(text, "", false)
}

/// Uppercase words joined by `fill` (a single space when empty)
pub fn to_upper_with(text: &str, fill: &str, strip_apostrophes: bool) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = apostrophes(text, strip_apostrophes);
    let text = segment::prep(
        &text,
        Prep {
            keep_caps: true,
            ..Default::default()
        },
    );
    segment::fill(&chars::to_upper_str(&text), separator(fill))
}

/// `hello_world`
pub fn to_snake(text: &str) -> String {
    to_lower_with(text, "_", true)
}

/// `HELLO_WORLD`
pub fn to_constant(text: &str) -> String {
    to_upper_with(text, "_", true)
}

/// `hello-world`
pub fn to_kebab(text: &str) -> String {
    to_lower_with(text, "-", true)
}

/// `Hello World`
pub fn to_capital(text: &str) -> String {
    to_capital_with(text, "", false)
}

/// Capitalize the first letter of every word and join the words with
/// `fill` (a single space when empty).
///
/// Existing capitals inside a word are kept, so `helloWorld` becomes
/// `HelloWorld`. Text with no lowercase letter left after capitalizing is
/// lowercased and capitalized again, which turns `HELLO WORLD` into
/// `Hello World`.
pub fn to_capital_with(text: &str, fill: &str, strip_apostrophes: bool) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = apostrophes(text, strip_apostrophes);
    let mut capped = capitalize_words(&text);
    if !chars::has_lower(&capped) {
        capped = capitalize_words(&chars::to_lower_str(&text));
    }
    segment::fill(&capped, separator(fill))
}

/// `Hello-World`
pub fn to_header(text: &str) -> String {
    to_capital_with(text, "-", true)
}

/// `HelloWorld`
///
/// Only letters and digits survive. A result with no lowercase letter is
/// read as a single word, so `HTML` becomes `Html`.
pub fn to_pascal(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = segment::strip_apostrophes(text);
    let text = segment::prep(
        &text,
        Prep {
            no_split: true,
            ..Default::default()
        },
    );

    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if classify(c).is_word() {
            out.push(if word_start { chars::upper(c) } else { c });
            word_start = false;
        } else {
            word_start = true;
        }
    }

    if chars::has_lower(&out) {
        out
    } else {
        capitalize_first(&chars::to_lower_str(&out))
    }
}

/// `helloWorld`
pub fn to_camel(text: &str) -> String {
    let pascal = to_pascal(text);
    let mut it = pascal.chars();
    match it.next() {
        Some(first) => std::iter::once(chars::lower(first)).chain(it).collect(),
        None => String::new(),
    }
}

/// `The Lord of the Rings`
pub fn to_title(text: &str) -> String {
    let capital = to_capital(text);
    let words = word_spans(&capital);
    if words.len() < 3 {
        return capital;
    }

    let mut out = String::with_capacity(capital.len());
    let mut last = 0;
    for &(start, end) in &words[1..words.len() - 1] {
        let word = &capital[start..end];
        if is_minor_word(word) {
            out.push_str(&capital[last..start]);
            out.push_str(&chars::to_lower_str(word));
            last = end;
        }
    }
    out.push_str(&capital[last..]);
    out
}

/// `Hello world. Goodbye.`
pub fn to_sentence(text: &str) -> String {
    to_sentence_with::<&str>(text, &[], &[])
}

/// Sentence case with caller-supplied proper names and abbreviations.
///
/// Every occurrence of a name (whole word, any case) is rewritten exactly as
/// given. A letter following `<abbreviation>. ` is kept lowercase, since the
/// period there does not end a sentence. Names win over abbreviations.
pub fn to_sentence_with<S: AsRef<str>>(text: &str, names: &[S], abbreviations: &[S]) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out: Vec<char> = text.chars().map(chars::lower).collect();
    capitalize_sentences(&mut out);

    for abbr in abbreviations {
        let abbr = abbr.as_ref().trim().trim_end_matches('.');
        if abbr.is_empty() {
            continue;
        }
        let pattern: Vec<char> = abbr.chars().map(chars::lower).chain(". ".chars()).collect();
        for at in find_words(&out, &pattern, false) {
            if let Some(c) = out.get_mut(at + pattern.len()) {
                *c = chars::lower(*c);
            }
        }
    }

    for name in names {
        let name: Vec<char> = name.as_ref().trim().chars().collect();
        if name.is_empty() {
            continue;
        }
        let pattern: Vec<char> = name.iter().copied().map(chars::lower).collect();
        for at in find_words(&out, &pattern, true) {
            out[at..at + name.len()].copy_from_slice(&name);
        }
    }

    out.into_iter().collect()
}

/// Invert the case of every letter
pub fn flip(text: &str) -> String {
    text.chars()
        .map(|c| match classify(c) {
            CharClass::Lower => chars::upper(c),
            CharClass::Upper => chars::lower(c),
            _ => c,
        })
        .collect()
}

/// Render `text` in `style`; `CaseStyle::None` returns it unchanged
pub fn to_case(text: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::None => text.to_string(),
        CaseStyle::Lower => to_lower(text),
        CaseStyle::Snake => to_snake(text),
        CaseStyle::Constant => to_constant(text),
        CaseStyle::Camel => to_camel(text),
        CaseStyle::Kebab => to_kebab(text),
        CaseStyle::Upper => to_upper(text),
        CaseStyle::Capital => to_capital(text),
        CaseStyle::Header => to_header(text),
        CaseStyle::Pascal => to_pascal(text),
        CaseStyle::Title => to_title(text),
        CaseStyle::Sentence => to_sentence(text),
    }
}

fn is_minor_word(word: &str) -> bool {
    let word = chars::to_lower_str(word);
    MINOR_WORDS.contains(&word.as_str())
}

/// Uppercase the first character of the text and of every word after a delimiter
fn capitalize_words(text: &str) -> String {
    let mut word_start = true;
    text.chars()
        .map(|c| {
            let out = if word_start { chars::upper(c) } else { c };
            word_start = is_delimiter(c);
            out
        })
        .collect()
}

fn capitalize_first(text: &str) -> String {
    let mut it = text.chars();
    match it.next() {
        Some(first) => std::iter::once(chars::upper(first)).chain(it).collect(),
        None => String::new(),
    }
}

/// Byte ranges of the maximal non-delimiter runs
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        match (is_delimiter(c), start) {
            (true, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    spans
}

/// Uppercase the first letter of the text and of every sentence.
///
/// A sentence starts after `.`, `!` or `?` followed by whitespace, and after
/// an opening quote in `, "`. Symbols between the trigger and the letter are
/// skipped; a digit cancels the pending capital.
fn capitalize_sentences(text: &mut [char]) {
    let mut pending = true;
    for i in 0..text.len() {
        let c = text[i];
        let class = classify(c);
        if pending && class.is_letter() {
            text[i] = chars::upper(c);
            pending = false;
        } else if class.is_word() {
            pending = false;
        }

        let ends_sentence = matches!(c, '.' | '!' | '?')
            && text.get(i + 1).map_or(false, |next| next.is_whitespace());
        let opens_quote = c == '"' && i >= 2 && text[i - 2] == ',' && text[i - 1] == ' ';
        if ends_sentence || opens_quote {
            pending = true;
        }
    }
}

/// Start indices where `pattern` occurs in `text`, compared case-insensitively.
///
/// A match must not continue a word on the left; with `whole` it must not
/// run into one on the right either.
fn find_words(text: &[char], pattern: &[char], whole: bool) -> Vec<usize> {
    let is_word = |c: &char| classify(*c).is_word();
    let mut found = Vec::new();
    if pattern.is_empty() || pattern.len() > text.len() {
        return found;
    }

    for at in 0..=text.len() - pattern.len() {
        let end = at + pattern.len();
        let matches = text[at..end]
            .iter()
            .zip(pattern)
            .all(|(&c, &p)| chars::lower(c) == p);
        let left_ok = at == 0 || !is_word(&text[at - 1]);
        let right_ok = !whole || text.get(end).map_or(true, |c| !is_word(c));
        if matches && left_ok && right_ok {
            found.push(at);
        }
    }
    found
}
