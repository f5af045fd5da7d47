//! Word boundary segmentation.
//!
//! Every transformer builds on the same two passes: [`relax`] makes implicit
//! word boundaries (`helloWorld`, `XMLParser`) explicit by inserting spaces,
//! and [`fill`] rewrites each run of delimiters as the target separator.
//! Both are single forward scans with one character of lookbehind and
//! lookahead.

use super::chars::{self, classify, is_delimiter};
use crate::models::CharClass;

/// Options for [`prep`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Prep {
    /// Keep an all-caps input as is instead of lowercasing it first
    pub keep_caps: bool,
    /// Skip the capital-run split
    pub no_split: bool,
}

/// Normalize `text` before case mapping.
///
/// An input with no lowercase letters is lowercased unless `keep_caps` is
/// set, so that `ABC_DEF` is read as two words rather than as acronyms.
/// Text without delimiters then gets its implicit boundaries made explicit.
pub fn prep(text: &str, opts: Prep) -> String {
    let mut text = if !opts.keep_caps && !chars::has_lower(text) {
        chars::to_lower_str(text)
    } else {
        text.to_string()
    };

    if !opts.no_split && !chars::has_delimiter(&text) {
        text = relax(&text);
    }

    text
}

/// Insert a space at each implicit word boundary.
///
/// A boundary falls before an uppercase letter that follows a lowercase
/// letter or a digit (`helloWorld`, `utf8Reader`), and before the last
/// capital of an acronym run when a lowercase letter follows it
/// (`XMLParser` splits as `XML Parser`). All-caps text is left alone.
pub fn relax(text: &str) -> String {
    if !chars::has_lower(text) {
        return text.to_string();
    }

    let classes: Vec<(char, CharClass)> = text.chars().map(|c| (c, classify(c))).collect();
    let mut out = String::with_capacity(text.len() + 8);

    for (i, &(c, class)) in classes.iter().enumerate() {
        if i > 0 && class == CharClass::Upper {
            let prev = classes[i - 1].1;
            let next = classes.get(i + 1).map(|&(_, class)| class);
            let after_word = matches!(prev, CharClass::Lower | CharClass::Digit);
            let acronym_end = prev == CharClass::Upper && next == Some(CharClass::Lower);
            if after_word || acronym_end {
                out.push(' ');
            }
        }
        out.push(c);
    }

    out
}

/// Replace every run of delimiters with `separator`.
///
/// A run at the end of the text is dropped. An empty separator joins the
/// surrounding words.
pub fn fill(text: &str, separator: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars() {
        if is_delimiter(c) {
            in_run = true;
            continue;
        }
        if in_run {
            out.push_str(separator);
            in_run = false;
        }
        out.push(c);
    }

    out
}

pub fn strip_apostrophes(text: &str) -> String {
    text.chars().filter(|&c| !chars::is_apostrophe(c)).collect()
}
