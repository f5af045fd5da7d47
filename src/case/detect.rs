use super::transform::{
    to_camel, to_capital, to_constant, to_header, to_kebab, to_lower, to_pascal, to_sentence,
    to_snake, to_title, to_upper,
};
use crate::models::CaseStyle;

/// Styles tried by [`of`], in order. Several styles agree on degenerate
/// inputs (a single lowercase word is valid lower, snake, camel and kebab);
/// the first match wins.
const PRIORITY: [(CaseStyle, fn(&str) -> String); 11] = [
    (CaseStyle::Lower, to_lower),
    (CaseStyle::Snake, to_snake),
    (CaseStyle::Constant, to_constant),
    (CaseStyle::Camel, to_camel),
    (CaseStyle::Kebab, to_kebab),
    (CaseStyle::Upper, to_upper),
    (CaseStyle::Capital, to_capital),
    (CaseStyle::Header, to_header),
    (CaseStyle::Pascal, to_pascal),
    (CaseStyle::Title, to_title),
    (CaseStyle::Sentence, to_sentence),
];

/// Detect which canonical style `text` already conforms to.
///
/// Returns the first style whose transformer leaves `text` unchanged, or
/// `CaseStyle::None` when no transformer does (and for empty text).
pub fn of(text: &str) -> CaseStyle {
    if text.is_empty() {
        return CaseStyle::None;
    }

    match PRIORITY.iter().find(|(_, transform)| transform(text) == text) {
        Some(&(style, _)) => {
            tracing::trace!(%style, text, "detected case style");
            style
        }
        None => CaseStyle::None,
    }
}
