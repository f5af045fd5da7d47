use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A canonical case style.
///
/// `None` means the text does not conform to any of the eleven styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    #[default]
    None,
    /// `hello world`
    Lower,
    /// `hello_world`
    Snake,
    /// `HELLO_WORLD`
    Constant,
    /// `helloWorld`
    Camel,
    /// `hello-world`
    Kebab,
    /// `HELLO WORLD`
    Upper,
    /// `Hello World`
    Capital,
    /// `Hello-World`
    Header,
    /// `HelloWorld`
    Pascal,
    /// `The Lord of the Rings`
    Title,
    /// `Hello world. Goodbye.`
    Sentence,
}

/// Error returned when a style name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown case style '{0}'")]
pub struct ParseStyleError(pub String);

impl CaseStyle {
    /// Every style, `None` first, then the canonical styles in detection order.
    pub const ALL: [CaseStyle; 12] = [
        CaseStyle::None,
        CaseStyle::Lower,
        CaseStyle::Snake,
        CaseStyle::Constant,
        CaseStyle::Camel,
        CaseStyle::Kebab,
        CaseStyle::Upper,
        CaseStyle::Capital,
        CaseStyle::Header,
        CaseStyle::Pascal,
        CaseStyle::Title,
        CaseStyle::Sentence,
    ];

    /// The lowercase name used in config files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            CaseStyle::None => "none",
            CaseStyle::Lower => "lower",
            CaseStyle::Snake => "snake",
            CaseStyle::Constant => "constant",
            CaseStyle::Camel => "camel",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Upper => "upper",
            CaseStyle::Capital => "capital",
            CaseStyle::Header => "header",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Title => "title",
            CaseStyle::Sentence => "sentence",
        }
    }

    /// Detect the style `text` already conforms to
    pub fn of(text: &str) -> CaseStyle {
        crate::case::of(text)
    }

    /// Render `text` in this style. `None` returns the text unchanged.
    pub fn apply(self, text: &str) -> String {
        crate::case::to_case(text, self)
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for CaseStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CaseStyle::ALL
            .iter()
            .copied()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| ParseStyleError(s.to_string()))
    }
}
