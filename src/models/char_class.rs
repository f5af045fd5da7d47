/// Lexical class of a single character, as seen by the segmenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// C0 controls other than CR/LF, and DEL
    Control,
    /// CR or LF
    LineBreak,
    /// Punctuation, whitespace, and anything outside the Latin-1 tables
    Symbol,
    Digit,
    Lower,
    Upper,
}

impl CharClass {
    pub fn is_letter(self) -> bool {
        matches!(self, CharClass::Lower | CharClass::Upper)
    }

    /// Letters and digits: the characters a word is made of
    pub fn is_word(self) -> bool {
        matches!(self, CharClass::Lower | CharClass::Upper | CharClass::Digit)
    }
}
