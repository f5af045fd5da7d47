//! The case-style engine: classify, segment, transform, detect.
//!
//! Every function here is pure and total. The only shared data are the
//! constant classification tables in [`chars`].

pub mod chars;
pub mod detect;
pub mod segment;
pub mod transform;

pub use detect::of;
pub use transform::{
    flip, to_camel, to_capital, to_capital_with, to_case, to_constant, to_header, to_kebab,
    to_lower, to_lower_with, to_pascal, to_sentence, to_sentence_with, to_snake, to_title,
    to_upper, to_upper_with, MINOR_WORDS,
};
