mod char_class;
mod style;

pub use char_class::CharClass;
pub use style::{CaseStyle, ParseStyleError};
