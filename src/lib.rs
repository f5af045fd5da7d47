//! # case-style
//!
//! Detect and convert the lexical case style of identifiers, labels and prose.
//!
//! The engine understands eleven styles: lower, snake_case, CONSTANT_CASE,
//! camelCase, kebab-case, UPPER, Capitalized Words, Header-Case, PascalCase,
//! Title Case and Sentence case. It splits words on delimiter runs,
//! lowercase-to-uppercase transitions and acronym boundaries (`XMLParser`
//! reads as `XML Parser`).
//!
//! Every transformer is pure, total and idempotent, and [`case::of`] reports
//! the first style (in a fixed priority order) whose transformer leaves the
//! input unchanged.
//!
//! ## Usage
//!
//! ```rust
//! use case_style::case;
//! use case_style::models::CaseStyle;
//!
//! assert_eq!(case::to_snake("HelloWorld"), "hello_world");
//! assert_eq!(case::to_kebab("XMLHttpRequest"), "xml-http-request");
//! assert_eq!(case::of("HELLO_WORLD"), CaseStyle::Constant);
//! assert_eq!(CaseStyle::Title.apply("the lord of the rings"), "The Lord of the Rings");
//! ```

pub mod case;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod pipeline;
