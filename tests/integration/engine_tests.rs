//! Integration tests for the case-style engine

use case_style::case::{self, of, to_case};
use case_style::models::CaseStyle;

/// Inputs covering identifiers, prose, acronyms, digits, Latin-1 letters and junk
const CORPUS: &[&str] = &[
    "",
    "a",
    "A",
    "hello",
    "Hello",
    "HELLO",
    "hello world",
    "Hello World",
    "HELLO WORLD",
    "hello_world",
    "HELLO_WORLD",
    "helloWorld",
    "HelloWorld",
    "hello-world",
    "Hello-World",
    "XMLHttpRequest",
    "getHTTPResponse",
    "parseHTML",
    "HTML",
    "ID",
    "a b",
    "a bC",
    "A1B",
    "version2Update",
    "utf8_Reader",
    "  leading and trailing  ",
    "__init__",
    "--flag-name",
    "don't stop believin'",
    "it\u{2019}s fine",
    "the lord of the rings",
    "War And Peace",
    "hello world. how are you? fine!",
    "he said, \"go away\"",
    "Crème Brûlée",
    "STRAßE",
    "ÿes",
    "Ωmega_value",
    "日本語 text",
    "tab\tseparated",
    "line\nbreak",
    "123",
    "3rd_party",
    "!!!",
    "x",
    "v",
];

const STYLES: [CaseStyle; 11] = [
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

#[test]
fn test_documented_scenarios() {
    assert_eq!(case::to_snake("HelloWorld"), "hello_world");
    assert_eq!(case::to_pascal("hello_world"), "HelloWorld");
    assert_eq!(case::to_camel("Hello World"), "helloWorld");
    assert_eq!(case::to_kebab("XMLHttpRequest"), "xml-http-request");
    assert_eq!(case::to_title("the lord of the rings"), "The Lord of the Rings");
    assert_eq!(of("hello_world"), CaseStyle::Snake);
    assert_eq!(of("HELLO_WORLD"), CaseStyle::Constant);
    assert_eq!(case::flip("AbC123"), "aBc123");
}

#[test]
fn test_every_transformer_is_idempotent() {
    for &style in &STYLES {
        for &input in CORPUS {
            let once = to_case(input, style);
            let twice = to_case(&once, style);
            assert_eq!(
                twice, once,
                "{} is not idempotent for {:?} (first pass {:?})",
                style, input, once
            );
        }
    }
}

#[test]
fn test_detector_is_sound() {
    for &input in CORPUS {
        let style = of(input);
        if style != CaseStyle::None {
            assert_eq!(
                to_case(input, style),
                input,
                "{:?} detected as {} but does not round-trip",
                input,
                style
            );
        }
    }
}

#[test]
fn test_detector_agrees_with_transformer_output() {
    // Converting then detecting never yields `none`, and the detected style
    // renders the converted text unchanged.
    for &style in &STYLES {
        for &input in CORPUS.iter().filter(|s| !s.is_empty()) {
            let converted = to_case(input, style);
            if converted.is_empty() {
                continue;
            }
            let detected = of(&converted);
            assert_ne!(detected, CaseStyle::None, "{} of {:?}", style, input);
            assert_eq!(to_case(&converted, detected), converted);
        }
    }
}

#[test]
fn test_empty_input() {
    for style in CaseStyle::ALL {
        assert_eq!(to_case("", style), "");
    }
    assert_eq!(case::to_lower_with("", "-", true), "");
    assert_eq!(case::to_upper_with("", "-", true), "");
    assert_eq!(case::to_capital_with("", "-", true), "");
    assert_eq!(case::to_sentence_with("", &["Name"], &["Abbr"]), "");
    assert_eq!(case::flip(""), "");
    assert_eq!(of(""), CaseStyle::None);
}

#[test]
fn test_flip_is_an_involution_on_letters() {
    for input in ["AbC", "hello", "WORLD", "MiXeD", "ÀéÎõÜ", "camelCaseWord"] {
        assert_eq!(case::flip(&case::flip(input)), input);
    }
}

#[test]
fn test_unknown_scripts_are_delimiters() {
    assert_eq!(case::to_snake("日本語 text"), "_text");
    assert_eq!(case::to_pascal("Ωmega_value"), "MegaValue");
}

#[test]
fn test_style_apply_matches_to_case() {
    for &style in &STYLES {
        assert_eq!(style.apply("some Mixed_input"), to_case("some Mixed_input", style));
    }
    assert_eq!(CaseStyle::of("hello-world"), CaseStyle::Kebab);
}

#[test]
fn test_concurrent_callers() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                CORPUS
                    .iter()
                    .map(|s| (of(s), to_case(s, STYLES[i % STYLES.len()])))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let expected: Vec<_> = (0..8)
        .map(|i| {
            CORPUS
                .iter()
                .map(|s| (of(s), to_case(s, STYLES[i % STYLES.len()])))
                .collect::<Vec<_>>()
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
