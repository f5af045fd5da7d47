//! Integration tests for the line pipeline

use std::fs;
use std::io::BufReader;
use std::path::PathBuf;
use tempfile::tempdir;

use case_style::config::Config;
use case_style::models::CaseStyle;
use case_style::pipeline::{Operation, Pipeline};

/// Get path to test fixtures
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run_fixture(name: &str, config: &Config, op: Operation) -> Vec<String> {
    let file = fs::File::open(fixture_path(name)).expect("Failed to open fixture");
    let mut output = Vec::new();

    Pipeline::new(false)
        .run_io(config, op, BufReader::new(file), &mut output)
        .expect("Pipeline failed");

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_detect_fixture() {
    let styles = run_fixture(
        "mixed_identifiers.txt",
        &Config::default_config(),
        Operation::Detect,
    );

    assert_eq!(
        styles,
        vec![
            "lower", "snake", "constant", "camel", "kebab", "upper", "capital", "header",
            "title", "sentence", "none",
        ]
    );
}

#[test]
fn test_convert_headers_to_snake() {
    let out = run_fixture(
        "column_headers.txt",
        &Config::default_config(),
        Operation::Convert(CaseStyle::Snake),
    );

    assert_eq!(
        out,
        vec![
            "customer_id",
            "first_name",
            "last_name",
            "date_of_birth",
            "xml_payload",
            "shipping_address_line_2",
        ]
    );
}

#[test]
fn test_convert_headers_to_camel() {
    let out = run_fixture(
        "column_headers.txt",
        &Config::default_config(),
        Operation::Convert(CaseStyle::Camel),
    );

    assert_eq!(
        out,
        vec![
            "customerId",
            "firstName",
            "lastName",
            "dateOfBirth",
            "xMLPayload",
            "shippingAddressLine2",
        ]
    );
}

#[test]
fn test_convert_headers_to_title() {
    let out = run_fixture(
        "column_headers.txt",
        &Config::default_config(),
        Operation::Convert(CaseStyle::Title),
    );

    assert_eq!(
        out,
        vec![
            "CustomerId",
            "First Name",
            "Last Name",
            "Date of Birth",
            "XMLPayload",
            "Shipping Address Line 2",
        ]
    );
}

#[test]
fn test_convert_with_loaded_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("case-style.toml");
    fs::write(
        &config_path,
        r#"
[convert]
style = "sentence"

[sentence]
names = ["Ada Lovelace"]
abbreviations = ["Dr"]
"#,
    )
    .unwrap();

    let config = Config::load(&config_path).unwrap();
    let out = Pipeline::new(false).run(
        &config,
        Operation::Convert(config.convert.style),
        &["DR. ADA LOVELACE WROTE NOTES. THEY SURVIVED."],
    );

    assert_eq!(out, vec!["Dr. Ada Lovelace wrote notes. They survived."]);
}

#[test]
fn test_flip_preserves_line_count() {
    let out = run_fixture(
        "mixed_identifiers.txt",
        &Config::default_config(),
        Operation::Flip,
    );

    assert_eq!(out.len(), 11);
    assert_eq!(out[0], "HELLO WORLD");
    assert_eq!(out[3], "HELLOwORLD");
}
