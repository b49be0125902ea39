//! Integration tests: run the golden and adversarial tag-tree vectors.
//!
//! Each fixture in tests/fixtures/ has:
//! - input.json: the raw document handed to the transform
//! - case.json: `{"root": ..., "error": ...}`, both optional
//! - expect.txt: the exact expected output (golden cases only)

use serde_json::Value;
use std::path::PathBuf;
use tagconst_kernel::transform;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn run_fixture(name: &str) {
    let dir = fixtures_dir().join(name);

    let input_path = dir.join("input.json");
    let case_path = dir.join("case.json");

    let input = std::fs::read(&input_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", input_path.display()));
    let case_str = std::fs::read_to_string(&case_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", case_path.display()));
    let case: Value = serde_json::from_str(&case_str)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", case_path.display()));

    let root = case["root"].as_str();
    let result = transform(&input, root);

    if let Some(expected_kind) = case["error"].as_str() {
        match result {
            Err(err) => assert_eq!(err.kind(), expected_kind, "\n\nFixture: {name}\n"),
            Ok(output) => panic!("\n\nFixture: {name}\n\nExpected {expected_kind}, got:\n{output}\n"),
        }
        return;
    }

    let expect_path = dir.join("expect.txt");
    let expected = std::fs::read_to_string(&expect_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", expect_path.display()));
    let output = result.unwrap_or_else(|e| panic!("\n\nFixture: {name}\n\nUnexpected error: {e}\n"));

    assert_eq!(
        output, expected,
        "\n\nFixture: {name}\n\nGot:\n{output}\n\nExpected:\n{expected}\n"
    );
}

#[test]
fn golden_single_group() {
    run_fixture("golden_single_group");
}

#[test]
fn golden_two_groups() {
    run_fixture("golden_two_groups");
}

#[test]
fn golden_nested_mixed_level() {
    run_fixture("golden_nested_mixed_level");
}

#[test]
fn golden_root_scoped() {
    run_fixture("golden_root_scoped");
}

#[test]
fn golden_top_level_hyphen() {
    run_fixture("golden_top_level_hyphen");
}

#[test]
fn golden_empty_object() {
    run_fixture("golden_empty_object");
}

#[test]
fn adversarial_root_missing() {
    run_fixture("adversarial_root_missing");
}

#[test]
fn adversarial_root_not_object() {
    run_fixture("adversarial_root_not_object");
}

#[test]
fn adversarial_deep_number() {
    run_fixture("adversarial_deep_number");
}

#[test]
fn adversarial_array_leaf() {
    run_fixture("adversarial_array_leaf");
}

#[test]
fn adversarial_truncated() {
    run_fixture("adversarial_truncated");
}

#[test]
fn golden_escaped_keys() {
    run_fixture("golden_escaped_keys");
}
