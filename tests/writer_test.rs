//! Filesystem tests for the Locator and Writer collaborators.

use std::fs;

use wp_readme::{find_readme, generate, ConvertOptions, Error};

#[test]
fn test_generate_creates_sibling_readme_txt() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("README.md");
    fs::write(&source, "# Sample Plugin\n\nHello.\n").unwrap();

    let output = generate(&source, &ConvertOptions::new()).unwrap();

    assert_eq!(output.file_name().unwrap(), "readme.txt");
    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "=== Sample Plugin ===\n\nHello.\n");
}

#[test]
fn test_generate_missing_source_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("README.md");

    let err = generate(&source, &ConvertOptions::new()).unwrap_err();
    assert!(matches!(err, Error::NotFound));
    assert_eq!(err.to_string(), "File not found.");
}

#[test]
fn test_generate_overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("README.md");
    fs::write(&source, "# Fresh\n").unwrap();
    fs::write(dir.path().join("readme.txt"), "stale content").unwrap();

    let output = generate(&source, &ConvertOptions::new()).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "=== Fresh ===\n");
}

#[test]
fn test_generate_lowercases_output_name() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("Readme.md");
    fs::write(&source, "body\n").unwrap();

    let output = generate(&source, &ConvertOptions::new()).unwrap();

    assert_eq!(output.file_name().unwrap(), "readme.txt");
}

#[test]
fn test_generate_applies_environment() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("README.md");
    fs::write(
        &source,
        "<!-- not:production/ -->\ninternal notes\n<!-- /not:production -->\nPublic.\n",
    )
    .unwrap();

    let options = ConvertOptions::new().with_env("production");
    let output = generate(&source, &options).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(!content.contains("internal notes"));
    assert!(content.contains("Public."));
}

#[test]
fn test_find_then_generate() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("readme.md"), "# Found\n").unwrap();

    let source = find_readme(dir.path()).unwrap();
    let output = generate(&source, &ConvertOptions::new()).unwrap();

    assert_eq!(fs::read_to_string(output).unwrap(), "=== Found ===\n");
}

#[test]
fn test_find_readme_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(find_readme(dir.path()).is_none());
}
