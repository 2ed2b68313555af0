use std::path::Path;

use venue_engine::build_directory;
use venue_types::Program;

fn load_sample() -> Program {
    let path = Path::new("tests/samples/program.json");
    let raw = std::fs::read_to_string(path).expect("Failed to read sample program");
    serde_json::from_str(&raw).expect("Failed to parse sample program")
}

#[test]
fn test_conference_directory() {
    let program = load_sample();
    let directory = build_directory(&program);

    assert!(!directory.is_empty(), "Expected at least one profile");

    let json = serde_json::to_string_pretty(&directory).unwrap();
    insta::assert_snapshot!("conference_directory", json);
}

#[test]
fn test_directory_is_idempotent() {
    let program = load_sample();
    assert_eq!(build_directory(&program), build_directory(&program));
}

#[test]
fn test_directory_has_unique_slugs() {
    let program = load_sample();
    let directory = build_directory(&program);

    let mut slugs: Vec<&str> = directory.iter().map(|p| p.slug.as_str()).collect();
    let count = slugs.len();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), count, "duplicate slug in directory");
}
