//! Integration tests for the simple (non-deduplicating) generator.

use parsequill::codegen::{CodeGenerator, GenerateError, GeneratorMode};
use parsequill::jsonpath::{JsonPath, Parser};

fn generator() -> CodeGenerator {
    CodeGenerator::new("df['log']", "df").with_mode(GeneratorMode::Simple)
}

fn parse(path: &str) -> JsonPath {
    Parser::parse(path).unwrap()
}

#[test]
fn test_one_statement_per_path() {
    let code = generator()
        .generate(&[parse("$.user.name"), parse("$.user.email")])
        .unwrap();
    assert_eq!(
        code,
        "df['name'] = df['log'].str['user'].str['name']\n\
         df['email'] = df['log'].str['user'].str['email']"
    );
}

/// No prefix sharing: every statement is fully qualified from the source.
#[test]
fn test_no_intermediate_extractions() {
    let code = generator()
        .generate(&[parse("$.b.x"), parse("$.b.y")])
        .unwrap();
    for line in code.lines() {
        assert!(line.contains("df['log']"), "not root-anchored: {}", line);
    }
    assert_eq!(code.lines().count(), 2);
}

/// Index leaves borrow the parent segment for the column name.
#[test]
fn test_index_leaf_naming() {
    let code = generator().generate(&[parse("$.tags[1]")]).unwrap();
    assert_eq!(code, "df['tags_1'] = df['log'].str['tags'].str[1]");
}

/// Colliding column names get numeric suffixes in encounter order.
#[test]
fn test_repeat_naming() {
    let code = generator()
        .generate(&[parse("$.a.id"), parse("$.b.id"), parse("$.c.id")])
        .unwrap();
    let names: Vec<&str> = code
        .lines()
        .map(|line| {
            let end = line.find("']").unwrap();
            &line[4..end]
        })
        .collect();
    assert_eq!(names, vec!["id", "id_2", "id_3"]);
}

/// Column names stay pairwise distinct even when a path's literal leaf
/// already looks like a suffixed repeat.
#[test]
fn test_names_unique_despite_literal_suffix_leaf() {
    let code = generator()
        .generate(&[parse("$.x.id_2"), parse("$.a.id"), parse("$.b.id")])
        .unwrap();
    let mut names: Vec<String> = code
        .lines()
        .map(|line| {
            let end = line.find("']").unwrap();
            line[4..end].to_string()
        })
        .collect();
    let count = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), count, "duplicate column names in:\n{}", code);
    assert!(names.contains(&"id_3".to_string()));
}

/// Duplicate input paths collapse to a single statement, same as the
/// deduplicated mode.
#[test]
fn test_duplicate_paths_are_idempotent() {
    let once = generator().generate(&[parse("$.a.b")]).unwrap();
    let twice = generator()
        .generate(&[parse("$.a.b"), parse("$.a.b")])
        .unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_empty_path_fails() {
    let err = generator().generate(&[JsonPath::root()]).unwrap_err();
    assert_eq!(err, GenerateError::EmptyPath);
}

#[test]
fn test_empty_path_set() {
    assert_eq!(generator().generate(&[]).unwrap(), "");
}
