//! Integration tests for path parsing and display.

use parsequill::jsonpath::{JsonPath, JsonPathError, Parser, Segment};

#[test]
fn test_parse_mixed_path() {
    let path = Parser::parse("$.store.book[2]['publish date']").unwrap();
    assert_eq!(
        path.segments,
        vec![
            Segment::Key("store".to_string()),
            Segment::Key("book".to_string()),
            Segment::Index(2),
            Segment::Key("publish date".to_string()),
        ]
    );
}

#[test]
fn test_display_roundtrip() {
    for input in ["$", "$.a", "$.a.b[0]", "$['odd key'].x", "$[3][4]"] {
        let path = Parser::parse(input).unwrap();
        let shown = path.to_string();
        let reparsed = Parser::parse(&shown).unwrap();
        assert_eq!(path, reparsed, "roundtrip failed for {}", input);
    }
}

#[test]
fn test_paths_compare_by_full_segment_sequence() {
    let a = Parser::parse("$.a.b").unwrap();
    let b = Parser::parse("$['a']['b']").unwrap();
    assert_eq!(a, b);

    // A numeric key and an index are different segments.
    let keyed = JsonPath::new(vec![Segment::Key("0".to_string())]);
    let indexed = JsonPath::new(vec![Segment::Index(0)]);
    assert_ne!(keyed, indexed);
}

#[test]
fn test_error_reports_position() {
    let err = Parser::parse("$.a.!").unwrap_err();
    match err {
        JsonPathError::InvalidSyntax { message } => {
            assert!(message.contains("identifier"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_unterminated_bracket_fails() {
    assert!(Parser::parse("$.a[0").is_err());
    assert!(Parser::parse("$['a'").is_err());
    assert!(Parser::parse("$['a").is_err());
}
