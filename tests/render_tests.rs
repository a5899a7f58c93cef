//! Integration tests for the JSON flattener, including the handoff from
//! flattened lines to the code generator.

use parsequill::codegen::CodeGenerator;
use parsequill::jsonpath::JsonPath;
use parsequill::render::JsonFormatter;
use serde_json::json;

fn sample() -> serde_json::Value {
    json!({
        "user": {
            "name": "Alice",
            "email": "alice@example.com"
        },
        "items": [
            {"name": "first", "price": 10},
            {"name": "second", "price": 20}
        ],
        "active": true
    })
}

#[test]
fn test_render_text_shape() {
    let text = JsonFormatter::default().render_text(&sample(), 2);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "{");
    assert_eq!(lines[1], "  \"user\": {");
    assert_eq!(lines[2], "    \"name\": \"Alice\",");
    assert_eq!(lines[3], "    \"email\": \"alice@example.com\",");
    assert_eq!(lines[4], "  },");
    assert_eq!(lines[5], "  \"items\": [");
    assert_eq!(lines[6], "    {");
    assert_eq!(*lines.last().unwrap(), "},");
}

#[test]
fn test_every_real_line_has_a_path() {
    let lines = JsonFormatter::default().flatten(&sample());
    for line in &lines {
        let is_punctuation =
            line.key.is_none() && line.value.is_none() && matches!(line.text.as_str(), "{" | "[" | "}," | "],");
        if is_punctuation {
            continue;
        }
        assert!(
            line.is_selectable(),
            "real line without a path: {:?}",
            line.text
        );
    }
}

#[test]
fn test_document_order_is_preserved() {
    let lines = JsonFormatter::default().flatten(&sample());
    let paths: Vec<String> = lines
        .iter()
        .filter_map(|l| l.path.as_ref().map(|p| p.to_string()))
        .collect();
    assert_eq!(
        paths,
        vec![
            "$.user",
            "$.user.name",
            "$.user.email",
            "$.items",
            "$.items[0]",
            "$.items[0].name",
            "$.items[0].price",
            "$.items[1]",
            "$.items[1].name",
            "$.items[1].price",
            "$.active",
        ]
    );
}

#[test]
fn test_scalar_root_document() {
    let lines = JsonFormatter::default().flatten(&json!(42));
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "42,");
    // The root itself cannot be marked for extraction.
    assert!(!lines[0].is_selectable());
}

#[test]
fn test_empty_containers() {
    let lines = JsonFormatter::default().flatten(&json!({"xs": [], "o": {}}));
    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["{", "\"xs\": [", "],", "\"o\": {", "},", "},"]
    );
}

/// Marked lines from the flattener feed straight into the generator: pick
/// every "name" line of the sample and generate deduplicated extractions.
#[test]
fn test_flattened_paths_drive_generation() {
    let lines = JsonFormatter::default().flatten(&sample());
    let marked: Vec<JsonPath> = lines
        .iter()
        .filter(|l| l.key.as_deref() == Some("name"))
        .filter_map(|l| l.path.clone())
        .collect();
    assert_eq!(marked.len(), 3);

    let code = CodeGenerator::new("df['log']", "df")
        .generate(&marked)
        .unwrap();
    assert_eq!(
        code,
        "df['name'] = df['log'].str['user'].str['name']\n\
         df['items'] = df['log'].str['items']\n\
         df['items_0_name'] = df['items'].str[0].str['name']\n\
         df['items_1_name'] = df['items'].str[1].str['name']"
    );
}
