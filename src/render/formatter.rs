//! Flattening walk over a JSON value.

use super::line::JsonLine;
use crate::jsonpath::{JsonPath, Segment};
use serde_json::Value;

/// Flattens a JSON value into printable, indented lines with per-line
/// structural paths.
///
/// Keys and rendered scalar values are truncated to the configured maxima
/// (in characters) so a pathological document cannot blow up the display.
///
/// # Example
///
/// ```
/// use parsequill::render::JsonFormatter;
/// use serde_json::json;
///
/// let formatter = JsonFormatter::new(50, 50);
/// let lines = formatter.flatten(&json!({"name": "Alice"}));
/// assert_eq!(lines[1].text, "\"name\": \"Alice\",");
/// assert_eq!(lines[1].path.as_ref().unwrap().to_string(), "$.name");
/// ```
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    max_key_length: usize,
    max_value_length: usize,
}

impl JsonFormatter {
    /// Creates a formatter with the given key and value truncation limits.
    pub fn new(max_key_length: usize, max_value_length: usize) -> Self {
        Self {
            max_key_length,
            max_value_length,
        }
    }

    /// Flattens the value into display lines, in document order.
    pub fn flatten(&self, value: &Value) -> Vec<JsonLine> {
        let mut lines = Vec::new();
        self.walk(value, None, 0, &JsonPath::root(), &mut lines);
        lines
    }

    /// Renders the flattened value as plain text, one line per record,
    /// indented `indent_size` spaces per nesting level.
    pub fn render_text(&self, value: &Value, indent_size: usize) -> String {
        self.flatten(value)
            .iter()
            .map(|line| format!("{}{}", " ".repeat(indent_size * line.level), line.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn walk(
        &self,
        value: &Value,
        key: Option<&str>,
        level: usize,
        path: &JsonPath,
        lines: &mut Vec<JsonLine>,
    ) {
        match value {
            Value::Object(fields) => {
                lines.push(self.open_line(key, '{', level, path));
                for (k, child) in fields {
                    let child_path = path.child(Segment::Key(k.clone()));
                    self.walk(child, Some(k.as_str()), level + 1, &child_path, lines);
                }
                lines.push(close_line("},", level));
            }
            Value::Array(elements) => {
                lines.push(self.open_line(key, '[', level, path));
                for (i, child) in elements.iter().enumerate() {
                    let child_path = path.child(Segment::Index(i));
                    self.walk(child, None, level + 1, &child_path, lines);
                }
                lines.push(close_line("],", level));
            }
            scalar => {
                let rendered = self.render_scalar(scalar);
                let text = match key {
                    Some(k) => format!("\"{}\": {},", self.truncate_key(k), rendered),
                    None => format!("{},", rendered),
                };
                lines.push(JsonLine {
                    level,
                    key: key.map(str::to_string),
                    value: Some(scalar.clone()),
                    text,
                    path: selectable_path(path),
                });
            }
        }
    }

    fn open_line(&self, key: Option<&str>, bracket: char, level: usize, path: &JsonPath) -> JsonLine {
        let text = match key {
            Some(k) => format!("\"{}\": {}", self.truncate_key(k), bracket),
            None => bracket.to_string(),
        };
        JsonLine {
            level,
            key: key.map(str::to_string),
            value: None,
            text,
            path: selectable_path(path),
        }
    }

    fn truncate_key(&self, key: &str) -> String {
        truncate_chars(key, self.max_key_length)
    }

    fn render_scalar(&self, value: &Value) -> String {
        match value {
            Value::String(s) => format!("\"{}\"", truncate_chars(s, self.max_value_length)),
            other => truncate_chars(&other.to_string(), self.max_value_length),
        }
    }
}

impl Default for JsonFormatter {
    /// Formatter with 50-character key and value limits.
    fn default() -> Self {
        Self::new(50, 50)
    }
}

/// Closing brackets are pure punctuation and carry no path.
fn close_line(text: &str, level: usize) -> JsonLine {
    JsonLine {
        level,
        key: None,
        value: None,
        text: text.to_string(),
        path: None,
    }
}

/// The root's own line is not selectable: an empty path has no extraction
/// statement.
fn selectable_path(path: &JsonPath) -> Option<JsonPath> {
    if path.is_empty() {
        None
    } else {
        Some(path.clone())
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
