//! The flattened-line record produced by the formatter.

use crate::jsonpath::JsonPath;
use serde_json::Value;

/// A single printable line of the flattened JSON tree.
///
/// Structural punctuation lines (closing brackets, and the opening bracket
/// of the document root) carry no path and cannot be marked for extraction;
/// every key, array element, and scalar line carries the full structural
/// path to its location.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonLine {
    /// Nesting level, used to compute the indent when printing.
    pub level: usize,
    /// The object key of this line, `None` for array elements, punctuation,
    /// and the root.
    pub key: Option<String>,
    /// The scalar value, `None` for containers and punctuation.
    pub value: Option<Value>,
    /// The formatted text, ready to print after indenting.
    pub text: String,
    /// Structural path to the value this line represents, `None` for
    /// punctuation lines.
    pub path: Option<JsonPath>,
}

impl JsonLine {
    /// Returns true if this line can be marked for extraction.
    pub fn is_selectable(&self) -> bool {
        self.path.is_some()
    }
}
