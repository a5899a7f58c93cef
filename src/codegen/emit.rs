//! Pandas statement rendering for the deduplicated plan.

use super::names::ResolvedEntry;
use crate::jsonpath::Segment;

/// Renders one `.str[...]` accessor for a segment. Keys are quoted with
/// single quotes (backslash-escaped), indices are bare numerals.
pub(crate) fn accessor(segment: &Segment) -> String {
    match segment {
        Segment::Key(k) => format!(
            ".str['{}']",
            k.replace('\\', "\\\\").replace('\'', "\\'")
        ),
        Segment::Index(i) => format!(".str[{}]", i),
    }
}

/// Renders the resolved plan as newline-joined assignment statements, in
/// discovery order. An entry anchored at an empty name extracts from the
/// raw `source` expression; all other entries chain off a previously
/// emitted column of `target`.
pub(crate) fn emit(entries: &[ResolvedEntry], source: &str, target: &str) -> String {
    let mut statements = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut rhs = if entry.anchor_name.is_empty() {
            source.to_string()
        } else {
            format!("{}['{}']", target, entry.anchor_name)
        };
        for segment in &entry.segments {
            rhs.push_str(&accessor(segment));
        }
        statements.push(format!("{}['{}'] = {}", target, entry.name, rhs));
    }
    statements.join("\n")
}
