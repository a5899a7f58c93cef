//! Non-deduplicating baseline generator.
//!
//! Emits one fully-qualified extraction statement per input path, straight
//! from the source expression through every segment, with no shared-prefix
//! reuse. Kept as a contrast mode: the output is longer but each statement
//! is independent of the others.

use super::emit::accessor;
use super::error::GenerateError;
use crate::jsonpath::JsonPath;
use std::collections::HashSet;

/// Column name for one path: the last segment, or `{parent}_{last}` when
/// the last segment is an index and a parent exists (bare numerals make
/// poor column names).
fn column_name(path: &JsonPath) -> String {
    let last = path.segments.last().expect("path is non-empty");
    if last.is_index() && path.len() > 1 {
        let parent = &path.segments[path.len() - 2];
        format!("{}_{}", parent.display(), last.display())
    } else {
        last.display()
    }
}

/// Generates one statement per path, joined with newlines. Repeated column
/// names get `_2`, `_3`, ... suffixes in encounter order; a suffixed
/// candidate that matches an already-emitted name (for instance a literal
/// `id_2` leaf alongside two `id` leaves) bumps the suffix until unused, so
/// final names are pairwise distinct. Fails with `EmptyPath` if any path
/// has zero segments.
pub(crate) fn generate(
    paths: &[JsonPath],
    source: &str,
    target: &str,
) -> Result<String, GenerateError> {
    let mut used: HashSet<String> = HashSet::new();
    let mut statements = Vec::with_capacity(paths.len());

    for path in paths {
        if path.is_empty() {
            return Err(GenerateError::EmptyPath);
        }

        let mut name = column_name(path);
        if !used.insert(name.clone()) {
            let mut n = 2;
            loop {
                let candidate = format!("{}_{}", name, n);
                if used.insert(candidate.clone()) {
                    name = candidate;
                    break;
                }
                n += 1;
            }
        }

        let mut rhs = source.to_string();
        for segment in &path.segments {
            rhs.push_str(&accessor(segment));
        }
        statements.push(format!("{}['{}'] = {}", target, name, rhs));
    }

    Ok(statements.join("\n"))
}
