//! Error types for extraction code generation.

use crate::jsonpath::{JsonPath, Segment};
use std::fmt;

/// Errors that can occur while generating extraction code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// An input path had zero segments. An empty path has no meaningful
    /// extraction statement, so the whole generation call fails.
    EmptyPath,
    /// A path addressed a location with a segment kind that contradicts a
    /// sibling already in the path set (key vs array index at the same
    /// position). The document node cannot be both an object and an array.
    PathConflict {
        /// The path that triggered the conflict.
        path: JsonPath,
        /// The segment of `path` that could not be inserted.
        segment: Segment,
        /// An existing sibling segment of the other kind.
        conflicting: Segment,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::EmptyPath => {
                write!(f, "Empty path: a path must have at least one segment")
            }
            GenerateError::PathConflict {
                path,
                segment,
                conflicting,
            } => write!(
                f,
                "Path conflict in '{}': segment '{}' does not match existing sibling '{}' \
                 (a node cannot be both an object and an array)",
                path,
                segment.display(),
                conflicting.display()
            ),
        }
    }
}

impl std::error::Error for GenerateError {}
