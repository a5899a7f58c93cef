//! Prefix tree over the marked path set.
//!
//! Each edge is one path segment; a node represents the set of input paths
//! sharing that prefix. Nodes reached by the last segment of an input path
//! are flagged `materialize`, meaning the value at that location must appear
//! in the generated output. Sibling order is first-insertion order, which
//! makes the downstream cut-point discovery order deterministic.

use super::error::GenerateError;
use crate::jsonpath::{JsonPath, Segment};
use indexmap::IndexMap;

/// A node in the path trie.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    /// Children keyed by the next segment, in first-insertion order.
    pub children: IndexMap<Segment, TrieNode>,
    /// True if some input path terminates exactly here.
    pub materialize: bool,
}

impl TrieNode {
    /// Inserts one path below this node, creating intermediate nodes as
    /// needed. Inserting the same path twice is a no-op.
    fn insert(&mut self, path: &JsonPath) -> Result<(), GenerateError> {
        if path.is_empty() {
            return Err(GenerateError::EmptyPath);
        }

        let mut node = self;
        for segment in &path.segments {
            // Siblings must agree on container kind: a node is either an
            // object (key children) or an array (index children).
            if let Some((existing, _)) = node.children.first() {
                if existing.is_index() != segment.is_index() {
                    return Err(GenerateError::PathConflict {
                        path: path.clone(),
                        segment: segment.clone(),
                        conflicting: existing.clone(),
                    });
                }
            }
            node = node.children.entry(segment.clone()).or_default();
        }
        node.materialize = true;
        Ok(())
    }
}

/// Builds the trie for the given path collection.
///
/// Fails with `EmptyPath` if any path has zero segments and with
/// `PathConflict` if two paths disagree on the container kind at some
/// position. On failure no partial result is returned.
pub(crate) fn build_trie(paths: &[JsonPath]) -> Result<TrieNode, GenerateError> {
    let mut root = TrieNode::default();
    for path in paths {
        root.insert(path)?;
    }
    Ok(root)
}
