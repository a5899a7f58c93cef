//! Cut-point selection over the path trie.
//!
//! A cut point is a trie node that receives its own placeholder and its own
//! extraction statement: the root (which anchors every chain at the external
//! source), any branching node (shared structure is extracted once and
//! referenced by each branch), and any materialized node. Single-child
//! chains between cut points are folded into the accumulated relative path,
//! so linear prefixes never cost an intermediate extraction.

use super::trie::TrieNode;
use crate::jsonpath::Segment;

/// Dense identifier of a cut point, in discovery (pre-order) order.
/// Id 0 is always the root.
pub(crate) type PlaceholderId = usize;

/// Where a cut point's value is extracted from: segments applied to the
/// nearest ancestor cut point, or to the external source for the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RefPath {
    /// Nearest ancestor cut point, or `None` for the root entry.
    pub anchor: Option<PlaceholderId>,
    /// Relative path from the anchor. Empty only for the root.
    pub segments: Vec<Segment>,
}

/// The ordered extraction plan: one `RefPath` per placeholder, indexed by
/// `PlaceholderId`. Entry 0 is the root and is never emitted unless the
/// root itself was materialized (which an empty-path check rules out).
#[derive(Debug, Clone, Default)]
pub(crate) struct CutPlan {
    pub entries: Vec<RefPath>,
}

impl CutPlan {
    fn alloc(&mut self, entry: RefPath) -> PlaceholderId {
        self.entries.push(entry);
        self.entries.len() - 1
    }
}

/// Walks the trie and produces the cut plan.
pub(crate) fn select_cuts(root: &TrieNode) -> CutPlan {
    let mut plan = CutPlan::default();
    let start = RefPath {
        anchor: None,
        segments: Vec::new(),
    };
    visit(root, start, &mut plan);
    plan
}

fn visit(node: &TrieNode, ref_path: RefPath, plan: &mut CutPlan) {
    match node.children.first() {
        Some((segment, child)) if node.children.len() == 1 && !node.materialize => {
            // Pass-through node: fold the single segment into the
            // accumulated path. The root still claims its placeholder
            // before folding so every chain has an anchor.
            let ref_path = if plan.entries.is_empty() {
                let root_id = plan.alloc(RefPath {
                    anchor: None,
                    segments: Vec::new(),
                });
                RefPath {
                    anchor: Some(root_id),
                    segments: Vec::new(),
                }
            } else {
                ref_path
            };

            let mut extended = ref_path;
            extended.segments.push(segment.clone());
            visit(child, extended, plan);
        }
        _ => {
            // Root, branching node, or materialized node: allocate a
            // placeholder for the accumulated path and restart the relative
            // path at each child.
            let id = plan.alloc(ref_path);
            for (segment, child) in &node.children {
                visit(
                    child,
                    RefPath {
                        anchor: Some(id),
                        segments: vec![segment.clone()],
                    },
                    plan,
                );
            }
        }
    }
}
