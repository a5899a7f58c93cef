//! Placeholder renaming.
//!
//! Turns the cut plan's placeholder ids into unique, human-readable column
//! names. A name starts as the last segment of the entry's relative path and
//! grows backward into `parent_segment` composites while it collides with an
//! already-assigned name or while the segment just consumed is an array
//! index (bare numerals make poor column names). If the whole relative path
//! is consumed and the composite still collides, a numeric suffix forces
//! uniqueness.

use super::cuts::{CutPlan, RefPath};
use crate::jsonpath::Segment;
use std::collections::HashSet;

/// A placeholder rewritten to its final name, with its reference rewritten
/// to final names as well. An empty `anchor_name` means "extract from the
/// raw external source".
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedEntry {
    pub name: String,
    pub anchor_name: String,
    pub segments: Vec<Segment>,
}

/// Resolves every non-root placeholder to a final name, in allocation
/// order. The root placeholder maps to `root_name` and is not part of the
/// returned list; it participates in collision detection so no produced
/// name can shadow it.
pub(crate) fn resolve_names(plan: &CutPlan, root_name: &str) -> Vec<ResolvedEntry> {
    let mut renames: Vec<String> = vec![root_name.to_string()];
    let mut used: HashSet<String> = HashSet::new();
    used.insert(root_name.to_string());

    let mut resolved = Vec::with_capacity(plan.entries.len().saturating_sub(1));
    for entry in plan.entries.iter().skip(1) {
        // The element sequence walked backward: the anchor's resolved name
        // followed by the relative segments.
        let total = entry.segments.len() + 1;
        let mut pos = total - 1;
        let mut name = element_display(entry, pos, &renames);

        loop {
            if !used.contains(&name) && !element_is_index(entry, pos) {
                break;
            }
            if pos == 0 {
                break;
            }
            pos -= 1;
            name = format!("{}_{}", element_display(entry, pos, &renames), name);
        }

        if used.contains(&name) {
            let mut n = 2;
            loop {
                let candidate = format!("{}_{}", name, n);
                if !used.contains(&candidate) {
                    name = candidate;
                    break;
                }
                n += 1;
            }
        }

        used.insert(name.clone());
        let anchor_name = renames[entry.anchor.expect("non-root entry has anchor")].clone();
        renames.push(name.clone());
        resolved.push(ResolvedEntry {
            name,
            anchor_name,
            segments: entry.segments.clone(),
        });
    }
    resolved
}

/// Display form of element `i` of an entry's reference path, where element 0
/// is the anchor (shown by its resolved name) and element `i > 0` is
/// `segments[i - 1]`.
fn element_display(entry: &RefPath, i: usize, renames: &[String]) -> String {
    if i == 0 {
        renames[entry.anchor.expect("non-root entry has anchor")].clone()
    } else {
        entry.segments[i - 1].display()
    }
}

fn element_is_index(entry: &RefPath, i: usize) -> bool {
    i > 0 && entry.segments[i - 1].is_index()
}
