//! Structural path types for addressing locations inside a JSON document.

use std::fmt;

/// A single step in a structural path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Named field of an object (`.name` or `['name']`)
    Key(String),
    /// Element of an array (`[0]`)
    Index(usize),
}

impl Segment {
    /// Returns true if this segment indexes into an array.
    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }

    /// Returns the segment as a display string: the key itself, or the
    /// decimal numeral for an index.
    pub fn display(&self) -> String {
        match self {
            Segment::Key(k) => k.clone(),
            Segment::Index(i) => i.to_string(),
        }
    }
}

/// A concrete path from the document root to one location.
///
/// Unlike query languages with wildcards or slices, every segment addresses
/// exactly one child, so a path identifies at most one node. Path equality
/// is full segment-sequence equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    /// Segments that make up the path. Empty for the document root.
    pub segments: Vec<Segment>,
}

impl JsonPath {
    /// Creates a new path from the given segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The root path (no segments).
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns a new path with one more segment appended.
    pub fn child(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for JsonPath {
    /// Renders the path in `$.a.b[0]` form. Keys that are not plain
    /// identifiers use bracket notation: `$['odd key']`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.segments {
            match segment {
                Segment::Key(k) if is_plain_identifier(k) => write!(f, ".{}", k)?,
                Segment::Key(k) => write!(f, "['{}']", k.replace('\\', "\\\\").replace('\'', "\\'"))?,
                Segment::Index(i) => write!(f, "[{}]", i)?,
            }
        }
        Ok(())
    }
}

fn is_plain_identifier(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '-')
        && !key.chars().next().is_some_and(|ch| ch.is_ascii_digit())
}
