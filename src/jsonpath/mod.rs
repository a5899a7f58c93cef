//! Structural paths into JSON documents.
//!
//! This module provides the path representation shared by the renderer and
//! the code generator, plus a parser for path strings supplied on the
//! command line.
//!
//! # Supported Syntax
//!
//! - `$` - Document root
//! - `.property` - Named property access
//! - `['property']` - Bracket notation (quoted, with escapes)
//! - `[index]` - Array index (non-negative)
//!
//! Every path addresses exactly one location; there are no wildcards,
//! slices, or recursive descent, because extraction statements are emitted
//! for concrete locations only.
//!
//! # Examples
//!
//! ```
//! use parsequill::jsonpath::{Parser, Segment};
//!
//! let path = Parser::parse("$.items[0].name").unwrap();
//! assert_eq!(path.segments.len(), 3);
//! assert_eq!(path.segments[1], Segment::Index(0));
//! ```

pub mod ast;
pub mod error;
pub mod parser;

pub use ast::{JsonPath, Segment};
pub use error::JsonPathError;
pub use parser::Parser;
