//! Flat textual rendering of JSON documents.
//!
//! Converts a nested JSON value into a sequence of printable lines, each
//! carrying its nesting level and (for real key/value/element lines) the
//! structural path to its location. The code generator consumes those paths;
//! the CLI prints the lines.

pub mod formatter;
pub mod line;

pub use formatter::JsonFormatter;
pub use line::JsonLine;
