//! ParseQuill - explore nested JSON as a flat tree and generate pandas
//! extraction code from marked structural paths.
//!
//! The library has two halves:
//!
//! - [`render`] flattens a JSON document into printable lines, each
//!   carrying the structural path to the value it shows, so locations can
//!   be referred to precisely.
//! - [`codegen`] compiles a set of such paths into pandas assignment
//!   statements, either one independent statement per path or a
//!   deduplicated plan that extracts shared prefixes once and chains the
//!   rest off them.
//!
//! [`jsonpath`] holds the shared path representation and a parser for
//! `$.a.b[0]` strings; [`config`] and [`file`] supply TOML configuration
//! and JSON loading for the command-line front end.

pub mod codegen;
pub mod config;
pub mod file;
pub mod jsonpath;
pub mod render;
