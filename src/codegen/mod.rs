//! Extraction code generation from marked structural paths.
//!
//! Given a set of paths into a JSON document, this module emits pandas
//! statements that pull the corresponding values out of a string-typed
//! column into columns of their own. Two modes are available:
//!
//! - **Deduplicated** (default): shared path prefixes are extracted once
//!   into intermediate columns and referenced by every path below them.
//!   The pipeline is paths → prefix trie → cut plan → renamed plan →
//!   statements.
//! - **Simple**: one independent, fully-qualified statement per path.
//!
//! Each call is a pure function of its inputs; nothing persists between
//! calls.
//!
//! # Example
//!
//! ```
//! use parsequill::codegen::CodeGenerator;
//! use parsequill::jsonpath::Parser;
//!
//! let generator = CodeGenerator::new("df['log']", "df");
//! let paths = vec![
//!     Parser::parse("$.user.name").unwrap(),
//!     Parser::parse("$.user.email").unwrap(),
//! ];
//! let code = generator.generate(&paths).unwrap();
//! assert_eq!(
//!     code,
//!     "df['user'] = df['log'].str['user']\n\
//!      df['name'] = df['user'].str['name']\n\
//!      df['email'] = df['user'].str['email']"
//! );
//! ```

pub mod error;

mod cuts;
mod emit;
mod names;
mod simple;
mod trie;

pub use error::GenerateError;

use crate::jsonpath::JsonPath;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which generator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorMode {
    /// One independent statement per path, no prefix reuse.
    Simple,
    /// Shared prefixes extracted once into intermediate columns.
    #[default]
    Deduplicated,
}

/// Generates pandas extraction code from a set of structural paths.
///
/// `source` is the expression for the series holding the raw JSON-ish data
/// (e.g. `df['log']`); `target` is the dataframe receiving the extracted
/// columns (e.g. `df`). `root_name`, when non-empty, names an existing
/// column of `target` to chain root-anchored extractions from instead of
/// the raw source.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    source: String,
    target: String,
    root_name: String,
    mode: GeneratorMode,
}

impl CodeGenerator {
    /// Creates a generator with the default (deduplicated) mode and an
    /// empty root name.
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            root_name: String::new(),
            mode: GeneratorMode::default(),
        }
    }

    /// Sets the generation mode.
    pub fn with_mode(mut self, mode: GeneratorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the root display name. Empty (the default) means root-anchored
    /// statements extract from the raw source expression.
    pub fn with_root_name(mut self, root_name: &str) -> Self {
        self.root_name = root_name.to_string();
        self
    }

    /// Generates the extraction statements for the given paths, joined with
    /// newlines, in deterministic order. Duplicate paths are collapsed
    /// (first occurrence wins); an empty path set produces an empty string.
    ///
    /// # Errors
    ///
    /// Fails with `GenerateError::EmptyPath` if any path has zero segments
    /// and with `GenerateError::PathConflict` if two paths disagree on the
    /// container kind at some position. No partial output is produced.
    pub fn generate(&self, paths: &[JsonPath]) -> Result<String, GenerateError> {
        let paths = dedup_paths(paths);
        match self.mode {
            GeneratorMode::Simple => simple::generate(&paths, &self.source, &self.target),
            GeneratorMode::Deduplicated => {
                let root = trie::build_trie(&paths)?;
                let plan = cuts::select_cuts(&root);
                let resolved = names::resolve_names(&plan, &self.root_name);
                Ok(emit::emit(&resolved, &self.source, &self.target))
            }
        }
    }
}

/// Removes repeated paths, preserving first-occurrence order.
fn dedup_paths(paths: &[JsonPath]) -> Vec<JsonPath> {
    let mut seen = HashSet::new();
    paths
        .iter()
        .filter(|path| seen.insert((*path).clone()))
        .cloned()
        .collect()
}
