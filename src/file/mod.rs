//! File I/O operations for JSON documents.
//!
//! This module provides functionality to load JSON documents from disk or
//! stdin, with transparent gzip decompression.

pub mod loader;
