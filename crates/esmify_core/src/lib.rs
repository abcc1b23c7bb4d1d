//! Core of esmify: explicit ES module specifiers.
//!
//! This crate provides the pieces that decide how a relative import or
//! re-export specifier is rewritten so strict ESM resolution can load it:
//! - Indexing a source tree once before any rewriting
//! - Selecting target files from the configured extension
//! - Resolving relative specifiers against the index
//! - Rewriting specifier literals in parsed JS/TS sources

mod constants;
mod error;
mod index;
mod options;
mod resolver;
mod rewriter;
mod types;

// Re-export public API
pub use constants::{DEFAULT_EXTENSION, is_relative_specifier};
pub use error::EsmifyError;
pub use index::FileIndex;
pub use options::ResolveOptions;
pub use resolver::resolve;
pub use rewriter::{rewrite_source, specifiers_in};
pub use types::{FileEntry, Rewrite, SpecKind, Specifier};
