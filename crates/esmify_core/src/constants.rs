//! Constants for file extensions and specifier shapes.
//!
//! ## Output vs. source extensions
//!
//! The configured extension (default `js`) is what rewritten specifiers end
//! with. In TypeScript mode `.ts` sources are also indexed, but specifiers are
//! still rewritten to the configured extension since they must name the
//! compiled output.

/// Extension used when none is configured (without the leading dot)
pub const DEFAULT_EXTENSION: &str = "js";

/// TypeScript source files indexed in TypeScript mode
pub const TS_SOURCE_EXTENSION: &str = ".ts";

/// Declaration files are never transformed in TypeScript mode
pub const TS_DECLARATION_SUFFIX: &str = ".d.ts";

/// Compiled-output extension a TypeScript project may already import with
pub const COMPILED_JS_EXTENSION: &str = ".js";

/// File stem tried when a specifier names a directory
pub const INDEX_STEM: &str = "index";

/// Whether a specifier is relative (`./` or `../`) and thus subject to rewriting.
pub fn is_relative_specifier(request: &str) -> bool {
    request.starts_with("./") || request.starts_with("../")
}
