use oxc_span::Span;
use std::path::PathBuf;

/// One entry discovered under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the source root
    pub path: PathBuf,
    /// Path on disk
    pub full_path: PathBuf,
    pub is_dir: bool,
    pub is_file: bool,
}

/// A module specifier found in a declaration that imports from another module.
#[derive(Debug, Clone)]
pub struct Specifier {
    pub request: String,
    pub kind: SpecKind,
    /// Span of the string literal, quotes included
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    /// `import x from './a'`, `import './a'`
    Import,
    /// `export { x } from './a'`
    ExportNamed,
    /// `export * from './a'`, `export * as ns from './a'`
    ExportAll,
}

/// Rewritten source text for one file.
#[derive(Debug, Clone)]
pub struct Rewrite {
    pub code: String,
    /// Number of specifiers whose value changed
    pub rewritten: usize,
}
