use log::trace;

use crate::{
    constants::{TS_DECLARATION_SUFFIX, TS_SOURCE_EXTENSION},
    types::FileEntry,
};

/// Per-run settings that drive both target selection and resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Output extension, always starting with `.`
    pub extension: String,
    /// Index `.ts` sources and parse with the TypeScript grammar
    pub typescript: bool,
}

impl ResolveOptions {
    pub fn new(extension: &str, typescript: bool) -> Self {
        let extension = if extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{}", extension)
        };
        trace!("Resolve options: extension={}, typescript={}", extension, typescript);
        Self { extension, typescript }
    }

    /// Whether `entry` is a file that gets indexed and rewritten.
    ///
    /// The configured extension matches case-insensitively; the `.ts` rule
    /// (TypeScript mode only) is case-sensitive and excludes `.d.ts`.
    pub fn is_target(&self, entry: &FileEntry) -> bool {
        if !entry.is_file {
            return false;
        }
        let name = entry.path.to_string_lossy();

        let ts_source = self.typescript
            && name.ends_with(TS_SOURCE_EXTENSION)
            && !name.ends_with(TS_DECLARATION_SUFFIX);

        ts_source || name.to_lowercase().ends_with(&self.extension.to_lowercase())
    }
}
