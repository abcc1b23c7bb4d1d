use anyhow::{Context, Result, bail};
use ignore::WalkBuilder;
use log::{debug, trace};
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::{options::ResolveOptions, types::FileEntry};

/// Snapshot of a source tree taken before any file is rewritten.
///
/// `entries` holds everything under the root in traversal order (parents
/// before children), while the lookup table only holds target files. All
/// resolution decisions in a run are made against this one snapshot.
#[derive(Debug, Default)]
pub struct FileIndex {
    entries: Vec<FileEntry>,
    targets: HashSet<PathBuf>,
}

impl FileIndex {
    /// Walks `root` and indexes every target file under `options`.
    pub fn scan(root: &Path, options: &ResolveOptions) -> Result<Self> {
        if !root.is_dir() {
            bail!("Source directory {} does not exist", root.display());
        }
        debug!("Walking directory tree from root: {}", root.display());
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut entries = Vec::new();
        for res in walker {
            let dent = res.with_context(|| format!("Failed to walk {}", root.display()))?;
            if dent.depth() == 0 {
                continue;
            }

            let full_path = dent.path().to_path_buf();
            let path = full_path.strip_prefix(root).unwrap_or(&full_path).to_path_buf();
            let file_type = dent.file_type();
            let entry = FileEntry {
                path,
                is_dir: file_type.is_some_and(|t| t.is_dir()),
                is_file: file_type.is_some_and(|t| t.is_file()),
                full_path,
            };
            trace!("Found entry: {}", entry.path.display());
            entries.push(entry);
        }

        let index = Self::from_entries(entries, options);
        debug!("Collected {} entries, {} target files", index.entries.len(), index.target_count());
        Ok(index)
    }

    /// Builds an index from already collected entries, keeping their order.
    pub fn from_entries(entries: Vec<FileEntry>, options: &ResolveOptions) -> Self {
        let targets = entries
            .iter()
            .filter(|entry| options.is_target(entry))
            .map(|entry| entry.path.clone())
            .collect();
        Self { entries, targets }
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Whether `path` (relative to the root) is an indexed target file.
    pub fn contains(&self, path: &Path) -> bool {
        self.targets.contains(path)
    }

    pub fn is_target(&self, entry: &FileEntry) -> bool {
        entry.is_file && self.targets.contains(&entry.path)
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }
}
