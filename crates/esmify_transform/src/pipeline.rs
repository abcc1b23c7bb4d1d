use anyhow::{Context, Result};
use esmify_core::{FileEntry, FileIndex, ResolveOptions, rewrite_source};
use log::{debug, info, trace};
use std::{fs, path::Path};

use crate::{config::Config, progress::Progress, types::TransformResult};

/// Rewrites every target file under `cfg.source`, either in place or into `cfg.dest`.
///
/// The source tree is indexed completely before the first file is touched.
/// Entries are then processed one at a time in traversal order and the first
/// failure aborts the run; files already written stay on disk.
pub fn run_transform<P: Progress>(cfg: &Config, progress: &mut P) -> Result<TransformResult> {
    info!("Starting transform of {}", cfg.source.display());
    cfg.validate()?;

    let options = cfg.resolve_options();
    let output_root = cfg.output_root();
    debug!("Options: {:?}, output: {:?}", options, output_root);

    let index = FileIndex::scan(&cfg.source, &options)?;
    let total = index.target_count();
    info!("Found {} target files in {} entries", total, index.entries().len());

    if let Some(dest) = output_root {
        fs::create_dir_all(dest)
            .with_context(|| format!("Failed to create directory {}", dest.display()))?;
    }

    let mut result = TransformResult::default();
    let mut n = 0;

    for entry in index.entries() {
        if entry.is_dir {
            if let Some(dest) = output_root {
                create_directory(entry, dest)?;
                result.directories_created += 1;
            }
            continue;
        }

        if !index.is_target(entry) {
            if let Some(dest) = output_root {
                copy_file(entry, dest)?;
                result.files_copied += 1;
            }
            continue;
        }

        n += 1;
        progress.on_file_start(entry, n, total)?;
        result.specifiers_rewritten += transform_file(entry, output_root, &index, &options)?;
        result.files_transformed += 1;
    }

    progress.on_done()?;
    info!(
        "Transform complete: {} transformed, {} copied, {} specifiers rewritten",
        result.files_transformed, result.files_copied, result.specifiers_rewritten
    );
    Ok(result)
}

fn create_directory(entry: &FileEntry, dest: &Path) -> Result<()> {
    let target = dest.join(&entry.path);
    trace!("Creating directory {}", target.display());
    fs::create_dir_all(&target)
        .with_context(|| format!("Failed to create directory {}", target.display()))
}

fn copy_file(entry: &FileEntry, dest: &Path) -> Result<()> {
    let target = dest.join(&entry.path);
    trace!("Copying {} to {}", entry.full_path.display(), target.display());
    fs::copy(&entry.full_path, &target).with_context(|| {
        format!("Failed to copy {} to {}", entry.full_path.display(), target.display())
    })?;
    Ok(())
}

/// Returns the number of specifiers whose text changed.
fn transform_file(
    entry: &FileEntry,
    output_root: Option<&Path>,
    index: &FileIndex,
    options: &ResolveOptions,
) -> Result<usize> {
    trace!("Transforming {}", entry.path.display());
    let bytes = fs::read(&entry.full_path)
        .with_context(|| format!("Failed to read {}", entry.full_path.display()))?;
    // Invalid UTF-8 is replaced rather than failing the run
    let source = String::from_utf8_lossy(&bytes);

    let rewrite = rewrite_source(&entry.path, &source, index, options)?;

    let target = match output_root {
        Some(dest) => dest.join(&entry.path),
        None => entry.full_path.clone(),
    };
    fs::write(&target, rewrite.code)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    debug!("Wrote {} ({} specifiers rewritten)", target.display(), rewrite.rewritten);
    Ok(rewrite.rewritten)
}
