use log::{debug, trace};
use path_clean::clean;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{
    constants::{COMPILED_JS_EXTENSION, INDEX_STEM, TS_SOURCE_EXTENSION},
    error::EsmifyError,
    index::FileIndex,
    options::ResolveOptions,
};

/// Resolves a relative `request` found in `from_file` to its explicit form.
///
/// `from_file` is relative to the source root, like the index keys. The
/// candidates are tried in order:
/// 1. the joined path itself is indexed: `request` is returned unchanged
/// 2. `<path><ext>` (or `<path>.ts` in TypeScript mode): `<request><ext>`
/// 3. `<path>/index<ext>` (or `<path>/index.ts`): `<request>/index<ext>`
/// 4. TypeScript mode, `<path>` ends with `.js` and the `.ts` sibling is
///    indexed: `request` is returned unchanged
///
/// The configured extension is appended even when only a `.ts` source
/// matched, since rewritten specifiers name the compiled output.
pub fn resolve(
    from_file: &Path,
    request: &str,
    index: &FileIndex,
    options: &ResolveOptions,
) -> Result<String, EsmifyError> {
    trace!("Resolving: '{}' from {}", request, from_file.display());
    let base = from_file.parent().unwrap_or(Path::new(""));
    let joined = clean(base.join(request));
    let ext = options.extension.as_str();
    // A trailing slash always names a directory, so only the index rule applies
    let names_dir = request.ends_with('/');

    if !names_dir && index.contains(&joined) {
        trace!("'{}' already names an indexed file", request);
        return Ok(request.to_string());
    }

    if !names_dir
        && (index.contains(&with_suffix(&joined, ext))
            || (options.typescript && index.contains(&with_suffix(&joined, TS_SOURCE_EXTENSION))))
    {
        let explicit = format!("{}{}", request, ext);
        debug!("Rewriting '{}' to '{}' in {}", request, explicit, from_file.display());
        return Ok(explicit);
    }

    let index_file = format!("{}{}", INDEX_STEM, ext);
    let ts_index_file = format!("{}{}", INDEX_STEM, TS_SOURCE_EXTENSION);
    if index.contains(&child(&joined, &index_file))
        || (options.typescript && index.contains(&child(&joined, &ts_index_file)))
    {
        let explicit = format!("{}/{}", request.trim_end_matches('/'), index_file);
        debug!(
            "Rewriting directory import '{}' to '{}' in {}",
            request,
            explicit,
            from_file.display()
        );
        return Ok(explicit);
    }

    if options.typescript
        && !names_dir
        && let Some(stem) = joined.to_str().and_then(|p| p.strip_suffix(COMPILED_JS_EXTENSION))
        && index.contains(Path::new(&format!("{}{}", stem, TS_SOURCE_EXTENSION)))
    {
        trace!("'{}' names the compiled output of an indexed .ts source", request);
        return Ok(request.to_string());
    }

    debug!("Failed to resolve '{}' from {}", request, from_file.display());
    Err(EsmifyError::Unresolved {
        file: from_file.display().to_string(),
        request: request.to_string(),
    })
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s = OsString::from(path.as_os_str());
    s.push(suffix);
    PathBuf::from(s)
}

/// `path.join(name)`, except that the root itself (`.`) is not kept as a prefix
fn child(path: &Path, name: &str) -> PathBuf {
    if path == Path::new(".") { PathBuf::from(name) } else { path.join(name) }
}
