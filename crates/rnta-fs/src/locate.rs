//! Locating files relative to a starting directory.
//!
//! Both probes are read-only and report absence as `None`.

use crate::{FileSystem, NormalizedPath};

/// Search `start_dir` and each of its ancestors for `name`.
///
/// Returns the directory containing the first match. `name` may be a
/// relative path such as `node_modules/react-native/package.json`. A
/// relative `start_dir` is anchored at the working directory first, so the
/// walk always reaches the filesystem root.
pub fn find_nearest(
    fs: &dyn FileSystem,
    name: &str,
    start_dir: &NormalizedPath,
) -> Option<NormalizedPath> {
    let start = fs.absolute(start_dir).unwrap_or_else(|e| {
        tracing::debug!(error = %e, start = %start_dir, "cannot anchor start directory");
        start_dir.clone()
    });
    let mut current = Some(start);
    while let Some(dir) = current {
        if fs.exists(&dir.join(name)) {
            tracing::trace!(%name, dir = %dir, "found nearest");
            return Some(dir);
        }
        current = dir.parent();
    }
    None
}

/// Check for `name` directly inside `dir`, without walking anywhere.
pub fn find_file(fs: &dyn FileSystem, name: &str, dir: &NormalizedPath) -> Option<NormalizedPath> {
    let candidate = dir.join(name);
    fs.exists(&candidate).then_some(candidate)
}
