//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `resolve_under` - tilde expansion, then resolve relative to a base directory

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// Paths that do not exist yet (like an output file) take the fallback.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a configured path against `base`.
///
/// `~` is expanded first; absolute results are kept as-is.
///
/// # Example
/// ```ignore
/// // base = /srv/frontend
/// resolve_under(Path::new("/srv/frontend"), Path::new("src/routes"));  // /srv/frontend/src/routes
/// resolve_under(Path::new("/srv/frontend"), Path::new("~/routes"));    // $HOME/routes
/// ```
pub fn resolve_under(base: &Path, path: &Path) -> PathBuf {
    let expanded = match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    };

    if expanded.is_absolute() {
        normalize_path(&expanded)
    } else {
        normalize_path(&base.join(expanded))
    }
}
