//! Route discovery by walking the route tree.
//!
//! Rules, applied to every entry below the root:
//!
//! | Entry                                  | Effect                                   |
//! |----------------------------------------|------------------------------------------|
//! | directory starting with `_` or `.`     | skipped with its whole subtree           |
//! | directory named `[...]`                | traversed, name not part of the path     |
//! | other directory                        | traversed, `/name` appended to the path  |
//! | file named like the page marker        | emits the accumulated path (`/` if none) |
//!
//! The root itself is never pruned, whatever its name. Symbolic links are
//! followed, so a linked directory or marker counts like the real thing.
//! Siblings are visited in file name order so reruns are reproducible.

use super::RoutePath;
use jwalk::{Parallelism, WalkDir};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Failure to read the route tree.
#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("cannot read routes directory `{0}`")]
    Root(PathBuf, #[source] io::Error),

    #[error("routes path `{0}` is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to read routes directory `{0}`")]
    Walk(PathBuf, #[source] jwalk::Error),
}

/// Discover page routes under `root`.
///
/// Returns routes in traversal order, duplicates kept. Any unreadable
/// directory aborts the whole discovery.
pub fn discover_routes(root: &Path, marker: &str) -> Result<Vec<RoutePath>, DiscoverError> {
    let metadata = fs::metadata(root).map_err(|err| DiscoverError::Root(root.to_path_buf(), err))?;
    if !metadata.is_dir() {
        return Err(DiscoverError::NotADirectory(root.to_path_buf()));
    }

    let walker = WalkDir::new(root)
        .parallelism(Parallelism::Serial)
        .skip_hidden(false)
        .follow_links(true)
        .sort(true)
        .process_read_dir(|depth, _path, _state, children| {
            // `None` is the pseudo-listing holding the root entry itself
            if depth.is_none() {
                return;
            }
            children.retain(|child| {
                child.as_ref().map_or(true, |entry| {
                    !(entry.file_type().is_dir() && is_private(entry.file_name()))
                })
            });
        });

    let mut routes = Vec::new();
    for entry in walker {
        let mut entry = entry.map_err(|err| DiscoverError::Walk(root.to_path_buf(), err))?;
        if let Some(err) = entry.read_children_error.take() {
            return Err(DiscoverError::Walk(entry.path(), err));
        }

        if entry.depth == 0 || !entry.file_type().is_file() || entry.file_name() != marker {
            continue;
        }

        let parent = entry.parent_path();
        let Ok(relative) = parent.strip_prefix(root) else {
            continue;
        };
        routes.push(route_for_dir(relative));
    }

    Ok(routes)
}

/// Map a directory (relative to the route root) to its route.
fn route_for_dir(relative: &Path) -> RoutePath {
    let segments = relative.components().filter_map(|component| match component {
        Component::Normal(name) => {
            let name = name.to_string_lossy();
            (!is_dynamic(&name)).then(|| name.into_owned())
        }
        _ => None,
    });
    RoutePath::from_segments(segments)
}

/// Private directories (`_drafts`, `.svelte-kit`) never produce routes.
#[inline]
fn is_private(name: &OsStr) -> bool {
    let name = name.as_encoded_bytes();
    matches!(name.first(), Some(b'_' | b'.'))
}

/// Dynamic segment directories (`[id]`, `[...rest]`).
#[inline]
fn is_dynamic(name: &str) -> bool {
    name.len() >= 2 && name.starts_with('[') && name.ends_with(']')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MARKER: &str = "+page.svelte";

    /// Create `files` (relative paths) under a fresh temp dir.
    fn route_tree(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "<script></script>").unwrap();
        }
        dir
    }

    fn discover(dir: &TempDir) -> Vec<String> {
        discover_routes(dir.path(), MARKER)
            .unwrap()
            .into_iter()
            .map(|r| r.to_string())
            .collect()
    }

    #[test]
    fn test_empty_tree() {
        let dir = route_tree(&["lib/utils.ts", "+layout.svelte", "about/+page.svelte.bak"]);
        assert!(discover(&dir).is_empty());

        fs::write(dir.path().join("about/+page.svelte"), "").unwrap();
        assert_eq!(discover(&dir), ["/about"]);
    }

    #[test]
    fn test_private_named_root_is_walked() {
        for root_name in ["_routes", ".routes"] {
            let dir = route_tree(&[]);
            let root = dir.path().join(root_name);
            fs::create_dir_all(root.join("pricing")).unwrap();
            fs::create_dir_all(root.join("_drafts")).unwrap();
            fs::write(root.join(MARKER), "").unwrap();
            fs::write(root.join("pricing").join(MARKER), "").unwrap();
            fs::write(root.join("_drafts").join(MARKER), "").unwrap();

            let routes: Vec<_> = discover_routes(&root, MARKER)
                .unwrap()
                .into_iter()
                .map(|r| r.to_string())
                .collect();
            assert_eq!(routes, ["/", "/pricing"], "root named {root_name}");
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subtree_fails() {
        use std::os::unix::fs::PermissionsExt;

        let dir = route_tree(&["+page.svelte", "locked/+page.svelte", "open/+page.svelte"]);
        let locked = dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to root
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = discover_routes(dir.path(), MARKER);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(err, DiscoverError::Walk(ref path, _) if path.ends_with("locked")));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_followed() {
        use std::os::unix::fs::symlink;

        let shared = route_tree(&["+page.svelte"]);
        let dir = route_tree(&["+page.svelte", "real/+page.svelte"]);
        symlink(dir.path().join("real"), dir.path().join("linked")).unwrap();
        fs::create_dir(dir.path().join("file-link")).unwrap();
        symlink(shared.path().join(MARKER), dir.path().join("file-link").join(MARKER)).unwrap();

        assert_eq!(discover(&dir), ["/", "/file-link", "/linked", "/real"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_fails() {
        use std::os::unix::fs::symlink;

        let dir = route_tree(&["+page.svelte"]);
        symlink(dir.path().join("missing"), dir.path().join("dangling")).unwrap();

        assert!(matches!(
            discover_routes(dir.path(), MARKER),
            Err(DiscoverError::Walk(..))
        ));
    }

    #[test]
    fn test_root_marker() {
        let dir = route_tree(&["+page.svelte"]);
        assert_eq!(discover(&dir), ["/"]);
    }

    #[test]
    fn test_nested_marker_only_in_leaf() {
        let dir = route_tree(&["a/b/+page.svelte", "a/+layout.svelte"]);
        assert_eq!(discover(&dir), ["/a/b"]);
    }

    #[test]
    fn test_private_dirs_skipped() {
        let dir = route_tree(&[
            "_drafts/+page.svelte",
            "_drafts/nested/+page.svelte",
            ".svelte-kit/+page.svelte",
            "about/+page.svelte",
        ]);
        assert_eq!(discover(&dir), ["/about"]);
    }

    #[test]
    fn test_dynamic_segment_elided() {
        let dir = route_tree(&["[slug]/+page.svelte"]);
        assert_eq!(discover(&dir), ["/"]);

        let dir = route_tree(&["blog/[id]/+page.svelte"]);
        assert_eq!(discover(&dir), ["/blog"]);
    }

    #[test]
    fn test_dynamic_segment_in_middle() {
        let dir = route_tree(&["users/[id]/settings/+page.svelte"]);
        assert_eq!(discover(&dir), ["/users/settings"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let dir = route_tree(&["blog/+page.svelte", "blog/[id]/+page.svelte"]);
        assert_eq!(discover(&dir), ["/blog", "/blog"]);
    }

    #[test]
    fn test_marker_must_be_a_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("odd/+page.svelte")).unwrap();
        assert!(discover(&dir).is_empty());
    }

    #[test]
    fn test_private_files_are_not_dirs() {
        // Only directories are pruned by prefix; a marker is never private.
        let dir = route_tree(&["_notes.md", "+page.svelte"]);
        assert_eq!(discover(&dir), ["/"]);
    }

    #[test]
    fn test_scenario_sorted_traversal() {
        let dir = route_tree(&[
            "pricing/+page.svelte",
            "+page.svelte",
            "blog/[id]/+page.svelte",
            "write/+page.svelte",
        ]);
        assert_eq!(discover(&dir), ["/", "/blog", "/pricing", "/write"]);
    }

    #[test]
    fn test_custom_marker() {
        let dir = route_tree(&["docs/index.md", "docs/+page.svelte"]);
        let routes = discover_routes(dir.path(), "index.md").unwrap();
        assert_eq!(routes, [RoutePath::from_segments(["docs"])]);
    }

    #[test]
    fn test_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = discover_routes(&missing, MARKER).unwrap_err();
        assert!(matches!(err, DiscoverError::Root(..)));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_file_root_fails() {
        let dir = route_tree(&["+page.svelte"]);
        let file = dir.path().join(MARKER);

        let err = discover_routes(&file, MARKER).unwrap_err();
        assert!(matches!(err, DiscoverError::NotADirectory(_)));
    }

    #[test]
    fn test_is_dynamic() {
        assert!(is_dynamic("[id]"));
        assert!(is_dynamic("[...rest]"));
        assert!(is_dynamic("[[optional]]"));
        assert!(!is_dynamic("["));
        assert!(!is_dynamic("[id"));
        assert!(!is_dynamic("pricing"));
    }

    #[test]
    fn test_is_private() {
        assert!(is_private(OsStr::new("_drafts")));
        assert!(is_private(OsStr::new(".git")));
        assert!(!is_private(OsStr::new("pricing")));
        assert!(!is_private(OsStr::new("[id]")));
    }
}
