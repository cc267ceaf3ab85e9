//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// An absolute `config_name` is returned as-is when it exists.
///
/// # Example
/// ```text
/// /home/user/noobmail/frontend/src/   ← start
/// /home/user/noobmail/noobmail.toml   ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_start_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("noobmail.toml"), "").unwrap();

        let found = find_config_file(dir.path(), Path::new("noobmail.toml"));
        assert_eq!(found, Some(dir.path().join("noobmail.toml")));
    }

    #[test]
    fn test_find_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("noobmail.toml"), "").unwrap();
        let nested = dir.path().join("frontend/src/routes");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_file(&nested, Path::new("noobmail.toml"));
        assert_eq!(found, Some(dir.path().join("noobmail.toml")));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("noobmail-config-dir.toml")).unwrap();

        let found = find_config_file(dir.path(), Path::new("noobmail-config-dir.toml"));
        assert_eq!(found, None);
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");

        assert_eq!(find_config_file(Path::new("/"), &path), None);
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(Path::new("/"), &path), Some(path));
    }
}
