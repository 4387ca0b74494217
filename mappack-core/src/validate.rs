//! Directory preconditions for an export run.

use crate::error::{CoreError, CoreResult};

use log::info;
use std::fs;
use std::path::Path;

/// Ensures `path` is an existing directory, creating it if absent.
///
/// A path that exists but refers to a file is reported as
/// `CoreError::NotADirectory` so interactive callers can re-prompt.
/// A failed creation is `CoreError::DirectoryCreation`; callers treat
/// this as fatal rather than running a batch against a missing
/// directory.
pub fn ensure_directory(path: &Path) -> CoreResult<()> {
    if path.exists() {
        if path.is_dir() {
            Ok(())
        } else {
            Err(CoreError::NotADirectory(path.to_path_buf()))
        }
    } else {
        info!("Directory {} does not exist, creating it.", path.display());
        fs::create_dir_all(path).map_err(|source| CoreError::DirectoryCreation {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn existing_directory_is_accepted() {
        let dir = tempdir().unwrap();
        assert!(ensure_directory(dir.path()).is_ok());
    }

    #[test]
    fn missing_directory_is_created() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("logs").join("export");
        assert!(ensure_directory(&target).is_ok());
        assert!(target.is_dir());
    }

    #[test]
    fn file_path_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "not a directory").unwrap();

        match ensure_directory(&file) {
            Err(CoreError::NotADirectory(path)) => assert_eq!(path, file),
            other => panic!("Unexpected result: {:?}", other),
        }
    }
}
