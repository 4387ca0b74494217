//! Forced removal of leftover packaging directories.
//!
//! The engine sometimes leaves a staging directory next to the package
//! it produced, and entries inside it can carry the read-only
//! attribute.

use crate::error::{CoreError, CoreResult};

use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Recursively deletes `path`, clearing read-only bits where needed.
///
/// When removing an entry fails with a permission error, the read-only
/// attribute is cleared on the entry and its containing directory and
/// the removal of that entry is retried once. Any other failure, or a
/// failure that survives the retry, is returned as
/// `CoreError::Cleanup` - the tree is either fully removed or the
/// error is signaled, never silently left half-deleted.
pub fn force_remove_tree(path: &Path) -> CoreResult<()> {
    remove_tree(path).map_err(|source| CoreError::Cleanup {
        path: path.to_path_buf(),
        source,
    })
}

fn remove_tree(dir: &Path) -> io::Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            make_writable(dir)?;
            fs::read_dir(dir)?
        }
        Err(e) => return Err(e),
    };

    for entry in entries {
        let entry = entry?;
        let entry_path = entry.path();
        let is_dir = entry.file_type()?.is_dir();

        let removed = if is_dir {
            remove_tree(&entry_path)
        } else {
            fs::remove_file(&entry_path)
        };

        if let Err(e) = removed {
            if e.kind() != io::ErrorKind::PermissionDenied {
                return Err(e);
            }
            debug!(
                "Clearing read-only attribute for removal of {}",
                entry_path.display()
            );
            make_writable(dir)?;
            make_writable(&entry_path)?;
            if is_dir {
                remove_tree(&entry_path)?;
            } else {
                fs::remove_file(&entry_path)?;
            }
        }
    }

    match fs::remove_dir(dir) {
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            if let Some(parent) = dir.parent() {
                make_writable(parent)?;
            }
            fs::remove_dir(dir)
        }
        other => other,
    }
}

/// Grants write permission on a single filesystem entry.
///
/// On unix the owner-write bit is widened because a read-only
/// containing directory, not the entry's own mode, is what blocks the
/// removal; elsewhere the read-only attribute is cleared.
fn make_writable(path: &Path) -> io::Result<()> {
    let metadata = fs::metadata(path)?;
    let mut permissions = metadata.permissions();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        permissions.set_mode(permissions.mode() | 0o200);
    }
    #[cfg(not(unix))]
    permissions.set_readonly(false);
    fs::set_permissions(path, permissions)
}
