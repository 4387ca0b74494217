//! Discovery of map documents eligible for export.
//!
//! Scans the top level of the input directory for map documents
//! (case-insensitive extension match). Subdirectories are not searched.

use crate::config::DOCUMENT_EXTENSION;
use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Finds map documents eligible for export in the specified directory.
///
/// Documents come back in filesystem listing order, which is
/// platform-defined and not necessarily alphabetical.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - paths of the discovered map documents
/// * `Err(CoreError::Io)` - if the directory cannot be read
/// * `Err(CoreError::NoDocumentsFound)` - if no map documents are present
pub fn find_map_documents(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let documents: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();

            if !path.is_file() {
                return None;
            }

            path.extension()
                .and_then(|ext| ext.to_str())
                .filter(|ext_str| ext_str.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
                .map(|_| path.clone())
        })
        .collect();

    if documents.is_empty() {
        Err(CoreError::NoDocumentsFound)
    } else {
        Ok(documents)
    }
}
