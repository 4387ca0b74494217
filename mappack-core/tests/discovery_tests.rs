// mappack-core/tests/discovery_tests.rs

use mappack_core::discovery::find_map_documents;
use mappack_core::error::CoreError;
use std::fs::{self, File};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_find_map_documents() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    // Create some files
    File::create(input_dir.join("city.mxd"))?;
    File::create(input_dir.join("region.MXD"))?; // Test case insensitivity
    File::create(input_dir.join("readme.txt"))?;
    File::create(input_dir.join("city.mpk"))?;
    fs::create_dir(input_dir.join("archive"))?;
    File::create(input_dir.join("archive").join("nested.mxd"))?; // Should not be found (top level only)

    let result = find_map_documents(input_dir);
    assert!(result.is_ok());
    let mut documents = result.unwrap();

    // Sort for consistent comparison
    documents.sort();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].file_name().unwrap(), "city.mxd");
    assert_eq!(documents[1].file_name().unwrap(), "region.MXD"); // Original case preserved

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_map_documents_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    File::create(input_dir.join("readme.txt"))?;
    fs::create_dir(input_dir.join("archive"))?;

    let result = find_map_documents(input_dir);
    assert!(result.is_err());
    match result.err().unwrap() {
        CoreError::NoDocumentsFound => {} // Expected error
        e => panic!("Unexpected error type: {:?}", e),
    }

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_map_documents_nonexistent_dir() {
    let non_existent_path = PathBuf::from("surely_this_does_not_exist_42_integration");
    let result = find_map_documents(&non_existent_path);
    assert!(result.is_err());
    match result.err().unwrap() {
        CoreError::Io(_) => {} // Expected error type
        e => panic!("Unexpected error type: {:?}", e),
    }
}
