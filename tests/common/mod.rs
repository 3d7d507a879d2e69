//! Common test utilities

use shopfile::{FsBlobStore, ShopService};
use std::sync::Arc;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Build a service over a fresh filesystem blob store rooted in `temp`.
#[allow(dead_code)] // Not every integration suite goes through the facade
pub fn open_service(temp: &TempDir) -> ShopService {
    ShopService::new(Arc::new(FsBlobStore::new(temp.path())))
}
