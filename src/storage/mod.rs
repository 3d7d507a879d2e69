//! Byte-level blob storage underneath the document stores.
//!
//! The stores never touch the filesystem directly; they go through the
//! [`BlobStore`] handle that is opened once at service start and shared by
//! reference. Keeping the seam here lets tests substitute a misbehaving
//! backend without touching store logic.

mod fs;

pub use fs::FsBlobStore;

use async_trait::async_trait;
use thiserror::Error;

/// Outcome of a create-if-absent write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The record was written; the key was previously unused.
    Created,
    /// A record already exists under the key; nothing was written.
    AlreadyExists,
}

/// Errors surfaced by a blob backend.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no record stored under {namespace}/{id}")]
    NotFound { namespace: String, id: String },
}

impl StorageError {
    pub(crate) fn not_found(namespace: &str, id: &str) -> Self {
        StorageError::NotFound {
            namespace: namespace.to_string(),
            id: id.to_string(),
        }
    }
}

/// Key-value blob storage partitioned into namespaces.
///
/// One record per key. `write` must replace atomically; `create` must be an
/// atomic claim so two concurrent creators of the same key cannot both
/// succeed.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Whether a record exists under the key.
    async fn exists(&self, namespace: &str, id: &str) -> Result<bool, StorageError>;

    /// Read the full record body.
    async fn read(&self, namespace: &str, id: &str) -> Result<Vec<u8>, StorageError>;

    /// Replace the record body atomically, creating it if absent.
    async fn write(&self, namespace: &str, id: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Write the record only if the key is unused.
    async fn create(
        &self,
        namespace: &str,
        id: &str,
        bytes: &[u8],
    ) -> Result<CreateOutcome, StorageError>;

    /// Remove the record.
    async fn delete(&self, namespace: &str, id: &str) -> Result<(), StorageError>;

    /// Enumerate every key in the namespace, in storage order.
    async fn list(&self, namespace: &str) -> Result<Vec<String>, StorageError>;
}
