//! Unified error type for document store operations.

use super::id::DocumentId;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors surfaced by a document store.
///
/// `NotFound` is an expected outcome and always distinct from `Corrupt`:
/// bytes that exist but do not parse as the document shape are an integrity
/// violation, never a missing record.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("document {0} not found")]
    NotFound(DocumentId),

    #[error("document {id} is corrupt")]
    Corrupt {
        id: DocumentId,
        #[source]
        source: serde_json::Error,
    },

    #[error("document {id} exists but could not be deleted")]
    DeleteFailed {
        id: DocumentId,
        #[source]
        source: StorageError,
    },

    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl StoreError {
    /// Whether this error means the document simply does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
