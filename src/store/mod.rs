//! Generic identifier-addressed document storage.
//!
//! [`DocumentStore`] owns everything with real invariants: race-free
//! identifier allocation, existence-checked reads and deletes, and the
//! per-identifier critical section that read-modify-write cycles run under.

mod error;
mod id;

pub use error::StoreError;
pub use id::DocumentId;

use crate::storage::{BlobStore, CreateOutcome, StorageError};
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// A persistable document kind with a dedicated storage namespace.
pub trait Document: Serialize + DeserializeOwned + Send + Sync {
    /// Directory name the kind's records are stored under.
    const NAMESPACE: &'static str;

    /// The document's identifier.
    fn id(&self) -> &DocumentId;
}

/// Durable, identifier-addressed storage for one document kind.
///
/// Cheap to share: both domain stores hold the same injected blob handle.
pub struct DocumentStore<T> {
    blob: Arc<dyn BlobStore>,
    // Lock registry keyed by identifier. Entries are created on first touch
    // and never reclaimed; the map grows with the set of ids ever mutated.
    locks: DashMap<DocumentId, Arc<Mutex<()>>>,
    _kind: PhantomData<fn() -> T>,
}

impl<T: Document> DocumentStore<T> {
    /// Build a store over an injected blob handle.
    #[must_use]
    pub fn new(blob: Arc<dyn BlobStore>) -> Self {
        Self {
            blob,
            locks: DashMap::new(),
            _kind: PhantomData,
        }
    }

    /// The exclusive critical section for one identifier.
    ///
    /// Holding the returned mutex spans a whole read-modify-write cycle, so
    /// two concurrent mutations of the same document cannot interleave.
    /// Distinct identifiers lock independently.
    fn lock_for(&self, id: &DocumentId) -> Arc<Mutex<()>> {
        self.locks.entry(id.clone()).or_default().clone()
    }

    /// Allocate an unused identifier and persist the document built for it.
    ///
    /// Generation retries until the create-if-absent write claims a free
    /// key. The retry loop is a correctness requirement: a collision must
    /// never overwrite an existing record, for any document kind.
    pub async fn create<F>(&self, build: F) -> Result<T, StoreError>
    where
        F: Fn(DocumentId) -> T,
    {
        loop {
            let id = DocumentId::generate();
            let doc = build(id.clone());
            let bytes = serde_json::to_vec_pretty(&doc)?;
            match self.blob.create(T::NAMESPACE, id.as_str(), &bytes).await? {
                CreateOutcome::Created => {
                    debug!(namespace = T::NAMESPACE, %id, "document created");
                    return Ok(doc);
                }
                CreateOutcome::AlreadyExists => {
                    warn!(namespace = T::NAMESPACE, %id, "identifier collision, regenerating");
                }
            }
        }
    }

    /// Whether a document exists under the identifier.
    pub async fn contains(&self, id: &DocumentId) -> Result<bool, StoreError> {
        if !id.is_well_formed() {
            return Ok(false);
        }
        Ok(self.blob.exists(T::NAMESPACE, id.as_str()).await?)
    }

    /// Read a document by identifier.
    ///
    /// # Errors
    ///
    /// `NotFound` if the identifier is unknown (or malformed); `Corrupt` if
    /// the stored bytes cannot be parsed as the document shape.
    pub async fn get(&self, id: &DocumentId) -> Result<T, StoreError> {
        if !id.is_well_formed() {
            return Err(StoreError::NotFound(id.clone()));
        }
        let bytes = match self.blob.read(T::NAMESPACE, id.as_str()).await {
            Ok(bytes) => bytes,
            Err(StorageError::NotFound { .. }) => return Err(StoreError::NotFound(id.clone())),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes).map_err(|source| {
            warn!(namespace = T::NAMESPACE, %id, "stored record failed to parse");
            StoreError::Corrupt {
                id: id.clone(),
                source,
            }
        })
    }

    /// Read every document in the namespace.
    ///
    /// Fully materialized before return, in storage-enumeration order.
    /// Records that disappear between enumeration and read are skipped;
    /// records that fail to parse abort with `Corrupt`.
    pub async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        let ids = self.blob.list(T::NAMESPACE).await?;
        let mut docs = Vec::with_capacity(ids.len());
        for raw in ids {
            match self.get(&DocumentId::from(raw)).await {
                Ok(doc) => docs.push(doc),
                Err(StoreError::NotFound(_)) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(docs)
    }

    /// Apply a mutation to a document under its critical section.
    ///
    /// The lock is held across read, mutation, and write; concurrent
    /// updates to the same identifier serialize instead of losing one
    /// another's changes. The persisted document is returned.
    pub async fn update<F>(&self, id: &DocumentId, mutate: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut T),
    {
        let lock = self.lock_for(id);
        let _guard = lock.lock().await;

        let mut doc = self.get(id).await?;
        mutate(&mut doc);
        let bytes = serde_json::to_vec_pretty(&doc)?;
        self.blob.write(T::NAMESPACE, id.as_str(), &bytes).await?;
        debug!(namespace = T::NAMESPACE, %id, "document updated");
        Ok(doc)
    }

    /// Delete a document by identifier.
    ///
    /// # Errors
    ///
    /// `NotFound` if the identifier is unknown; `DeleteFailed` if the
    /// record was confirmed to exist but the underlying remove failed, so
    /// callers can tell "never existed" from "could not be removed".
    pub async fn delete(&self, id: &DocumentId) -> Result<(), StoreError> {
        if !id.is_well_formed() {
            return Err(StoreError::NotFound(id.clone()));
        }
        let lock = self.lock_for(id);
        let _guard = lock.lock().await;

        if !self.blob.exists(T::NAMESPACE, id.as_str()).await? {
            return Err(StoreError::NotFound(id.clone()));
        }
        match self.blob.delete(T::NAMESPACE, id.as_str()).await {
            Ok(()) => {
                debug!(namespace = T::NAMESPACE, %id, "document deleted");
                Ok(())
            }
            Err(StorageError::NotFound { .. }) => Err(StoreError::NotFound(id.clone())),
            Err(source) => Err(StoreError::DeleteFailed {
                id: id.clone(),
                source,
            }),
        }
    }
}
