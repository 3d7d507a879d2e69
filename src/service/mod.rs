//! Caller-facing operations over the item and cart stores.
//!
//! This is the surface a request front end invokes with already-parsed
//! arguments. Expected outcomes (missing records, rejected drafts) come
//! back as typed values; only storage-integrity faults propagate as
//! opaque store errors.

mod carts;
mod items;

use crate::cart::ShoppingCart;
use crate::catalog::{Item, ItemDraftError};
use crate::config::ServiceConfig;
use crate::storage::{BlobStore, FsBlobStore};
use crate::store::{DocumentId, DocumentStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

/// Caller-facing error type for service operations.
#[derive(Error, Debug)]
pub enum ShopError {
    #[error("item {0} does not exist")]
    ItemNotFound(DocumentId),

    #[error("shopping cart {0} does not exist")]
    CartNotFound(DocumentId),

    #[error("validation failed: {0}")]
    Validation(#[from] ItemDraftError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of a delete operation.
///
/// A delete failure after the record was confirmed to exist is reported as
/// data (`success == false`), not as an error; only "never existed" is an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deletion {
    pub deleted_id: DocumentId,
    pub success: bool,
}

/// The catalog/cart service.
///
/// Owns one document store per record kind; both share the blob handle
/// injected at construction.
pub struct ShopService {
    items: DocumentStore<Item>,
    carts: DocumentStore<ShoppingCart>,
}

impl ShopService {
    /// Build a service over an injected storage handle.
    #[must_use]
    pub fn new(blob: Arc<dyn BlobStore>) -> Self {
        ShopService {
            items: DocumentStore::new(Arc::clone(&blob)),
            carts: DocumentStore::new(blob),
        }
    }

    /// Open the service over a filesystem blob store at the configured
    /// data directory. Called once at service start.
    #[must_use]
    pub fn open(config: &ServiceConfig) -> Self {
        Self::new(Arc::new(FsBlobStore::new(config.data_dir.clone())))
    }
}

/// Map a store-level miss to the item-flavored caller error.
fn item_error(err: StoreError) -> ShopError {
    match err {
        StoreError::NotFound(id) => ShopError::ItemNotFound(id),
        other => ShopError::Store(other),
    }
}

/// Map a store-level miss to the cart-flavored caller error.
fn cart_error(err: StoreError) -> ShopError {
    match err {
        StoreError::NotFound(id) => ShopError::CartNotFound(id),
        other => ShopError::Store(other),
    }
}
