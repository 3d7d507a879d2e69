pub mod cart;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod service;
pub mod storage;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use cart::{CartEntry, ShoppingCart};
pub use catalog::{CreateItemOptions, Item, ItemDraftError};
pub use config::ServiceConfig;
pub use service::{Deletion, ShopError, ShopService};
pub use storage::{BlobStore, CreateOutcome, FsBlobStore, StorageError};
pub use store::{Document, DocumentId, DocumentStore, StoreError};
