//! Catalog item operations.

use super::{item_error, Deletion, ShopError, ShopService};
use crate::catalog::{CreateItemOptions, Item};
use crate::store::{DocumentId, StoreError};
use tracing::{info, warn};

impl ShopService {
    /// Create a catalog item from a draft.
    ///
    /// # Errors
    ///
    /// `Validation` if the title is empty or the price is not a finite,
    /// non-negative number; nothing is persisted in that case.
    pub async fn create_item(&self, options: CreateItemOptions) -> Result<Item, ShopError> {
        options.validate()?;
        let item = self
            .items
            .create(|id| options.clone().into_item(id))
            .await?;
        info!(id = %item.id, title = %item.title, "item created");
        Ok(item)
    }

    /// Fetch a single item by identifier.
    pub async fn get_item(&self, item_id: &DocumentId) -> Result<Item, ShopError> {
        self.items.get(item_id).await.map_err(item_error)
    }

    /// Fetch every item in the catalog.
    pub async fn list_items(&self) -> Result<Vec<Item>, ShopError> {
        Ok(self.items.get_all().await?)
    }

    /// Delete an item from the catalog.
    ///
    /// Carts that already snapshotted the item are untouched; snapshots are
    /// value copies.
    pub async fn delete_item(&self, item_id: &DocumentId) -> Result<Deletion, ShopError> {
        match self.items.delete(item_id).await {
            Ok(()) => {
                info!(id = %item_id, "item deleted");
                Ok(Deletion {
                    deleted_id: item_id.clone(),
                    success: true,
                })
            }
            Err(StoreError::NotFound(id)) => Err(ShopError::ItemNotFound(id)),
            Err(StoreError::DeleteFailed { id, source }) => {
                warn!(%id, error = %source, "item delete failed after existence check");
                Ok(Deletion {
                    deleted_id: id,
                    success: false,
                })
            }
            Err(other) => Err(other.into()),
        }
    }
}
