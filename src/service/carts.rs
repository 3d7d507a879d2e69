//! Shopping cart operations and the mutation protocol.
//!
//! Both mutations verify the cart first and the item second, so the cart
//! error wins when both records are missing. The read-modify-write itself
//! runs under the cart's critical section in the document store.

use super::{cart_error, Deletion, ShopError, ShopService};
use crate::cart::ShoppingCart;
use crate::store::{DocumentId, StoreError};
use tracing::{debug, info, warn};

impl ShopService {
    /// Create a new, empty shopping cart.
    pub async fn create_cart(&self) -> Result<ShoppingCart, ShopError> {
        let cart = self.carts.create(ShoppingCart::empty).await?;
        info!(id = %cart.id, "shopping cart created");
        Ok(cart)
    }

    /// Fetch a single cart by identifier.
    pub async fn get_cart(&self, cart_id: &DocumentId) -> Result<ShoppingCart, ShopError> {
        self.carts.get(cart_id).await.map_err(cart_error)
    }

    /// Add a snapshot of a catalog item to a cart.
    ///
    /// The snapshot copies the item's fields as they are right now; the
    /// cart total is recomputed from the full resulting list and the
    /// updated cart is persisted and returned.
    ///
    /// # Errors
    ///
    /// `CartNotFound` / `ItemNotFound` when either record is missing.
    pub async fn add_to_cart(
        &self,
        cart_id: &DocumentId,
        item_id: &DocumentId,
    ) -> Result<ShoppingCart, ShopError> {
        if !self.carts.contains(cart_id).await? {
            return Err(ShopError::CartNotFound(cart_id.clone()));
        }
        let item = self.get_item(item_id).await?;

        let cart = self
            .carts
            .update(cart_id, |cart| cart.add_snapshot(&item))
            .await
            .map_err(cart_error)?;
        debug!(cart = %cart.id, item = %item.id, total = cart.total_price, "item added to cart");
        Ok(cart)
    }

    /// Remove every snapshot of a catalog item from a cart.
    ///
    /// The item must exist in the catalog even when none of its snapshots
    /// are in the cart; removing an absent item persists the cart
    /// unchanged (with its total recomputed) and succeeds.
    ///
    /// # Errors
    ///
    /// `CartNotFound` / `ItemNotFound` when either record is missing.
    pub async fn remove_from_cart(
        &self,
        cart_id: &DocumentId,
        item_id: &DocumentId,
    ) -> Result<ShoppingCart, ShopError> {
        if !self.carts.contains(cart_id).await? {
            return Err(ShopError::CartNotFound(cart_id.clone()));
        }
        let item = self.get_item(item_id).await?;

        let mut removed = 0;
        let cart = self
            .carts
            .update(cart_id, |cart| {
                removed = cart.remove_snapshots(&item.id);
            })
            .await
            .map_err(cart_error)?;
        if removed == 0 {
            debug!(cart = %cart.id, item = %item_id, "item was not in cart; returned unchanged");
        } else {
            debug!(cart = %cart.id, item = %item_id, removed, total = cart.total_price, "item removed from cart");
        }
        Ok(cart)
    }

    /// Delete a shopping cart.
    pub async fn delete_cart(&self, cart_id: &DocumentId) -> Result<Deletion, ShopError> {
        match self.carts.delete(cart_id).await {
            Ok(()) => {
                info!(id = %cart_id, "shopping cart deleted");
                Ok(Deletion {
                    deleted_id: cart_id.clone(),
                    success: true,
                })
            }
            Err(StoreError::NotFound(id)) => Err(ShopError::CartNotFound(id)),
            Err(StoreError::DeleteFailed { id, source }) => {
                warn!(%id, error = %source, "cart delete failed after existence check");
                Ok(Deletion {
                    deleted_id: id,
                    success: false,
                })
            }
            Err(other) => Err(other.into()),
        }
    }
}
