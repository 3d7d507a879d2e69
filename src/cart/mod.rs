//! Shopping carts and the item snapshots they own.

use crate::catalog::Item;
use crate::store::{Document, DocumentId};
use serde::{Deserialize, Serialize};

/// Value copy of a catalog item embedded in a cart.
///
/// Decoupled from the catalog record at the moment of snapshotting: later
/// edits or deletion of the source item never reach carts that already
/// hold a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: DocumentId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}

impl From<&Item> for CartEntry {
    fn from(item: &Item) -> Self {
        CartEntry {
            id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            price: item.price,
        }
    }
}

/// A shopping cart.
///
/// `total_price` always equals the sum of the snapshot prices; every
/// mutation goes through [`ShoppingCart::add_snapshot`] or
/// [`ShoppingCart::remove_snapshots`], which recompute it from the full
/// list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingCart {
    pub id: DocumentId,
    pub items: Vec<CartEntry>,
    pub total_price: f64,
}

impl Document for ShoppingCart {
    const NAMESPACE: &'static str = "shoppingcarts";

    fn id(&self) -> &DocumentId {
        &self.id
    }
}

impl ShoppingCart {
    /// A new empty cart bound to a store-allocated identifier.
    #[must_use]
    pub fn empty(id: DocumentId) -> Self {
        ShoppingCart {
            id,
            items: Vec::new(),
            total_price: 0.0,
        }
    }

    /// Append a snapshot of `item` and bring the total back in line.
    ///
    /// Duplicates are allowed; insertion order is preserved.
    pub fn add_snapshot(&mut self, item: &Item) {
        self.items.push(CartEntry::from(item));
        self.recompute_total();
    }

    /// Drop every snapshot of `item_id` and bring the total back in line.
    ///
    /// Filter-rebuild, so adjacent duplicates are all removed in one pass.
    /// Returns how many snapshots were dropped; zero is not an error.
    pub fn remove_snapshots(&mut self, item_id: &DocumentId) -> usize {
        let before = self.items.len();
        self.items.retain(|entry| entry.id != *item_id);
        self.recompute_total();
        before - self.items.len()
    }

    // Full recomputation over the current list, never an incremental
    // adjustment, so a bad stored total cannot survive a mutation.
    fn recompute_total(&mut self) {
        self.total_price = self.items.iter().map(|entry| entry.price).sum();
    }
}
