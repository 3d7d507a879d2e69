//! Catalog items.

mod validate;

pub use validate::{validate_price, validate_title, ItemDraftError};

use crate::store::{Document, DocumentId};
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// Items are immutable once created: they are replaced by delete-and-create,
/// never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: DocumentId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl Document for Item {
    const NAMESPACE: &'static str = "items";

    fn id(&self) -> &DocumentId {
        &self.id
    }
}

/// Options for creating an item
#[derive(Debug, Clone, Default)]
pub struct CreateItemOptions {
    pub title: String,
    pub price: f64,
    /// Defaults to empty when not provided.
    pub description: Option<String>,
}

impl CreateItemOptions {
    /// Validate the draft.
    ///
    /// # Errors
    ///
    /// Rejects an empty (or whitespace-only) title and a price that is not
    /// a finite, non-negative number.
    pub fn validate(&self) -> Result<(), ItemDraftError> {
        validate_title(&self.title)?;
        validate_price(self.price)?;
        Ok(())
    }

    /// Bind the draft to a store-allocated identifier.
    #[must_use]
    pub fn into_item(self, id: DocumentId) -> Item {
        Item {
            id,
            title: self.title,
            price: self.price,
            description: self.description.unwrap_or_default(),
        }
    }
}
