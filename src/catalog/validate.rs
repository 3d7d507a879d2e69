//! Draft validation for catalog items.

use thiserror::Error;

/// Error type for item draft validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ItemDraftError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("price must be a finite, non-negative number (got {0})")]
    InvalidPrice(f64),
}

/// Validate an item title.
///
/// Titles that are empty after trimming are rejected.
pub fn validate_title(title: &str) -> Result<(), ItemDraftError> {
    if title.trim().is_empty() {
        return Err(ItemDraftError::EmptyTitle);
    }
    Ok(())
}

/// Validate an item price.
///
/// NaN, infinities, and negative values are rejected before anything is
/// persisted.
pub fn validate_price(price: f64) -> Result<(), ItemDraftError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ItemDraftError::InvalidPrice(price));
    }
    Ok(())
}
