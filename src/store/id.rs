//! Store-generated document identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of one stored document.
///
/// Allocated by the store as a random uuid-v4 and immutable afterwards.
/// Callers may construct one from any string for lookups; identifiers that
/// do not have the allocated shape simply resolve to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Generate a fresh candidate identifier.
    ///
    /// Uniqueness is enforced by the store's create-if-absent discipline,
    /// not by the generator.
    #[must_use]
    pub fn generate() -> Self {
        DocumentId(uuid::Uuid::new_v4().to_string())
    }

    /// Whether the identifier has the shape the store allocates.
    ///
    /// Lookups with malformed identifiers resolve to not-found without
    /// touching storage; this also keeps arbitrary caller strings out of
    /// storage key construction.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        uuid::Uuid::parse_str(&self.0).is_ok()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        DocumentId(s)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        DocumentId(s.to_string())
    }
}
