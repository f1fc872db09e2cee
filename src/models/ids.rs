//! Strongly-typed transaction identifier
//!
//! Ids are opaque strings: freshly created records get a UUID v4, while CSV
//! import preserves whatever id the file carries so that re-importing the
//! same export replaces records instead of duplicating them. The newtype
//! keeps raw strings from being passed where an id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a [`Transaction`](super::Transaction)
///
/// Immutable after creation. Generated ids are collision-resistant
/// (UUID v4); uniqueness is not actively re-checked on insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generate a new random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// View the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TransactionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
