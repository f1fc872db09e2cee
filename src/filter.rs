//! Filter engine
//!
//! Evaluates a [`FilterSpec`] against a record snapshot and produces the
//! order-preserving subsequence of matching transactions. The spec is
//! transient state built from CLI flags; it is never persisted.

use chrono::NaiveDate;

use crate::models::{Transaction, TransactionKind};

/// Kind narrowing: everything, or a single kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Only(TransactionKind),
}

/// The set of user-chosen narrowing criteria
///
/// A record is kept only if every populated clause matches. The default
/// spec keeps everything.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub kind: KindFilter,
    /// Case-insensitive exact category match; empty means "any"
    pub category: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// Case-insensitive substring search over "category note"
    pub search: String,
}

impl FilterSpec {
    /// Create an empty (match-all) filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only one kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = KindFilter::Only(kind);
        self
    }

    /// Keep only an exact category (compared case-insensitively)
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Keep records dated on or after `from`
    pub fn date_from(mut self, from: NaiveDate) -> Self {
        self.date_from = Some(from);
        self
    }

    /// Keep records dated on or before `to`
    pub fn date_to(mut self, to: NaiveDate) -> Self {
        self.date_to = Some(to);
        self
    }

    /// Keep records whose category or note contains `search`
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Check a single record against every clause
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let KindFilter::Only(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }

        if !self.category.is_empty()
            && txn.category.to_lowercase() != self.category.to_lowercase()
        {
            return false;
        }

        if let Some(from) = self.date_from {
            if txn.date < from {
                return false;
            }
        }

        if let Some(to) = self.date_to {
            if txn.date > to {
                return false;
            }
        }

        if !self.search.is_empty() {
            let haystack = format!("{} {}", txn.category, txn.note).to_lowercase();
            if !haystack.contains(&self.search.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

/// Apply a filter to a record snapshot
///
/// Returns the matching records in their original relative order.
pub fn apply(records: &[Transaction], spec: &FilterSpec) -> Vec<Transaction> {
    records
        .iter()
        .filter(|txn| spec.matches(txn))
        .cloned()
        .collect()
}
