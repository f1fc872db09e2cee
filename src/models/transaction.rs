//! Transaction model
//!
//! One income or expense entry, plus the raw pre-validation shape shared by
//! the interactive add/edit paths and the CSV decoder.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SpendliteError, SpendliteResult};

use super::ids::TransactionId;
use super::money::Money;

/// Whether an entry adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    /// The fallback kind for unrecognized values on import
    #[default]
    Expense,
}

impl TransactionKind {
    /// The wire form used in CSV and JSON: "income" / "expense"
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single ledger entry
///
/// Invariants upheld by the creation paths: `id` unique within the
/// collection, `category` non-empty (case-preserved for display), `amount`
/// non-negative and rounded to cents, `date` a plain calendar date whose
/// ISO rendering sorts chronologically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Money,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: String,
}

/// Raw user input before validation
///
/// Produced by the CLI's add/edit argument handling; `normalize` turns it
/// into a [`Transaction`] or rejects it.
#[derive(Debug, Clone, Default)]
pub struct RawTransaction {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Money,
    /// `None` means "use the caller-supplied current date"
    pub date: Option<NaiveDate>,
    pub note: String,
}

impl Transaction {
    /// Validate and normalize raw input into a transaction
    ///
    /// Trims category and note, rejects an empty category or a non-positive
    /// amount, and defaults a missing date to `today` (supplied by the
    /// caller; the core has no clock). Add, edit, and the sample loader all
    /// go through this single contract. CSV import deliberately does not;
    /// it defaults malformed fields instead of rejecting rows.
    pub fn normalize(
        id: TransactionId,
        raw: RawTransaction,
        today: NaiveDate,
    ) -> SpendliteResult<Self> {
        let category = raw.category.trim().to_string();
        if category.is_empty() {
            return Err(SpendliteError::InvalidRecord(
                "category must not be empty".into(),
            ));
        }
        if !raw.amount.is_positive() {
            return Err(SpendliteError::InvalidRecord(
                "amount must be a positive number".into(),
            ));
        }

        Ok(Self {
            id,
            kind: raw.kind,
            category,
            amount: raw.amount,
            date: raw.date.unwrap_or(today),
            note: raw.note.trim().to_string(),
        })
    }

    /// The `YYYY-MM` grouping key used by the monthly report
    pub fn year_month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// The `YYYY-MM-DD` form used for display and CSV
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Parse a date field leniently
///
/// Timestamp-like inputs ("2024-01-05T10:30:00Z") are truncated to the
/// first 10 characters and read as ISO `YYYY-MM-DD`. Returns `None` for
/// blank or unparseable input; the import path substitutes the current
/// date in that case.
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let head = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
