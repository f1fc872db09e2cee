//! The transaction store
//!
//! Single source of truth for the record collection. The collection keeps
//! insertion order; filter, aggregation, and codec callers read snapshots
//! via [`TransactionStore::all`] and never mutate them directly.
//!
//! Every mutation writes the full collection back to the data file as a
//! JSON array. A failed write is logged and the mutation still succeeds:
//! the in-memory collection stays authoritative for the session.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::warn;

use crate::error::{SpendliteError, SpendliteResult};
use crate::models::{RawTransaction, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Owner of the canonical, ordered record collection
pub struct TransactionStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create a store backed by the given data file, without loading it
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            transactions: Vec::new(),
        }
    }

    /// Create a store and load the persisted collection
    ///
    /// A missing data file yields an empty collection; a corrupt one is a
    /// storage error.
    pub fn open(path: PathBuf) -> SpendliteResult<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// (Re)load the collection from disk
    pub fn load(&mut self) -> SpendliteResult<()> {
        self.transactions = read_json(&self.path)?;
        Ok(())
    }

    /// Read-only snapshot of the collection, in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of records in the collection
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Look up a record by id
    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Normalize raw input, assign a fresh id, and append
    pub fn add(&mut self, raw: RawTransaction, today: NaiveDate) -> SpendliteResult<Transaction> {
        let txn = Transaction::normalize(TransactionId::generate(), raw, today)?;
        self.transactions.push(txn.clone());
        self.persist();
        Ok(txn)
    }

    /// Replace all mutable fields of the record matching `id`
    ///
    /// An absent id is signaled as [`SpendliteError::NotFound`]; callers
    /// treat that as a no-op, never a hard failure. Invalid input is
    /// rejected the same way as `add`.
    pub fn update(
        &mut self,
        id: &TransactionId,
        raw: RawTransaction,
        today: NaiveDate,
    ) -> SpendliteResult<()> {
        let Some(pos) = self.transactions.iter().position(|t| &t.id == id) else {
            return Err(SpendliteError::NotFound(id.to_string()));
        };

        self.transactions[pos] = Transaction::normalize(id.clone(), raw, today)?;
        self.persist();
        Ok(())
    }

    /// Delete the record matching `id`
    ///
    /// An absent id is signaled as [`SpendliteError::NotFound`], treated
    /// by callers as a no-op.
    pub fn remove(&mut self, id: &TransactionId) -> SpendliteResult<()> {
        let before = self.transactions.len();
        self.transactions.retain(|t| &t.id != id);
        if self.transactions.len() == before {
            return Err(SpendliteError::NotFound(id.to_string()));
        }
        self.persist();
        Ok(())
    }

    /// Merge decoded CSV records into the collection
    ///
    /// A record whose id matches an existing one replaces it in place,
    /// keeping its position; unknown ids are appended in input order.
    /// Re-importing the same file is therefore idempotent. Returns the
    /// number of records merged.
    pub fn merge_import(&mut self, incoming: Vec<Transaction>) -> usize {
        let merged = incoming.len();
        for txn in incoming {
            match self.transactions.iter().position(|t| t.id == txn.id) {
                Some(pos) => self.transactions[pos] = txn,
                None => self.transactions.push(txn),
            }
        }
        self.persist();
        merged
    }

    fn persist(&self) {
        if let Err(err) = write_json_atomic(&self.path, &self.transactions) {
            warn!(
                path = %self.path.display(),
                error = %err,
                "failed to persist ledger; in-memory data remains authoritative"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn raw(kind: TransactionKind, category: &str, cents: i64, date: &str) -> RawTransaction {
        RawTransaction {
            kind,
            category: category.to_string(),
            amount: Money::from_cents(cents),
            date: crate::models::parse_iso_date(date),
            note: String::new(),
        }
    }

    fn create_test_store() -> (TempDir, TransactionStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let store = TransactionStore::open(path).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_and_get() {
        let (_temp_dir, mut store) = create_test_store();

        let txn = store
            .add(raw(TransactionKind::Expense, "Rent", 120000, "2024-01-02"), today())
            .unwrap();

        assert_eq!(store.len(), 1);
        let stored = store.get(&txn.id).unwrap();
        assert_eq!(stored.category, "Rent");
        assert_eq!(stored.amount, Money::from_cents(120000));
    }

    #[test]
    fn test_add_assigns_distinct_ids() {
        let (_temp_dir, mut store) = create_test_store();

        let a = store
            .add(raw(TransactionKind::Expense, "Rent", 120000, "2024-01-02"), today())
            .unwrap();
        let b = store
            .add(raw(TransactionKind::Expense, "Rent", 120000, "2024-01-02"), today())
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_rejects_invalid_input_and_leaves_store_unchanged() {
        let (_temp_dir, mut store) = create_test_store();

        let err = store
            .add(raw(TransactionKind::Expense, "", 100, "2024-01-02"), today())
            .unwrap_err();
        assert!(err.is_invalid_record());
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_replaces_fields_but_not_id() {
        let (_temp_dir, mut store) = create_test_store();

        let txn = store
            .add(raw(TransactionKind::Expense, "Rent", 120000, "2024-01-02"), today())
            .unwrap();

        store
            .update(
                &txn.id,
                raw(TransactionKind::Income, "Refund", 5000, "2024-02-01"),
                today(),
            )
            .unwrap();

        let stored = store.get(&txn.id).unwrap();
        assert_eq!(stored.kind, TransactionKind::Income);
        assert_eq!(stored.category, "Refund");
        assert_eq!(stored.id, txn.id);
    }

    #[test]
    fn test_update_unknown_id_signals_not_found() {
        let (_temp_dir, mut store) = create_test_store();

        let err = store
            .update(
                &TransactionId::from("missing"),
                raw(TransactionKind::Expense, "Rent", 120000, "2024-01-02"),
                today(),
            )
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, mut store) = create_test_store();

        let txn = store
            .add(raw(TransactionKind::Expense, "Rent", 120000, "2024-01-02"), today())
            .unwrap();

        store.remove(&txn.id).unwrap();
        assert!(store.is_empty());
        assert!(store.remove(&txn.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_merge_import_replaces_in_place_and_appends() {
        let (_temp_dir, mut store) = create_test_store();

        let first = store
            .add(raw(TransactionKind::Expense, "Rent", 120000, "2024-01-02"), today())
            .unwrap();
        let second = store
            .add(raw(TransactionKind::Expense, "Groceries", 18045, "2024-01-05"), today())
            .unwrap();

        let mut replacement = first.clone();
        replacement.amount = Money::from_cents(130000);
        let newcomer = Transaction {
            id: TransactionId::from("imported-1"),
            kind: TransactionKind::Income,
            category: "Freelance".to_string(),
            amount: Money::from_cents(42000),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            note: String::new(),
        };

        let merged = store.merge_import(vec![replacement.clone(), newcomer.clone()]);
        assert_eq!(merged, 2);
        assert_eq!(store.len(), 3);

        // replaced record kept its position, newcomer went to the end
        assert_eq!(store.all()[0], replacement);
        assert_eq!(store.all()[1], second);
        assert_eq!(store.all()[2], newcomer);
    }

    #[test]
    fn test_merge_import_is_idempotent() {
        let (_temp_dir, mut store) = create_test_store();

        let records = vec![
            Transaction {
                id: TransactionId::from("a"),
                kind: TransactionKind::Income,
                category: "Salary".to_string(),
                amount: Money::from_cents(350000),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                note: String::new(),
            },
            Transaction {
                id: TransactionId::from("b"),
                kind: TransactionKind::Expense,
                category: "Rent".to_string(),
                amount: Money::from_cents(120000),
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                note: String::new(),
            },
        ];

        store.merge_import(records.clone());
        let after_first: Vec<_> = store.all().to_vec();

        store.merge_import(records);
        assert_eq!(store.all(), after_first.as_slice());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, mut store) = create_test_store();

        let txn = store
            .add(raw(TransactionKind::Expense, "Rent", 120000, "2024-01-02"), today())
            .unwrap();

        let path = temp_dir.path().join("transactions.json");
        let reloaded = TransactionStore::open(path).unwrap();

        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get(&txn.id).unwrap(), &txn);
    }

    #[test]
    fn test_persisted_format_is_a_json_array() {
        let (temp_dir, mut store) = create_test_store();

        store
            .add(raw(TransactionKind::Expense, "Rent", 120000, "2024-01-02"), today())
            .unwrap();

        let text =
            std::fs::read_to_string(temp_dir.path().join("transactions.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }
}
