//! Monthly income/expense series
//!
//! Buckets records by the `YYYY-MM` prefix of their date for the trend
//! chart. Only months present in the input appear; zero-activity months
//! are never synthesized.

use std::collections::BTreeMap;

use crate::models::{Money, Transaction, TransactionKind};

/// One month's income and expense totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyBucket {
    /// `YYYY-MM` grouping key
    pub month: String,
    pub income: Money,
    pub expense: Money,
}

/// Group records by month, ascending by `YYYY-MM`
pub fn monthly_series(records: &[Transaction]) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<String, (Money, Money)> = BTreeMap::new();

    for txn in records {
        let entry = buckets
            .entry(txn.year_month())
            .or_insert((Money::zero(), Money::zero()));
        match txn.kind {
            TransactionKind::Income => entry.0 += txn.amount,
            TransactionKind::Expense => entry.1 += txn.amount,
        }
    }

    buckets
        .into_iter()
        .map(|(month, (income, expense))| MonthlyBucket {
            month,
            income,
            expense,
        })
        .collect()
}
