//! Per-category expense totals
//!
//! Feeds the category breakdown chart: expense records grouped by exact
//! category string, largest total first. Also provides the distinct
//! category list used for CLI completion-style listings.

use std::collections::HashMap;

use crate::models::{Money, Transaction, TransactionKind};

/// Total spending for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Expense totals grouped by exact category string
///
/// Unlike the filter engine, grouping here is case-sensitive: "Food" and
/// "food" are distinct buckets. Sorted descending by total; ties keep the
/// order in which the categories first appeared.
pub fn category_totals(records: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for txn in records.iter().filter(|t| t.kind == TransactionKind::Expense) {
        match index.get(&txn.category) {
            Some(&i) => totals[i].total += txn.amount,
            None => {
                index.insert(txn.category.clone(), totals.len());
                totals.push(CategoryTotal {
                    category: txn.category.clone(),
                    total: txn.amount,
                });
            }
        }
    }

    // stable sort keeps first-seen order for equal totals
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// Distinct category names over a record set, sorted alphabetically
pub fn category_names(records: &[Transaction]) -> Vec<String> {
    let mut names: Vec<String> = records.iter().map(|t| t.category.clone()).collect();
    names.sort();
    names.dedup();
    names
}
