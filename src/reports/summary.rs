//! Summary totals
//!
//! Income/expense totals and their balance over a record subset,
//! accumulated in integer cents.

use crate::models::{Money, Transaction, TransactionKind};

/// Totals for a (possibly filtered) record subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub income: Money,
    pub expense: Money,
    /// Always `income - expense`
    pub balance: Money,
}

/// Sum amounts by kind over the given records
pub fn summary(records: &[Transaction]) -> Summary {
    let mut income = Money::zero();
    let mut expense = Money::zero();

    for txn in records {
        match txn.kind {
            TransactionKind::Income => income += txn.amount,
            TransactionKind::Expense => expense += txn.amount,
        }
    }

    Summary {
        income,
        expense,
        balance: income - expense,
    }
}
