//! Terminal display formatting
//!
//! Pure string building for the CLI: the transaction register, summary
//! totals, and report tables. Nothing in here mutates ledger data.

use crate::models::Transaction;
use crate::reports::{CategoryTotal, MonthlyBucket, Summary};

/// Format a register of transactions, most recent first
pub fn format_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut output = String::new();
    output.push_str(&format!(
        "{:10}  {:7}  {:20}  {:>12}  {:20}  {}\n",
        "Date", "Kind", "Category", "Amount", "Note", "Id"
    ));
    output.push_str(&"-".repeat(100));
    output.push('\n');

    for txn in sorted {
        output.push_str(&format!(
            "{:10}  {:7}  {:20}  {:>12}  {:20}  {}\n",
            txn.date_string(),
            txn.kind.to_string(),
            truncate(&txn.category, 20),
            txn.amount.to_string(),
            truncate(&txn.note, 20),
            txn.id
        ));
    }

    output
}

/// Format summary totals
pub fn format_summary(summary: &Summary) -> String {
    format!(
        "Income:  {}\nExpense: {}\nBalance: {}\n",
        summary.income, summary.expense, summary.balance
    )
}

/// Format the monthly income/expense series
pub fn format_monthly_series(series: &[MonthlyBucket]) -> String {
    if series.is_empty() {
        return "No activity in the selected range.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:7}  {:>12}  {:>12}\n",
        "Month", "Income", "Expense"
    ));
    output.push_str(&"-".repeat(35));
    output.push('\n');

    for bucket in series {
        output.push_str(&format!(
            "{:7}  {:>12}  {:>12}\n",
            bucket.month,
            bucket.income.to_string(),
            bucket.expense.to_string()
        ));
    }

    output
}

/// Format per-category expense totals
pub fn format_category_totals(totals: &[CategoryTotal]) -> String {
    if totals.is_empty() {
        return "No expenses in the selected range.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:20}  {:>12}\n", "Category", "Total"));
    output.push_str(&"-".repeat(34));
    output.push('\n');

    for entry in totals {
        output.push_str(&format!(
            "{:20}  {:>12}\n",
            truncate(&entry.category, 20),
            entry.total.to_string()
        ));
    }

    output
}

/// Truncate a string to `max` characters, marking the cut with an ellipsis
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
