//! CSV codec
//!
//! Encodes the collection to CSV text and decodes CSV text back into
//! records for merge-by-id import. The wire format is the fixed header
//! `id,type,category,amount,date,note` with RFC4180 quoting; the header
//! may carry extra or reordered columns on the way in, and `note` is
//! optional.
//!
//! Decoding is deliberately lenient per field: a malformed kind becomes
//! Expense, a malformed or negative amount becomes 0, an empty category
//! becomes "Other", a blank id gets a fresh one, and dates are truncated
//! to `YYYY-MM-DD` with the caller-supplied current date as fallback.
//! Decoded records are NOT re-validated through `normalize`; the strict
//! checks apply to interactive entry only.

use chrono::NaiveDate;

use crate::error::{SpendliteError, SpendliteResult};
use crate::models::{parse_iso_date, Money, Transaction, TransactionId, TransactionKind};

/// Column order of the export header
pub const HEADER: [&str; 6] = ["id", "type", "category", "amount", "date", "note"];

/// Encode records as CSV text, one row per record in collection order
///
/// Fields containing a comma, double quote, or newline are quoted with
/// internal quotes doubled; everything else is written bare. Amounts are
/// fixed two-decimal strings, kinds the literal `income`/`expense`.
pub fn encode(records: &[Transaction]) -> SpendliteResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for txn in records {
        let amount = txn.amount.to_decimal_string();
        let date = txn.date_string();
        writer.write_record([
            txn.id.as_str(),
            txn.kind.as_str(),
            txn.category.as_str(),
            amount.as_str(),
            date.as_str(),
            txn.note.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SpendliteError::Storage(format!("Failed to finish CSV export: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| SpendliteError::Storage(format!("Exported CSV was not UTF-8: {}", e)))
}

/// Decode CSV text into records, mapping fields by header position
///
/// Fails with [`SpendliteError::MissingColumns`] when any of
/// `id,type,category,amount,date` is absent from the header; no partial
/// result is produced in that case. `today` supplies the date fallback
/// for blank or unparseable date fields.
pub fn decode(text: &str, today: NaiveDate) -> SpendliteResult<Vec<Transaction>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SpendliteError::MissingColumns(name.to_string()))
    };

    let id_col = find("id")?;
    let type_col = find("type")?;
    let category_col = find("category")?;
    let amount_col = find("amount")?;
    let date_col = find("date")?;
    let note_col = headers.iter().position(|h| h == "note");

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;

        let id = match row.get(id_col).filter(|s| !s.is_empty()) {
            Some(s) => TransactionId::from(s),
            None => TransactionId::generate(),
        };

        let kind = match row.get(type_col) {
            Some("income") => TransactionKind::Income,
            _ => TransactionKind::Expense,
        };

        let category = match row.get(category_col).filter(|s| !s.is_empty()) {
            Some(s) => s.to_string(),
            None => "Other".to_string(),
        };

        let amount = row
            .get(amount_col)
            .and_then(|s| Money::parse(s).ok())
            .filter(|m| !m.is_negative())
            .unwrap_or_default();

        let date = row.get(date_col).and_then(parse_iso_date).unwrap_or(today);

        let note = note_col
            .and_then(|i| row.get(i))
            .unwrap_or("")
            .to_string();

        records.push(Transaction {
            id,
            kind,
            category,
            amount,
            date,
            note,
        });
    }

    Ok(records)
}
