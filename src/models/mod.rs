//! Core data models for Spendlite
//!
//! The ledger domain is small: a money type in integer cents, an opaque
//! transaction id, and the transaction record itself with its
//! normalization rules.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::Money;
pub use transaction::{parse_iso_date, RawTransaction, Transaction, TransactionKind};
