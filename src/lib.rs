//! Spendlite - local income/expense ledger
//!
//! This library provides the core of the Spendlite ledger: a single-user,
//! file-backed collection of income and expense records with filtering,
//! aggregation, and CSV interchange. The `spendlite` binary is a thin
//! clap front end over these modules.
//!
//! # Architecture
//!
//! - `config`: data-directory resolution
//! - `error`: the crate-wide error type
//! - `models`: money, ids, the transaction record and its normalization
//! - `storage`: JSON file persistence and the transaction store
//! - `filter`: the filter predicate over record snapshots
//! - `reports`: summary totals, monthly series, category totals
//! - `csv`: CSV encode/decode with merge-by-id import semantics
//! - `display`: terminal formatting of registers and reports

pub mod config;
pub mod csv;
pub mod display;
pub mod error;
pub mod filter;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{SpendliteError, SpendliteResult};
