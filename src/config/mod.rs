//! Configuration for Spendlite
//!
//! Only path resolution lives here; the ledger itself has no settings.

pub mod paths;

pub use paths::SpendlitePaths;
