//! Card ledger.
//!
//! ## Key Types
//!
//! - `Ledger`: Card records, placement queries, and moves

pub mod manager;

pub use manager::Ledger;
