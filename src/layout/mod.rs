//! Initial layout input.
//!
//! Layouts are static data supplied by an external loader. Parsing and
//! validation happen here so the ledger only ever sees well-formed entries.

pub mod loader;

pub use loader::{Layout, LayoutEntry, ResolvedEntry};
