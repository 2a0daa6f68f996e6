//! Explicitly constructed game sessions.
//!
//! `Session` composes the ledger, the move history, and the rules behind a
//! single owner. The presentation layer holds one per game and polls it
//! after every mutating call.

pub mod state;

pub use state::Session;
