//! Session configuration.
//!
//! Defaults reproduce the standard rules: no rank wraparound and an
//! unbounded undo stack. Configs deserialize from partial JSON; missing
//! fields take their defaults.

use serde::{Deserialize, Serialize};

/// Configuration for a game session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Treat Ace and King as adjacent when matching.
    pub wrap_ranks: bool,

    /// Maximum number of undoable moves. `None` for unlimited.
    pub max_undo_depth: Option<usize>,
}

impl SessionConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow Ace/King matches.
    #[must_use]
    pub fn with_wrap_ranks(mut self) -> Self {
        self.wrap_ranks = true;
        self
    }

    /// Limit how many moves can be undone.
    #[must_use]
    pub fn with_max_undo_depth(mut self, depth: usize) -> Self {
        self.max_undo_depth = Some(depth);
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
