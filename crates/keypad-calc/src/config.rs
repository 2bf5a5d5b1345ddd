//! Session configuration

use serde::{Deserialize, Serialize};

use crate::core::history::History;

/// Settings for a calculator session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Record completed calculations in the session history
    pub record_history: bool,
    /// Maximum number of history entries kept (oldest dropped first)
    pub max_history: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            record_history: true,
            max_history: History::DEFAULT_MAX_ENTRIES,
        }
    }
}

impl SessionConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable history recording
    #[must_use]
    pub const fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Set the history capacity
    #[must_use]
    pub const fn with_max_history(mut self, max: usize) -> Self {
        self.max_history = max;
        self
    }

    /// Capacity the session history is created with
    #[must_use]
    pub const fn history_capacity(&self) -> usize {
        if self.record_history {
            self.max_history
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert!(config.record_history);
        assert_eq!(config.max_history, History::DEFAULT_MAX_ENTRIES);
        assert_eq!(config, SessionConfig::new());
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new().with_max_history(5);
        assert_eq!(config.history_capacity(), 5);

        let config = config.with_history(false);
        assert_eq!(config.history_capacity(), 0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"max_history": 3}"#).unwrap();
        assert!(config.record_history);
        assert_eq!(config.max_history, 3);
    }
}
