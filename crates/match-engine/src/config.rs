//! Engine configuration: history length and thinking-delay interval

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::random::SeededRng;

/// Tunables for history retention and opponent pacing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum rounds kept in the history log (most recent first)
    pub history_limit: usize,
    /// Lower bound of the thinking delay, inclusive
    pub min_delay_ms: u32,
    /// Upper bound of the thinking delay, inclusive
    pub max_delay_ms: u32,
}

impl EngineConfig {
    /// Reference pacing: six rounds of history, 450-800 ms delay
    pub fn standard() -> Self {
        Self { history_limit: 6, min_delay_ms: 450, max_delay_ms: 800 }
    }

    /// Same history as standard, resolution may fire immediately
    pub fn instant() -> Self {
        Self { min_delay_ms: 0, max_delay_ms: 0, ..Self::standard() }
    }

    /// Parse a JSON document. Missing fields take their standard values.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.history_limit == 0 {
            return Err(EngineError::InvalidConfig(
                "history_limit must be at least 1".to_string(),
            ));
        }
        if self.min_delay_ms > self.max_delay_ms {
            return Err(EngineError::InvalidConfig(format!(
                "min_delay_ms ({}) exceeds max_delay_ms ({})",
                self.min_delay_ms, self.max_delay_ms
            )));
        }
        Ok(())
    }

    /// Draw a thinking delay uniformly from the configured interval
    pub fn draw_delay(&self, rng: &mut SeededRng) -> Duration {
        let ms = rng.next_between(self.min_delay_ms, self.max_delay_ms);
        Duration::from_millis(ms as u64)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::standard()
    }
}
