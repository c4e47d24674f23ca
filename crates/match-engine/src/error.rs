//! Engine error types

use thiserror::Error;

/// Failures at the engine boundary.
///
/// Submitting while a round is in flight and late resolutions after a
/// reset are ordinary outcomes, not errors; see [`crate::Resolution`].
#[derive(Error, Debug)]
pub enum EngineError {
    /// A move tag or index outside rock/paper/scissors.
    #[error("invalid move: {0:?}")]
    InvalidMove(String),

    /// Configuration values that cannot drive the engine.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration document could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}
