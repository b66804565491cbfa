use thiserror::Error;

/// Engine errors. Every variant is a caller contract violation rather than
/// an environmental failure; the engine does no I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Difficulty name outside the closed easy/medium/hard set.
    #[error("invalid difficulty: {0:?}")]
    InvalidDifficulty(String),
}
