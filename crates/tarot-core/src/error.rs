//! Error types for the tarot reader

use thiserror::Error;

/// Result type alias for tarot operations
pub type Result<T> = std::result::Result<T, TarotError>;

/// Errors that can occur while loading a deck or drawing a reading
#[derive(Debug, Error)]
pub enum TarotError {
    /// Dataset is missing, empty or malformed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A draw was requested for fewer than one card
    #[error("Invalid card count: {requested} (at least one card must be drawn)")]
    InvalidCount { requested: usize },

    /// A draw was requested for more distinct cards than the deck holds
    #[error("Cannot draw {requested} distinct cards from a deck of {available}")]
    InsufficientCards { requested: usize, available: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TarotError {
    /// Whether this error means no reading is possible at all
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TarotError::Configuration(_) | TarotError::Io(_) | TarotError::Json(_)
        )
    }
}
