//! Error types for the fallible edges of the game (config, score file, terminal)
//!
//! The simulation itself never fails: every counter is clamped or wrapped.

/// Errors raised outside the simulation core
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// IO error from the filesystem or terminal
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a settings or high-score file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A setting outside its allowed range
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

/// Result type for meteor-dodge operations
pub type Result<T> = std::result::Result<T, Error>;
