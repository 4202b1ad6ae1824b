//! Error types for landbase

/// Unified error type for landbase operations
#[derive(Debug, thiserror::Error)]
pub enum LandbaseError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// File I/O error (catalog import, export)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to read a catalog CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Power tier name outside Starter / Collector / Elite
    #[error("Invalid power tier: {0}")]
    InvalidTier(String),
    /// Mana symbol outside W, U, B, R, G
    #[error("Invalid color symbol: {0:?}")]
    InvalidColor(char),
}

/// Short alias used throughout the crate
pub type Error = LandbaseError;

/// Result alias for landbase operations
pub type Result<T> = std::result::Result<T, LandbaseError>;
