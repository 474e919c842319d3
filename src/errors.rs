use thiserror::Error;

/// Application-wide error type - single point of truth
///
/// Per-paste problems (empty input, truncation, missing fields) are not errors;
/// they are reported through [`crate::parser::PasteOutcome`]. This type covers
/// startup and I/O failures only.
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Lookup table could not be loaded or contained malformed entries
    #[error("Lookup table error ({table}): {reason}")]
    TableLoad { table: String, reason: String },

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Input file could not be read as text
    #[error("Invalid input {path}: {reason}")]
    InvalidInput { path: String, reason: String },
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::InvalidData(format!("TOML error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
