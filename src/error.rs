#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Source '{source_name}' unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    #[error("Invalid record #{index} in source '{source_name}': field '{field}' {reason}")]
    InvalidRecord {
        source_name: String,
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("Ledger has not been loaded")]
    NotLoaded,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl LedgerError {
    /// Build a [`LedgerError::SourceUnavailable`] from any displayable cause.
    pub fn unavailable(source_name: &str, reason: impl std::fmt::Display) -> Self {
        LedgerError::SourceUnavailable {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
