use std::{fmt, path::Path, result::Result as StdResult};

use thiserror::Error;

/// Error type surfaced by the ledger core and its storage layer.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Invalid input: {0}")]
    ValidationError(String),
}

pub type Result<T> = StdResult<T, LedgerError>;

impl LedgerError {
    /// Builds a storage error that names the file it concerns.
    pub fn storage(path: &Path, cause: impl fmt::Display) -> Self {
        LedgerError::StorageError(format!("{}: {}", path.display(), cause))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        LedgerError::ValidationError(message.into())
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, LedgerError::StorageError(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::StorageError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_names_the_path() {
        let err = LedgerError::storage(Path::new("data/finance.json"), "permission denied");
        let message = err.to_string();
        assert!(message.contains("data/finance.json"), "{message}");
        assert!(message.contains("permission denied"), "{message}");
        assert!(err.is_storage());
    }

    #[test]
    fn serde_failures_become_storage_errors() {
        let err: LedgerError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.is_storage());
    }
}
