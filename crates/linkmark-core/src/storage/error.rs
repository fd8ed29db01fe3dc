//! Storage error handling
//!
//! Provides typed errors for storage operations. Opening failures are
//! distinguished from everything else because the liveness probe and
//! startup both hinge on them; any other engine error during a query is
//! propagated as-is and never retried.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// The database file cannot be opened or created
    #[error("Database unavailable at '{path}': {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Failed to create the data directory
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// SQLite error during a query
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl StorageError {
    /// True when the database file itself could not be opened or created
    ///
    /// This is the condition the health probe reports as unhealthy.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StorageError::Unavailable { .. } | StorageError::CreateDirectory { .. }
        )
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display() {
        let err = StorageError::Unavailable {
            path: PathBuf::from("/no/such/dir/linkmark.db"),
            source: rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error {
                    code: rusqlite::ErrorCode::CannotOpen,
                    extended_code: rusqlite::ffi::SQLITE_CANTOPEN,
                },
                None,
            ),
        };

        let msg = err.to_string();
        assert!(msg.contains("unavailable"));
        assert!(msg.contains("/no/such/dir/linkmark.db"));
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_query_error_is_not_unavailable() {
        let err = StorageError::Database(rusqlite::Error::QueryReturnedNoRows);
        assert!(!err.is_unavailable());
    }

    #[test]
    fn test_create_directory_display() {
        let err = StorageError::CreateDirectory {
            path: PathBuf::from("/no/such/dir"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        let msg = err.to_string();
        assert!(msg.contains("data directory"));
        assert!(err.is_unavailable());
    }
}
