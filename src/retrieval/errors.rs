//! Retrieval error types
//!
//! A retrieval failure wraps the store-level cause whole. The collection
//! name travels with it so logs and error bodies can say which lookup
//! fell over without reconstructing request context.

use std::fmt;

use crate::store::{StoreError, StoreErrorCode};

/// Result type for retrieval operations
pub type RetrievalResult<T> = Result<T, RetrievalError>;

/// A failed lookup against the store.
#[derive(Debug, Clone)]
pub struct RetrievalError {
    collection: String,
    source: StoreError,
}

impl RetrievalError {
    pub fn new(collection: impl Into<String>, source: StoreError) -> Self {
        Self {
            collection: collection.into(),
            source,
        }
    }

    /// Stable code for logs and error bodies.
    pub fn code(&self) -> &'static str {
        "SHEET_RETRIEVAL_FAILED"
    }

    /// Collection the failed lookup targeted.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Failure class reported by the store.
    pub fn store_code(&self) -> StoreErrorCode {
        self.source.code()
    }

    /// Retrieval failures never require a halt; the server keeps
    /// serving other requests.
    pub fn is_fatal(&self) -> bool {
        false
    }
}

impl fmt::Display for RetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ERROR] {}: lookup on collection '{}' failed: {}",
            self.code(),
            self.collection,
            self.source.message()
        )
    }
}

impl std::error::Error for RetrievalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_carries_collection_and_store_code() {
        let err = RetrievalError::new("sheet1", StoreError::timeout("no answer in 5s"));

        assert_eq!(err.collection(), "sheet1");
        assert_eq!(err.store_code(), StoreErrorCode::Timeout);
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_display_names_the_collection() {
        let err = RetrievalError::new("sheet1", StoreError::unavailable("connection refused"));
        assert_eq!(
            err.to_string(),
            "[ERROR] SHEET_RETRIEVAL_FAILED: lookup on collection 'sheet1' failed: connection refused"
        );
    }

    #[test]
    fn test_source_is_the_store_error() {
        let err = RetrievalError::new("sheet1", StoreError::unavailable("down"));
        let source = err.source().unwrap();
        assert!(source.to_string().contains("SHEET_STORE_UNAVAILABLE"));
    }
}
