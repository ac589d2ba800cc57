//! Store error types
//!
//! Store failures carry a code so adapters can tell a query the backend
//! refused apart from the backend being unreachable. The codes are part
//! of the error surface and never change meaning.

use std::fmt;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store failure classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// Backend cannot be reached or is not serving.
    Unavailable,
    /// Backend refused the filter or options as malformed.
    RejectedQuery,
    /// Lookup gave up waiting on the backend.
    Timeout,
}

impl StoreErrorCode {
    /// Returns the stable string code for logs and error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::Unavailable => "SHEET_STORE_UNAVAILABLE",
            StoreErrorCode::RejectedQuery => "SHEET_STORE_REJECTED_QUERY",
            StoreErrorCode::Timeout => "SHEET_STORE_TIMEOUT",
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A failed store operation.
#[derive(Debug, Clone)]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
}

impl StoreError {
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Backend unreachable.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StoreErrorCode::Unavailable, message)
    }

    /// Backend refused the query.
    pub fn rejected_query(message: impl Into<String>) -> Self {
        Self::new(StoreErrorCode::RejectedQuery, message)
    }

    /// Backend did not answer in time.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(StoreErrorCode::Timeout, message)
    }

    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ERROR] {}: {}", self.code, self.message)
    }
}

impl std::error::Error for StoreError {}
