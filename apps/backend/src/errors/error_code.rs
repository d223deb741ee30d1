//! Error codes for the expenses API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the expenses API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Request body failed field presence, type, or constraint checks
    ValidationError,
    /// Request body is not valid JSON
    BadRequest,
    /// Path id is not a valid expense identifier
    InvalidExpenseId,
    /// Request body declared with a non-JSON content type
    UnsupportedMediaType,

    // Resource Not Found
    /// Expense not found
    ExpenseNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Database unavailable
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    /// Internal server error
    InternalError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidExpenseId => "INVALID_EXPENSE_ID",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",

            Self::ExpenseNotFound => "EXPENSE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
