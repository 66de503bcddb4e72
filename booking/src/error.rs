//! Error types for the booking library.
//!
//! This module provides the error hierarchy for all operations in the
//! booking library, using `thiserror` for ergonomic error handling.
//!
//! Storage errors coming out of `rusqlite` are classified on conversion:
//! constraint failures (foreign key, primary key, ...) become
//! [`Error::ConstraintViolation`] so callers can branch on the kind instead
//! of matching on message text.

use std::fmt;

use rusqlite::ffi::{
    SQLITE_CONSTRAINT_CHECK, SQLITE_CONSTRAINT_FOREIGNKEY, SQLITE_CONSTRAINT_NOTNULL,
    SQLITE_CONSTRAINT_PRIMARYKEY, SQLITE_CONSTRAINT_UNIQUE,
};
use thiserror::Error;

/// Result type alias for operations that may fail with a booking error.
///
/// # Examples
///
/// ```
/// use booking::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the booking library.
#[derive(Debug, Error)]
pub enum Error {
    /// An opaque storage or connectivity failure.
    #[error("database error: {0}")]
    Storage(#[source] rusqlite::Error),

    /// The store rejected a write because it violates a constraint.
    #[error("constraint violation ({kind}): {details}")]
    ConstraintViolation {
        /// Which kind of constraint was violated.
        kind: ConstraintKind,
        /// The message reported by the store.
        details: String,
    },

    /// A delete matched no reservation owned by the given customer.
    #[error("reservation {reservation_id} not found or does not belong to customer {customer_id}")]
    NotFoundOrUnauthorized {
        /// The reservation id from the request.
        reservation_id: String,
        /// The customer id from the request.
        customer_id: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The kind of constraint a rejected write violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// A referenced customer or restaurant does not exist.
    ForeignKey,
    /// A row with the same primary key already exists.
    PrimaryKey,
    /// A UNIQUE column collided.
    Unique,
    /// A required column was NULL.
    NotNull,
    /// A CHECK constraint failed.
    Check,
    /// Any other constraint failure.
    Other,
}

impl ConstraintKind {
    fn from_extended_code(code: i32) -> Self {
        match code {
            SQLITE_CONSTRAINT_FOREIGNKEY => Self::ForeignKey,
            SQLITE_CONSTRAINT_PRIMARYKEY => Self::PrimaryKey,
            SQLITE_CONSTRAINT_UNIQUE => Self::Unique,
            SQLITE_CONSTRAINT_NOTNULL => Self::NotNull,
            SQLITE_CONSTRAINT_CHECK => Self::Check,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForeignKey => write!(f, "foreign key"),
            Self::PrimaryKey => write!(f, "primary key"),
            Self::Unique => write!(f, "unique"),
            Self::NotNull => write!(f, "not null"),
            Self::Check => write!(f, "check"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref sqlite_err, ref message)
                if sqlite_err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Self::ConstraintViolation {
                    kind: ConstraintKind::from_extended_code(sqlite_err.extended_code),
                    details: message
                        .clone()
                        .unwrap_or_else(|| sqlite_err.to_string()),
                }
            }
            other => Self::Storage(other),
        }
    }
}

impl From<crate::model::ValidationError> for Error {
    fn from(err: crate::model::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<crate::model::InvalidPartyCountError> for Error {
    fn from(err: crate::model::InvalidPartyCountError) -> Self {
        crate::model::ValidationError::from(err).into()
    }
}

impl Error {
    /// Returns `true` if this error represents a missing or foreign-owned
    /// reservation.
    ///
    /// # Examples
    ///
    /// ```
    /// use booking::Error;
    ///
    /// let err = Error::NotFoundOrUnauthorized {
    ///     reservation_id: "r1".into(),
    ///     customer_id: "c1".into(),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFoundOrUnauthorized { .. })
    }

    /// Returns the constraint kind if this is a constraint violation.
    #[must_use]
    pub const fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            Self::ConstraintViolation { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
