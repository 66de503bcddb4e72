//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;

use booking::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Data directory not found (and auto-init disabled).
    NoDataDirectory,

    /// Configuration error.
    Config(String),

    /// The HTTP server failed to start or stopped with an error.
    Server(anyhow::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Reservation not found or not owned by the customer
    /// - 2: Constraint violation (unknown customer/restaurant, duplicate booking)
    /// - 3: No data directory found
    /// - 4: Invalid arguments or field validation failure
    /// - 5: I/O error
    /// - 6: Other storage error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::NotFoundOrUnauthorized { .. } => 1,
                LibError::ConstraintViolation { .. } => 2,
                LibError::Validation { .. } => 4,
                LibError::Io(_) => 5,
                LibError::Configuration(_) => 7,
                LibError::Storage(_) => 6,
            },
            CliError::NoDataDirectory => 3,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) | CliError::Server(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::NoDataDirectory => write!(
                f,
                "Data directory not found (run `booking init` or drop --disable-autoinit)"
            ),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::Server(e) => write!(f, "Server error: {e:#}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::Server(e) => Some(&**e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<anyhow::Error> for CliError {
    fn from(e: anyhow::Error) -> Self {
        CliError::Server(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking::ConstraintKind;

    #[test]
    fn test_library_exit_codes() {
        let not_found = CliError::from(LibError::NotFoundOrUnauthorized {
            reservation_id: "r".into(),
            customer_id: "c".into(),
        });
        assert_eq!(not_found.exit_code(), 1);

        let constraint = CliError::from(LibError::ConstraintViolation {
            kind: ConstraintKind::ForeignKey,
            details: "FOREIGN KEY constraint failed".into(),
        });
        assert_eq!(constraint.exit_code(), 2);

        let validation = CliError::from(LibError::Validation {
            field: "name".into(),
            message: "empty".into(),
        });
        assert_eq!(validation.exit_code(), 4);
    }

    #[test]
    fn test_cli_exit_codes() {
        assert_eq!(CliError::NoDataDirectory.exit_code(), 3);
        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
        assert_eq!(CliError::Config("x".into()).exit_code(), 7);
        assert_eq!(
            CliError::from(anyhow::anyhow!("address in use")).exit_code(),
            5
        );
    }
}
