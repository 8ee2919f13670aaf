//! Shared Diesel error classification for the repositories.
//!
//! Messages keep the driver's text so callers can surface it as error detail.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

/// Coarse category of a failed Diesel operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum StoreFailure {
    Connection(String),
    UniqueViolation(String),
    Query(String),
}

/// Classify a Diesel error, logging the raw cause at debug level.
pub(super) fn classify(error: DieselError, operation: &str) -> StoreFailure {
    match error {
        DieselError::DatabaseError(kind, info) => {
            let message = info.message().to_owned();
            debug!(?kind, %message, %operation, "diesel operation failed");
            match kind {
                DatabaseErrorKind::UniqueViolation => StoreFailure::UniqueViolation(message),
                DatabaseErrorKind::ClosedConnection => StoreFailure::Connection(message),
                _ => StoreFailure::Query(message),
            }
        }
        other => {
            let message = other.to_string();
            debug!(%message, %operation, "diesel operation failed");
            StoreFailure::Query(message)
        }
    }
}
