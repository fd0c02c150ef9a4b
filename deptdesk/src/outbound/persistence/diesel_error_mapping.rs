//! Shared classification of Diesel failures.
//!
//! Repositories convert a [`DieselFailure`] into their own port error; the
//! driver's message is carried through so notices can show it.

use diesel::result::{ConnectionError, DatabaseErrorKind, Error as DieselError};
use tracing::debug;

/// Store failure reduced to the categories the ports distinguish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    /// The store could not be opened or the connection dropped.
    Connection(String),
    /// A uniqueness constraint rejected the write.
    UniqueViolation(String),
    /// Any other statement failure.
    Query(String),
}

/// Classify an error raised while opening a connection.
pub(crate) fn classify_connection_error(error: ConnectionError) -> DieselFailure {
    debug!(%error, "sqlite connection failed");
    DieselFailure::Connection(error.to_string())
}

/// Classify an error raised while running a statement.
pub(crate) fn classify_diesel_error(error: DieselError) -> DieselFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            DieselFailure::UniqueViolation(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            DieselFailure::Connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => DieselFailure::Query(info.message().to_owned()),
        other => DieselFailure::Query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn not_found_is_a_query_failure() {
        let failure = classify_diesel_error(DieselError::NotFound);
        assert_eq!(failure, DieselFailure::Query("Record not found".to_owned()));
    }

    #[rstest]
    fn bad_connection_keeps_driver_message() {
        let failure = classify_connection_error(ConnectionError::BadConnection(
            "unable to open database file".to_owned(),
        ));
        assert_eq!(
            failure,
            DieselFailure::Connection("unable to open database file".to_owned())
        );
    }
}
