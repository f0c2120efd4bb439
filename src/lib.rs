//! Expense Tracker is a small backend for recording personal income and expenses.
//!
//! This library provides a JSON REST API over a single SQLite database holding
//! a `transactions` table and a `categories` table.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod api_error;
mod app_state;
mod category;
mod database_id;
mod db;
pub mod endpoints;
mod logging;
mod routing;
mod transaction;

pub use app_state::AppState;
pub use category::{Category, create_category, get_categories};
pub use database_id::{CategoryId, DatabaseId, TransactionId};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::{build_router, cors_layer};
pub use transaction::{
    ColumnValue, InsertResult, NewTransaction, Summary, Transaction, TransactionType,
    create_transaction,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A transaction or category was written with a `type` other than
    /// `income` or `expense`.
    ///
    /// The database CHECK constraint is the only place this is enforced.
    #[error("the type must be either 'income' or 'expense'")]
    InvalidTransactionType,

    /// The requested resource was not found.
    ///
    /// Internally, this error occurs when a single row query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    ///
    /// The error string should only be logged on the server, clients receive a
    /// generic message instead.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error {
                    code: _,
                    extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_CHECK,
                },
                _,
            ) => Error::InvalidTransactionType,
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}

#[cfg(test)]
mod error_tests {
    use rusqlite::Connection;

    use crate::Error;

    #[test]
    fn check_constraint_maps_to_invalid_type() {
        let connection = Connection::open_in_memory().unwrap();
        connection
            .execute(
                "CREATE TABLE t (type TEXT CHECK(type IN ('income', 'expense')) NOT NULL)",
                (),
            )
            .unwrap();

        let error: Error = connection
            .execute("INSERT INTO t (type) VALUES ('gift')", ())
            .unwrap_err()
            .into();

        assert!(matches!(error, Error::InvalidTransactionType));
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        let error: Error = rusqlite::Error::QueryReturnedNoRows.into();

        assert!(matches!(error, Error::NotFound));
    }

    #[test]
    fn not_null_violation_is_an_sql_error() {
        let connection = Connection::open_in_memory().unwrap();
        connection
            .execute("CREATE TABLE t (category TEXT NOT NULL)", ())
            .unwrap();

        let error: Error = connection
            .execute("INSERT INTO t (category) VALUES (NULL)", ())
            .unwrap_err()
            .into();

        assert!(matches!(error, Error::SqlError(_)));
    }
}
