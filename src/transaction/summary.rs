//! Totals of income and expenses across the stored transactions.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::{Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, api_error::ApiError, transaction::ColumnValue};

/// Income and expense totals with the resulting balance.
///
/// Each total is whatever SQLite's `SUM` produced: an integer, a real if any
/// amount was stored as a real, or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of all income amounts.
    pub total_income: ColumnValue,
    /// The sum of all expense amounts.
    pub total_expense: ColumnValue,
    /// `total_income - total_expense`.
    pub balance: ColumnValue,
}

#[derive(Debug, Serialize)]
struct SummaryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<Summary>,
}

/// Sum the income and expenses, grouped by category.
///
/// Only the first group is returned and no category is attached to it, so
/// with more than one category the totals describe just one of them.
/// Returns `Ok(None)` when there are no transactions.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn summarize(connection: &Connection) -> Result<Option<Summary>, Error> {
    connection
        .query_row(
            "SELECT
                SUM(CASE WHEN type = 'income' THEN amount ELSE 0 END) AS total_income,
                SUM(CASE WHEN type = 'expense' THEN amount ELSE 0 END) AS total_expense,
                (SUM(CASE WHEN type = 'income' THEN amount ELSE 0 END)
                    - SUM(CASE WHEN type = 'expense' THEN amount ELSE 0 END)) AS balance
            FROM transactions
            GROUP BY category",
            [],
            |row| {
                Ok(Summary {
                    total_income: row.get(0)?,
                    total_expense: row.get(1)?,
                    balance: row.get(2)?,
                })
            },
        )
        .optional()
        .map_err(Error::from)
}

/// A route handler for the income and expense summary.
pub async fn get_summary_endpoint(State(state): State<AppState>) -> Response {
    let result = state
        .connection()
        .and_then(|connection| summarize(&connection));

    match result {
        Ok(summary) => {
            tracing::info!("Success retrieving data: {summary:?}");
            (
                StatusCode::OK,
                Json(SummaryResponse { message: summary }),
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("Error retrieving data: {error}");
            ApiError::internal("Failed to summarize transactions").into_response()
        }
    }
}


#[cfg(test)]
mod endpoint_tests {
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        AppState,
        transaction::{ColumnValue, NewTransaction, TransactionType, create_transaction},
    };

    use super::get_summary_endpoint;

    fn get_test_server() -> (TestServer, AppState) {
        let state = AppState::new(Connection::open_in_memory().unwrap()).unwrap();
        let app = Router::new()
            .route("/summary", get(get_summary_endpoint))
            .with_state(state.clone());

        (
            TestServer::new(app).expect("Could not create test server."),
            state,
        )
    }

    #[tokio::test]
    async fn summary_wraps_totals_in_message() {
        let (server, state) = get_test_server();
        {
            let connection = state.connection().unwrap();
            create_transaction(
                &NewTransaction::new(TransactionType::Income, "salary", 5000, "2024-01-01"),
                &connection,
            )
            .unwrap();
            create_transaction(
                &NewTransaction::new(TransactionType::Expense, "salary", 300, "2024-01-05"),
                &connection,
            )
            .unwrap();
        }

        let response = server.get("/summary").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "message": {
                "total_income": 5000,
                "total_expense": 300,
                "balance": 4700,
            }
        }));
    }

    #[tokio::test]
    async fn summary_includes_fractional_amounts() {
        let (server, state) = get_test_server();
        {
            let connection = state.connection().unwrap();
            for amount in [ColumnValue::new(10), ColumnValue::new(4.5)] {
                let transaction = NewTransaction {
                    amount,
                    ..NewTransaction::new(TransactionType::Income, "gifts", 0, "2024-05-01")
                };
                create_transaction(&transaction, &connection).unwrap();
            }
        }

        let response = server.get("/summary").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "message": {
                "total_income": 14.5,
                "total_expense": 0,
                "balance": 14.5,
            }
        }));
    }

    #[tokio::test]
    async fn summary_of_no_transactions_is_empty_object() {
        let (server, _) = get_test_server();

        let response = server.get("/summary").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({}));
    }
}
