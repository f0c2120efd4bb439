use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    api_error::ApiError,
    transaction::{Transaction, get_transactions},
};

/// The body of the response listing all transactions.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionList {
    /// Every stored transaction, in no particular order.
    pub transactions: Vec<Transaction>,
}

/// A route handler for listing every transaction.
pub async fn list_transactions_endpoint(State(state): State<AppState>) -> Response {
    let result = state
        .connection()
        .and_then(|connection| get_transactions(&connection));

    match result {
        Ok(transactions) => {
            tracing::info!("Retrieved {} transactions", transactions.len());
            tracing::debug!("{transactions:?}");

            (StatusCode::OK, Json(TransactionList { transactions })).into_response()
        }
        Err(error) => {
            tracing::error!("Error retrieving data: {error}");
            ApiError::internal("Failed to retrieve transactions").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        AppState,
        transaction::{ColumnValue, NewTransaction, TransactionType, create_transaction},
    };

    use super::{TransactionList, list_transactions_endpoint};

    fn get_test_server() -> (TestServer, AppState) {
        let state = AppState::new(Connection::open_in_memory().unwrap()).unwrap();
        let app = Router::new()
            .route("/get", get(list_transactions_endpoint))
            .with_state(state.clone());

        (
            TestServer::new(app).expect("Could not create test server."),
            state,
        )
    }

    #[tokio::test]
    async fn list_with_no_transactions() {
        let (server, _) = get_test_server();

        let response = server.get("/get").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "transactions": [] }));
    }

    #[tokio::test]
    async fn list_returns_every_transaction() {
        let (server, state) = get_test_server();
        {
            let connection = state.connection().unwrap();
            create_transaction(
                &NewTransaction::new(TransactionType::Income, "salary", 5000, "2024-01-01"),
                &connection,
            )
            .unwrap();
            create_transaction(
                &NewTransaction::new(TransactionType::Expense, "rent", 900, "2024-01-02")
                    .description("January rent"),
                &connection,
            )
            .unwrap();
        }

        let response = server.get("/get").await;

        response.assert_status_ok();
        let mut categories: Vec<_> = response
            .json::<TransactionList>()
            .transactions
            .into_iter()
            .filter_map(|transaction| transaction.category.0.as_str().map(str::to_owned))
            .collect();
        categories.sort();
        assert_eq!(categories, ["rent", "salary"]);
    }

    #[tokio::test]
    async fn list_serializes_missing_fields_as_null() {
        let (server, state) = get_test_server();
        let id = create_transaction(
            &NewTransaction {
                transaction_type: ColumnValue::new("expense"),
                category: ColumnValue::new("misc"),
                ..Default::default()
            },
            &state.connection().unwrap(),
        )
        .unwrap()
        .last_id;

        let response = server.get("/get").await;

        response.assert_json(&json!({
            "transactions": [{
                "id": id,
                "type": "expense",
                "category": "misc",
                "amount": null,
                "date": null,
                "description": null,
            }]
        }));
    }

    #[tokio::test]
    async fn list_includes_real_and_text_amounts() {
        let (server, state) = get_test_server();
        let ids: Vec<_> = {
            let connection = state.connection().unwrap();
            [ColumnValue::new(10), ColumnValue::new(4.5), ColumnValue::new("lots")]
                .into_iter()
                .map(|amount| {
                    let transaction = NewTransaction {
                        amount,
                        ..NewTransaction::new(TransactionType::Income, "gifts", 0, "2024-05-01")
                    };
                    create_transaction(&transaction, &connection).unwrap().last_id
                })
                .collect()
        };

        let response = server.get("/get").await;

        response.assert_status_ok();
        let mut transactions = response.json::<TransactionList>().transactions;
        transactions.sort_by_key(|transaction| transaction.id);
        let got: Vec<_> = transactions
            .into_iter()
            .map(|transaction| (transaction.id, transaction.amount))
            .collect();
        assert_eq!(
            got,
            [
                (ids[0], ColumnValue::new(10)),
                (ids[1], ColumnValue::new(4.5)),
                (ids[2], ColumnValue::new("lots")),
            ]
        );
    }
}
