use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState, api_error::ApiError, database_id::TransactionId,
    transaction::force_transaction_type_income,
};

/// A route handler for updating a transaction.
///
/// The request body is ignored: the only change made is setting the type of
/// the transaction to income.
pub async fn update_transaction_endpoint(
    State(state): State<AppState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let result = state
        .connection()
        .and_then(|connection| force_transaction_type_income(transaction_id, &connection));

    match result {
        Ok(rows_affected) => {
            tracing::info!("Updated transaction {transaction_id} ({rows_affected} rows affected)");
            (
                StatusCode::OK,
                Json(json!({ "result": "updated successfully" })),
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("Could not update transaction {transaction_id}: {error}");
            ApiError::internal("Failed to update transaction").into_response()
        }
    }
}
