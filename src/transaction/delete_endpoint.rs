use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState, api_error::ApiError, database_id::TransactionId, transaction::delete_transaction,
};

/// A route handler for deleting a transaction.
///
/// Responds with 200 OK whether or not a transaction with the ID existed.
pub async fn delete_transaction_endpoint(
    State(state): State<AppState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let result = state
        .connection()
        .and_then(|connection| delete_transaction(transaction_id, &connection));

    match result {
        Ok(rows_affected) => {
            tracing::info!("Deleted transaction {transaction_id} ({rows_affected} rows affected)");
            (
                StatusCode::OK,
                Json(json!({ "message": "data is deleted successfully" })),
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            ApiError::internal("Failed to delete transaction").into_response()
        }
    }
}
