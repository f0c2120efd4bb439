use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, api_error::ApiError, database_id::TransactionId, transaction::get_transaction,
};

/// A route handler for getting a transaction by its database ID.
///
/// This function will return the status code 404 if the requested resource does not exist (e.g., not created yet).
pub async fn retrieve_transaction_endpoint(
    State(state): State<AppState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let result = state
        .connection()
        .and_then(|connection| get_transaction(transaction_id, &connection));

    match result {
        Ok(Some(transaction)) => {
            tracing::info!("Retrieved transaction {transaction:?}");
            (StatusCode::OK, Json(transaction)).into_response()
        }
        Ok(None) => ApiError::not_found("Transaction not found").into_response(),
        Err(error) => {
            tracing::error!("Error retrieving transaction {transaction_id}: {error}");
            ApiError::internal("Failed to retrieve transaction").into_response()
        }
    }
}
