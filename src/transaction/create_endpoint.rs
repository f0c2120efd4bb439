use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    api_error::ApiError,
    transaction::{InsertResult, NewTransaction, create_transaction},
};

#[derive(Debug, Serialize, Deserialize)]
struct CreateTransactionResponse {
    message: InsertResult,
}

const CREATE_FAILED: &str = "Failed to add transaction";

/// A route handler for creating a new transaction.
///
/// Field values are passed to the database as they were sent, only a body
/// that is not a JSON object is rejected before reaching it.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    payload: Result<Json<NewTransaction>, JsonRejection>,
) -> Response {
    let new_transaction = match payload {
        Ok(Json(new_transaction)) => new_transaction,
        Err(rejection) => {
            tracing::error!("Error inserting data: {rejection}");
            return ApiError::internal(CREATE_FAILED).into_response();
        }
    };

    let result = state
        .connection()
        .and_then(|connection| create_transaction(&new_transaction, &connection));

    match result {
        Ok(insert_result) => {
            tracing::info!("New data is registered: {insert_result:?}");

            (
                StatusCode::CREATED,
                Json(CreateTransactionResponse {
                    message: insert_result,
                }),
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("Error inserting data: {error}");
            ApiError::internal(CREATE_FAILED).into_response()
        }
    }
}
