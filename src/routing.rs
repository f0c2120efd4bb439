//! Application router configuration.

use axum::{
    Json, Router,
    http::{HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde_json::json;
use tower_http::cors::{AllowHeaders, CorsLayer};

use crate::{
    AppState,
    api_error::ApiError,
    endpoints,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_summary_endpoint,
        list_transactions_endpoint, retrieve_transaction_endpoint, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::POST_TRANSACTION, post(create_transaction_endpoint))
        .route(endpoints::GET_TRANSACTIONS, get(list_transactions_endpoint))
        .route(
            endpoints::RETRIEVE_TRANSACTION,
            get(retrieve_transaction_endpoint),
        )
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::UPDATE_TRANSACTION,
            put(update_transaction_endpoint),
        )
        .route(endpoints::SUMMARY, get(get_summary_endpoint))
        .route(endpoints::API, get(get_api))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Allow cross-origin requests from `allowed_origin` only.
pub fn cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}

/// A static response for checking that the server is reachable.
async fn get_api() -> Response {
    Json(json!({ "userName": ["test1", "test2", "test3"] })).into_response()
}

async fn get_404_not_found() -> Response {
    ApiError::not_found("Not found").into_response()
}
