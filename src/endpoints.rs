//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/retrieve/{id}', use [format_endpoint].

/// The route for creating a transaction.
pub const POST_TRANSACTION: &str = "/post";
/// The route for listing all transactions.
pub const GET_TRANSACTIONS: &str = "/get";
/// The route for getting a single transaction.
pub const RETRIEVE_TRANSACTION: &str = "/retrieve/{id}";
/// The route for deleting a transaction.
pub const DELETE_TRANSACTION: &str = "/delete/{id}";
/// The route for updating a transaction.
pub const UPDATE_TRANSACTION: &str = "/update/{id}";
/// The route for the income and expense totals.
pub const SUMMARY: &str = "/summary";
/// A static route for checking that the server is up.
pub const API: &str = "/api";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// # Examples
///
/// ```
/// use expense_tracker::endpoints::{RETRIEVE_TRANSACTION, format_endpoint};
///
/// assert_eq!(format_endpoint(RETRIEVE_TRANSACTION, 42), "/retrieve/42");
/// ```
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let param_start = match endpoint_path.find('{') {
        Some(index) => index,
        None => return endpoint_path.to_owned(),
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|index| param_start + index + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
