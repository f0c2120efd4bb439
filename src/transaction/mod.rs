//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `NewTransaction` for creating transactions
//! - Database functions for storing, querying, and summarizing transactions
//! - Route handlers for the transaction JSON API

mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod retrieve_endpoint;
mod summary;
mod update_endpoint;

pub use core::{
    ColumnValue, InsertResult, NewTransaction, Transaction, TransactionType, create_transaction,
    create_transaction_table, delete_transaction, force_transaction_type_income, get_transaction,
    get_transactions,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use retrieve_endpoint::retrieve_transaction_endpoint;
pub use summary::{Summary, get_summary_endpoint};
pub use update_endpoint::update_transaction_endpoint;

#[cfg(test)]
pub use core::count_transactions;
