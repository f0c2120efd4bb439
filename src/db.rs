//! Creates the application's database schema.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, category::create_category_table, transaction::create_transaction_table};

/// Create all the tables for the application's domain models.
///
/// Tables that already exist are left untouched, so this can be called every
/// time the server starts.
///
/// # Errors
/// Returns an error if a table could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;
    create_category_table(&transaction)?;

    transaction.commit()?;
    tracing::info!("Tables are created");

    Ok(())
}
