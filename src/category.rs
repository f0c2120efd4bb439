//! This file defines the `Category` type and its database queries.
//!
//! Categories are provisioned in the database but no API route reads or writes
//! them yet, transactions carry their category as free text.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::CategoryId, transaction::TransactionType};

/// A named grouping for transactions, e.g., 'Groceries', 'Eating Out', 'Wages'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The id of the category.
    pub id: CategoryId,

    /// The name of the category.
    pub name: String,

    /// Whether the category groups income or expenses.
    #[serde(rename = "type")]
    pub category_type: TransactionType,
}

/// Create a category in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn create_category(
    name: &str,
    category_type: TransactionType,
    connection: &Connection,
) -> Result<Category, Error> {
    connection
        .prepare(
            "INSERT INTO categories (name, type) VALUES (?1, ?2)
             RETURNING id, name, type",
        )?
        .query_row((name, category_type), map_category_row)
        .map_err(Error::from)
}

/// Retrieve all categories in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn get_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT id, name, type FROM categories ORDER BY name ASC")?
        .query_map([], map_category_row)?
        .map(|maybe_category| maybe_category.map_err(Error::from))
        .collect()
}

/// Create the category table in the database if it does not already exist.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(255) NOT NULL,
                type VARCHAR(255) CHECK(type IN ('income', 'expense')) NOT NULL
                )",
        (),
    )?;

    Ok(())
}

fn map_category_row(row: &Row) -> Result<Category, rusqlite::Error> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        category_type: row.get(2)?,
    })
}
