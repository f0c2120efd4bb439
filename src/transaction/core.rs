//! Defines the core data models and database queries for transactions.

use std::fmt::Display;

use rusqlite::{
    Connection, OptionalExtension, Row, ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, Value as SqlValue, ValueRef},
};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value as JsonValue};

use crate::{Error, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned, e.g. wages.
    Income,
    /// Money spent, e.g. groceries.
    Expense,
}

impl TransactionType {
    /// The text stored in the `type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(FromSqlError::Other(
                format!("invalid transaction type \"{other}\"").into(),
            )),
        }
    }
}

/// A JSON value stored in, or read from, a single SQLite column.
///
/// Values are bound without any conversion on the Rust side, so SQLite's
/// column affinity decides how they are stored: `"5000"` in an `INTEGER`
/// column becomes `5000`, `12.5` stays a real and `"lots"` stays text.
/// Booleans are stored as `0`/`1`, arrays and objects as their JSON text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnValue(pub JsonValue);

impl ColumnValue {
    /// Wrap anything that converts into a JSON value.
    pub fn new(value: impl Into<JsonValue>) -> Self {
        Self(value.into())
    }

    /// The SQL `NULL`.
    pub fn null() -> Self {
        Self(JsonValue::Null)
    }
}

impl ToSql for ColumnValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let value = match &self.0 {
            JsonValue::Null => SqlValue::Null,
            JsonValue::Bool(flag) => SqlValue::Integer(i64::from(*flag)),
            JsonValue::Number(number) => match number.as_i64() {
                Some(integer) => SqlValue::Integer(integer),
                None => number.as_f64().map_or(SqlValue::Null, SqlValue::Real),
            },
            JsonValue::String(text) => {
                return Ok(ToSqlOutput::Borrowed(ValueRef::Text(text.as_bytes())));
            }
            other => SqlValue::Text(other.to_string()),
        };

        Ok(ToSqlOutput::Owned(value))
    }
}

impl FromSql for ColumnValue {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let json = match value {
            ValueRef::Null => JsonValue::Null,
            ValueRef::Integer(integer) => JsonValue::from(integer),
            ValueRef::Real(real) => {
                Number::from_f64(real).map_or(JsonValue::Null, JsonValue::Number)
            }
            ValueRef::Text(text) => {
                JsonValue::String(String::from_utf8_lossy(text).into_owned())
            }
            ValueRef::Blob(bytes) => JsonValue::from(bytes.to_vec()),
        };

        Ok(Self(json))
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Apart from `id` and `type`, fields are returned exactly as SQLite stored
/// them, which may be integers, reals, text or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// A free text label, e.g. "salary" or "groceries".
    pub category: ColumnValue,
    /// The amount of money spent or earned in this transaction.
    pub amount: ColumnValue,
    /// When the transaction happened.
    pub date: ColumnValue,
    /// A text description of what the transaction was for.
    pub description: ColumnValue,
}

/// The fields a client sends to create a transaction.
///
/// Missing fields are stored as `NULL`. None of the fields are checked here,
/// the `type` CHECK constraint and the `NOT NULL` constraints decide whether
/// the row is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewTransaction {
    /// Should be either "income" or "expense".
    #[serde(rename = "type")]
    pub transaction_type: ColumnValue,
    /// A free text label for the transaction.
    pub category: ColumnValue,
    /// The amount of money spent or earned.
    pub amount: ColumnValue,
    /// When the transaction happened.
    pub date: ColumnValue,
    /// A text description of the transaction.
    pub description: ColumnValue,
}

impl NewTransaction {
    /// Shortcut for a transaction with every required field set.
    pub fn new(
        transaction_type: TransactionType,
        category: &str,
        amount: i64,
        date: &str,
    ) -> Self {
        Self {
            transaction_type: ColumnValue::new(transaction_type.as_str()),
            category: ColumnValue::new(category),
            amount: ColumnValue::new(amount),
            date: ColumnValue::new(date),
            description: ColumnValue::null(),
        }
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = ColumnValue::new(description);
        self
    }
}

/// The number of rows changed by an `INSERT`, `UPDATE` or `DELETE` statement.
pub type RowsAffected = usize;

/// The outcome of inserting a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertResult {
    /// The ID assigned to the new transaction.
    #[serde(rename = "lastID")]
    pub last_id: TransactionId,
    /// The number of rows inserted.
    pub changes: RowsAffected,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidTransactionType] if the type is not "income" or "expense",
/// - or [Error::SqlError] if there is some other SQL error, e.g. a missing category.
pub fn create_transaction(
    transaction: &NewTransaction,
    connection: &Connection,
) -> Result<InsertResult, Error> {
    let changes = connection.execute(
        "INSERT INTO transactions (type, category, amount, date, description)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        (
            &transaction.transaction_type,
            &transaction.category,
            &transaction.amount,
            &transaction.date,
            &transaction.description,
        ),
    )?;

    Ok(InsertResult {
        last_id: connection.last_insert_rowid(),
        changes,
    })
}

/// Retrieve every transaction in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn get_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare("SELECT id, type, category, amount, date, description FROM transactions")?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Retrieve a transaction from the database by its `id`.
///
/// Returns `Ok(None)` if `id` does not refer to a transaction.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn get_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<Option<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, type, category, amount, date, description FROM transactions WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_transaction_row)
        .optional()
        .map_err(Error::from)
}

/// Delete the transaction with `id`.
///
/// Deleting a transaction that does not exist is not an error, zero rows are affected.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn delete_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])
        .map_err(Error::from)
}

/// Set the type of the transaction with `id` to income, whatever it was before.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn force_transaction_type_income(
    id: TransactionId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "UPDATE transactions SET type = ?1 WHERE id = ?2",
            (TransactionType::Income, id),
        )
        .map_err(Error::from)
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
#[cfg(test)]
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM transactions;", [], |row| row.get(0))
        .map_err(Error::from)
}

/// Create the transaction table in the database if it does not already exist.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type VARCHAR(255) CHECK(type IN ('income', 'expense')) NOT NULL,
                category VARCHAR(255) NOT NULL,
                amount INTEGER,
                date DATE,
                description TEXT
                )",
        (),
    )?;

    Ok(())
}

fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        transaction_type: row.get(1)?,
        category: row.get(2)?,
        amount: row.get(3)?,
        date: row.get(4)?,
        description: row.get(5)?,
    })
}

// ============================================================================
// TESTS
// ============================================================================
