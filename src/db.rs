/*! Sets up the application's SQLite database. */

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, expense::create_expense_table};

/// Create all of the database tables for the application.
///
/// Calling this on an already initialised database is a no-op.
///
/// # Errors
/// This function may return a [Error::SqlError] if there was an error
/// creating the tables.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_expense_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
