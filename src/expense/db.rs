//! Database operations for expenses.

use rusqlite::{Connection, Row};
use time::{OffsetDateTime, UtcOffset};

use crate::{
    Error,
    expense::{Expense, ExpenseId, NewExpense},
};

type RowsAffected = usize;

/// Save an expense and return it with its generated ID.
///
/// If `new_expense` has no date, the expense is dated now. Dates are stored
/// in UTC so that they sort correctly as text.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_expense(new_expense: NewExpense, connection: &Connection) -> Result<Expense, Error> {
    let date = new_expense
        .date
        .unwrap_or_else(OffsetDateTime::now_utc)
        .to_offset(UtcOffset::UTC);

    let expense = connection
        .prepare(
            "INSERT INTO expense (title, amount, category, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, title, amount, category, date",
        )?
        .query_row(
            (
                new_expense.title,
                new_expense.amount,
                new_expense.category,
                date,
            ),
            map_expense_row,
        )?;

    Ok(expense)
}

/// Retrieve a single expense by ID.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a saved expense,
/// - or [Error::SqlError] there is some other SQL error.
#[cfg(test)]
pub fn get_expense(id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    connection
        .prepare("SELECT id, title, amount, category, date FROM expense WHERE id = :id")?
        .query_row(&[(":id", &id)], map_expense_row)
        .map_err(|error| error.into())
}

/// Retrieve all expenses, most recent first.
///
/// Expenses with the same date are ordered by ID, newest first, so that the
/// order is stable between requests.
pub fn get_all_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare(
            "SELECT id, title, amount, category, date FROM expense ORDER BY date DESC, id DESC",
        )?
        .query_map([], map_expense_row)?
        .map(|maybe_expense| maybe_expense.map_err(|error| error.into()))
        .collect()
}

/// Delete an expense by ID and return the number of rows deleted.
///
/// Deleting an expense that does not exist is not an error, zero is returned
/// instead.
pub fn delete_expense(id: ExpenseId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM expense WHERE id = :id", &[(":id", &id)])
        .map_err(|error| error.into())
}

/// Initialize the expense table and indexes.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS expense (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            amount REAL NOT NULL,
            category TEXT NOT NULL,
            date TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_expense_date ON expense(date);",
    )?;

    Ok(())
}

fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    Ok(Expense {
        id: row.get(0)?,
        title: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        date: row.get(4)?,
    })
}
