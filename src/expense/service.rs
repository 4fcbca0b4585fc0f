//! The service layer that the REST API and the in-process client share.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{
    AppState, Error,
    expense::{
        Expense, ExpenseId, NewExpense,
        db::{create_expense, delete_expense, get_all_expenses},
    },
};

/// Lists, creates and deletes expenses in the database.
#[derive(Debug, Clone)]
pub struct ExpenseService {
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ExpenseService {
    fn from_ref(state: &AppState) -> Self {
        Self::new(state.db_connection.clone())
    }
}

impl ExpenseService {
    /// Create a service over a shared, initialised database connection.
    pub fn new(db_connection: Arc<Mutex<Connection>>) -> Self {
        Self { db_connection }
    }

    /// Get every expense, most recent first.
    ///
    /// # Errors
    /// Returns [Error::DatabaseLockError] if the database lock is poisoned,
    /// or [Error::SqlError] if the query fails.
    pub fn list_expenses(&self) -> Result<Vec<Expense>, Error> {
        let connection = self.connection()?;
        get_all_expenses(&connection)
    }

    /// Save a new expense. The fields are stored as given.
    ///
    /// # Errors
    /// Returns [Error::DatabaseLockError] if the database lock is poisoned,
    /// or [Error::SqlError] if the insert fails.
    pub fn create_expense(&self, new_expense: NewExpense) -> Result<Expense, Error> {
        let connection = self.connection()?;
        let expense = create_expense(new_expense, &connection)?;
        tracing::debug!("created expense {}", expense.id);

        Ok(expense)
    }

    /// Delete the expense with `id`, if it exists.
    ///
    /// # Errors
    /// Returns [Error::DatabaseLockError] if the database lock is poisoned,
    /// or [Error::SqlError] if the delete fails. Deleting a missing expense
    /// is not an error.
    pub fn delete_expense(&self, id: ExpenseId) -> Result<(), Error> {
        let connection = self.connection()?;
        match delete_expense(id, &connection)? {
            0 => tracing::debug!("expense {id} was already deleted"),
            _ => tracing::debug!("deleted expense {id}"),
        }

        Ok(())
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

#[cfg(test)]
mod expense_service_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use time::macros::datetime;

    use crate::{
        db::initialize,
        expense::{ExpenseService, NewExpense},
    };

    fn get_test_service() -> ExpenseService {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        ExpenseService::new(Arc::new(Mutex::new(connection)))
    }

    #[test]
    fn list_is_empty_for_new_database() {
        let service = get_test_service();

        let got = service.list_expenses().expect("Could not list expenses");

        assert!(got.is_empty());
    }

    #[test]
    fn created_expense_appears_once_in_list() {
        let service = get_test_service();
        service
            .create_expense(NewExpense::new("Rent", 400.0, "Housing"))
            .unwrap();

        let created = service
            .create_expense(NewExpense::new("Lunch", 12.5, "Food"))
            .expect("Could not create expense");

        let got = service.list_expenses().expect("Could not list expenses");
        let matches: Vec<_> = got
            .iter()
            .filter(|expense| expense.id == created.id)
            .collect();
        assert_eq!(got.len(), 2);
        assert_eq!(matches, vec![&created]);
        assert_eq!(created.title, "Lunch");
        assert_eq!(created.amount, 12.5);
        assert_eq!(created.category, "Food");
    }

    #[test]
    fn list_is_most_recent_first() {
        let service = get_test_service();
        let older = service
            .create_expense(NewExpense::new("Old", 1.0, "A").date(datetime!(2024-01-01 0:00 UTC)))
            .unwrap();
        let newer = service
            .create_expense(NewExpense::new("New", 2.0, "B").date(datetime!(2024-02-01 0:00 UTC)))
            .unwrap();

        let got = service.list_expenses().unwrap();

        assert_eq!(got, vec![newer, older]);
    }

    #[test]
    fn delete_removes_only_that_expense() {
        let service = get_test_service();
        let keep = service
            .create_expense(NewExpense::new("Keep", 1.0, "A"))
            .unwrap();
        let remove = service
            .create_expense(NewExpense::new("Remove", 2.0, "A"))
            .unwrap();

        service
            .delete_expense(remove.id)
            .expect("Could not delete expense");

        assert_eq!(service.list_expenses().unwrap(), vec![keep]);
    }

    #[test]
    fn delete_twice_is_not_an_error() {
        let service = get_test_service();
        let expense = service
            .create_expense(NewExpense::new("Lunch", 12.5, "Food"))
            .unwrap();

        service.delete_expense(expense.id).unwrap();
        let second = service.delete_expense(expense.id);

        assert_eq!(second, Ok(()));
        assert!(service.list_expenses().unwrap().is_empty());
    }
}
