//! The interface the client state uses to reach the expense backend.

use std::future::Future;

use crate::{
    Error,
    expense::{Expense, ExpenseId, ExpenseService, NewExpense},
};

/// The backend calls that [crate::ExpenseClient] depends on.
///
/// Implement this to point the client at a different backend, e.g. a fake
/// in tests.
pub trait ExpenseApi {
    /// Fetch every expense, most recent first.
    fn list(&self) -> impl Future<Output = Result<Vec<Expense>, Error>> + Send;

    /// Save a new expense.
    fn create(&self, new_expense: NewExpense) -> impl Future<Output = Result<Expense, Error>> + Send;

    /// Delete an expense. Deleting a missing expense succeeds.
    fn delete(&self, id: ExpenseId) -> impl Future<Output = Result<(), Error>> + Send;
}

/// An [ExpenseApi] that calls the service layer in the same process.
#[derive(Debug, Clone)]
pub struct LocalExpenseApi {
    service: ExpenseService,
}

impl LocalExpenseApi {
    /// Create an API client backed by `service`.
    pub fn new(service: ExpenseService) -> Self {
        Self { service }
    }
}

impl ExpenseApi for LocalExpenseApi {
    async fn list(&self) -> Result<Vec<Expense>, Error> {
        self.service.list_expenses()
    }

    async fn create(&self, new_expense: NewExpense) -> Result<Expense, Error> {
        self.service.create_expense(new_expense)
    }

    async fn delete(&self, id: ExpenseId) -> Result<(), Error> {
        self.service.delete_expense(id)
    }
}
