//! Expense records: the domain type, its database table, the service layer
//! and the JSON API.

mod api;
mod db;
mod domain;
mod service;

pub use api::{create_expense_endpoint, delete_expense_endpoint, list_expenses_endpoint};
pub use db::create_expense_table;
pub use domain::{Expense, ExpenseId, NewExpense};
pub use service::ExpenseService;
