//! The expense tracker page.
//!
//! Shows a form for adding expenses, filters, a pie chart of spending by
//! category and the list of filtered expenses.

mod charts;
mod handlers;
mod views;

pub use handlers::{create_expense_form_endpoint, delete_expense_form_endpoint, get_expenses_page};
