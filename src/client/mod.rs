//! Client state for the expense tracker: the fetched expenses, the filter
//! parameters and the views derived from them.

mod aggregation;
mod api;
mod filter;
mod store;

pub use aggregation::{CategoryTotal, category_data};
pub use api::{ExpenseApi, LocalExpenseApi};
pub use filter::ExpenseFilter;
pub use store::{ExpenseClient, ExpenseForm};
