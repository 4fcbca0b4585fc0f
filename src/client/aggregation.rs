//! Sums expenses by category for the spending chart.

use serde::Serialize;

use crate::expense::Expense;

/// The total amount spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// The category label.
    pub name: String,
    /// The sum of the amounts of the expenses in the category.
    pub value: f64,
}

/// Group `expenses` by category and sum the amounts in each group.
///
/// There is one entry per distinct category, in the order each category
/// first appears in `expenses`. Categories are matched exactly, so "Food" and
/// "food" are separate entries.
pub fn category_data<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals
            .iter_mut()
            .find(|total| total.name == expense.category)
        {
            Some(total) => total.value += expense.amount,
            None => totals.push(CategoryTotal {
                name: expense.category.clone(),
                value: expense.amount,
            }),
        }
    }

    totals
}
