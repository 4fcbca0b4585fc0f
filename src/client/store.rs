//! The client-side store of expenses and filter parameters.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    client::{
        ExpenseApi,
        aggregation::{CategoryTotal, category_data},
        filter::ExpenseFilter,
    },
    expense::{Expense, ExpenseId, NewExpense},
};

/// The raw values of the new expense form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseForm {
    /// What the money was spent on.
    #[serde(default)]
    pub title: String,
    /// How much was spent, as text.
    #[serde(default)]
    pub amount: String,
    /// The category label.
    #[serde(default)]
    pub category: String,
}

impl ExpenseForm {
    /// Check that the title, amount and category have been filled in and
    /// that the amount is a number.
    ///
    /// # Errors
    /// Returns [Error::MissingField] naming the first empty field, or
    /// [Error::InvalidAmount] if the amount is not a finite number.
    pub fn validate(&self) -> Result<NewExpense, Error> {
        let title = required("title", &self.title)?;
        let amount_text = required("amount", &self.amount)?;
        let category = required("category", &self.category)?;

        let amount: f64 = amount_text
            .parse()
            .map_err(|_| Error::InvalidAmount(amount_text.to_owned()))?;

        if !amount.is_finite() {
            return Err(Error::InvalidAmount(amount_text.to_owned()));
        }

        Ok(NewExpense::new(title, amount, category))
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, Error> {
    match value.trim() {
        "" => Err(Error::MissingField(field)),
        value => Ok(value),
    }
}

/// Holds the full list of expenses fetched from the backend along with the
/// current filter parameters.
///
/// The filtered list and the category totals are computed from these on
/// request. Every change to the backend is followed by a full refetch.
#[derive(Debug, Clone)]
pub struct ExpenseClient<A> {
    api: A,
    expenses: Vec<Expense>,
    filter: ExpenseFilter,
}

impl<A: ExpenseApi> ExpenseClient<A> {
    /// Create an empty client. Call [ExpenseClient::refresh] to load the
    /// expenses.
    pub fn new(api: A) -> Self {
        Self {
            api,
            expenses: Vec::new(),
            filter: ExpenseFilter::default(),
        }
    }

    /// Replace the held expenses with the latest list from the backend.
    ///
    /// # Errors
    /// Returns the backend error, in which case the held expenses are left
    /// as they were.
    pub async fn refresh(&mut self) -> Result<(), Error> {
        self.expenses = self.api.list().await?;

        Ok(())
    }

    /// Validate `form`, save it as a new expense and then refetch the list.
    ///
    /// # Errors
    /// Returns a validation error without contacting the backend if a field
    /// is missing, otherwise any error from the backend.
    pub async fn add_expense(&mut self, form: &ExpenseForm) -> Result<Expense, Error> {
        let new_expense = form.validate()?;
        let expense = self.api.create(new_expense).await?;
        self.refresh().await?;

        Ok(expense)
    }

    /// Delete an expense and then refetch the list.
    ///
    /// # Errors
    /// Returns any error from the backend.
    pub async fn delete_expense(&mut self, id: ExpenseId) -> Result<(), Error> {
        self.api.delete(id).await?;
        self.refresh().await
    }
}

impl<A> ExpenseClient<A> {
    /// Every held expense, unfiltered.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The current filter parameters.
    pub fn filter(&self) -> &ExpenseFilter {
        &self.filter
    }

    /// Replace the filter parameters.
    pub fn set_filter(&mut self, filter: ExpenseFilter) {
        self.filter = filter;
    }

    /// Reset every filter parameter so that all expenses are shown.
    pub fn clear_filters(&mut self) {
        self.filter = ExpenseFilter::default();
    }

    /// The held expenses that pass the current filter, in their fetched order.
    pub fn filtered_expenses(&self) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|expense| self.filter.matches(expense))
            .collect()
    }

    /// The total spent per category over the filtered expenses.
    pub fn category_data(&self) -> Vec<CategoryTotal> {
        category_data(self.filtered_expenses())
    }
}
