//! Narrows the expense list by category and date range.

use time::{Date, OffsetDateTime};

use crate::expense::Expense;

/// The filter parameters set by the user.
///
/// An expense must pass every part of the filter to be shown. Each part
/// passes everything when it is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Matches expenses whose category contains this text, ignoring case.
    pub category: String,
    /// Matches expenses dated on or after the start of this day (UTC).
    pub start_date: Option<Date>,
    /// Matches expenses dated on or before the start of this day (UTC).
    pub end_date: Option<Date>,
}

impl ExpenseFilter {
    /// Whether no filter parameters are set.
    pub fn is_empty(&self) -> bool {
        self.category.is_empty() && self.start_date.is_none() && self.end_date.is_none()
    }

    /// Whether `expense` passes the category, start date and end date filters.
    pub fn matches(&self, expense: &Expense) -> bool {
        self.matches_category(&expense.category)
            && self
                .start_date
                .is_none_or(|start| expense.date >= start_of_day(start))
            && self
                .end_date
                .is_none_or(|end| expense.date <= start_of_day(end))
    }

    fn matches_category(&self, category: &str) -> bool {
        self.category.is_empty()
            || category
                .to_lowercase()
                .contains(&self.category.to_lowercase())
    }
}

// Date bounds compare as midnight UTC, the same instant a browser gives for
// a bare "YYYY-MM-DD" string.
fn start_of_day(date: Date) -> OffsetDateTime {
    date.midnight().assume_utc()
}
