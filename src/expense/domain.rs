//! Core expense domain types.

use serde::{Deserialize, Deserializer, Serialize, de};
use time::OffsetDateTime;

/// Database identifier for an expense.
pub type ExpenseId = i64;

/// A single expense, e.g. 'Lunch, $12.50, Food'.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID assigned by the database.
    pub id: ExpenseId,
    /// A short description of what the money was spent on.
    pub title: String,
    /// How much was spent.
    pub amount: f64,
    /// A free-text label for grouping expenses, e.g. "Groceries".
    pub category: String,
    /// When the expense was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// The data for an expense that has not been saved yet.
///
/// Missing fields are accepted and fall back to their defaults, the server
/// stores whatever it is given. Validation happens on the client before
/// submission.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewExpense {
    /// A short description of what the money was spent on.
    #[serde(default)]
    pub title: String,
    /// Accepts either a JSON number or a numeric string.
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: f64,
    /// A free-text label for grouping expenses.
    #[serde(default)]
    pub category: String,
    /// Defaults to the time the expense is saved.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<OffsetDateTime>,
}

impl NewExpense {
    /// Create a new expense dated at the time it is saved.
    ///
    /// Use [NewExpense::date] to set a specific date.
    pub fn new(title: &str, amount: f64, category: &str) -> Self {
        Self {
            title: title.to_owned(),
            amount,
            category: category.to_owned(),
            date: None,
        }
    }

    /// Set the date of the expense.
    pub fn date(mut self, date: OffsetDateTime) -> Self {
        self.date = Some(date);
        self
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    let (amount, text) = match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(amount) => (amount, amount.to_string()),
        RawAmount::Text(text) => match text.trim().parse::<f64>() {
            Ok(amount) => (amount, text),
            Err(_) => return Err(invalid_amount(&text)),
        },
    };

    // "inf" and "NaN" parse as floats but cannot be stored or sent as JSON.
    if !amount.is_finite() {
        return Err(invalid_amount(&text));
    }

    Ok(amount)
}

fn invalid_amount<E: de::Error>(text: &str) -> E {
    E::custom(format!("\"{text}\" is not a valid amount"))
}
