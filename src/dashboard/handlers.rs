//! Route handlers for the expense tracker page and its form commands.
//!
//! Each request builds an [ExpenseClient] over the in-process API, so the
//! page goes through the same list/create/delete calls as any other client.

use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRefresh;
use serde::Deserialize;
use time::{Date, macros::format_description};

use crate::{
    Error,
    client::{ExpenseClient, ExpenseFilter, ExpenseForm, LocalExpenseApi},
    dashboard::views::expenses_page_view,
    expense::{ExpenseId, ExpenseService},
};

/// The filter parameters as they appear in the page's query string.
///
/// Empty or unparsable dates are treated as unset.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

impl FilterQuery {
    fn into_filter(self) -> ExpenseFilter {
        ExpenseFilter {
            category: self.category,
            start_date: parse_date(&self.start_date),
            end_date: parse_date(&self.end_date),
        }
    }
}

fn parse_date(text: &str) -> Option<Date> {
    if text.is_empty() {
        return None;
    }

    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .inspect_err(|error| tracing::debug!("ignoring filter date {text:?}: {error}"))
        .ok()
}

fn new_client(service: ExpenseService) -> ExpenseClient<LocalExpenseApi> {
    ExpenseClient::new(LocalExpenseApi::new(service))
}

/// Display the expense form, filters, spending chart and expense list.
pub async fn get_expenses_page(
    State(service): State<ExpenseService>,
    Query(query): Query<FilterQuery>,
) -> Result<Response, Error> {
    let mut client = new_client(service);
    client.set_filter(query.into_filter());
    client
        .refresh()
        .await
        .inspect_err(|error| tracing::error!("could not load expenses: {error}"))?;

    Ok(expenses_page_view(&client).into_response())
}

/// Handle the new expense form. Tells HTMX to reload the page on success.
pub async fn create_expense_form_endpoint(
    State(service): State<ExpenseService>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let mut client = new_client(service);

    match client.add_expense(&form).await {
        Ok(expense) => {
            tracing::info!("added expense {}", expense.id);
            (HxRefresh(true), StatusCode::OK).into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}

/// Handle a delete button. Tells HTMX to reload the page on success.
pub async fn delete_expense_form_endpoint(
    State(service): State<ExpenseService>,
    Path(expense_id): Path<ExpenseId>,
) -> Response {
    let mut client = new_client(service);

    match client.delete_expense(expense_id).await {
        Ok(()) => (HxRefresh(true), StatusCode::OK).into_response(),
        Err(error) => error.into_alert_response(),
    }
}
