//! Expense Tracker is a web app for recording day-to-day expenses and seeing
//! where the money goes.
//!
//! This library provides a JSON REST API for expense records, a client-side
//! store that filters and aggregates the records, and an HTML page that
//! renders the store with a pie chart of spending by category.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod alert;
mod app_state;
mod client;
mod dashboard;
mod db;
mod endpoints;
mod expense;
mod error_pages;
mod html;
mod logging;
mod routing;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use client::{
    CategoryTotal, ExpenseApi, ExpenseClient, ExpenseFilter, ExpenseForm, LocalExpenseApi,
    category_data,
};
pub use db::initialize as initialize_db;
pub use expense::{Expense, ExpenseId, ExpenseService, NewExpense};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::{alert::Alert, error_pages::ErrorPage};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required field of the expense form was left empty.
    ///
    /// Holds the name of the first missing field.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The amount entered in the expense form is not a number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => ErrorPage::NotFound.into_response(),
            Error::DatabaseLockError => ErrorPage::InternalServerError.into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorPage::InternalServerError.into_response()
            }
        }
    }
}

impl Error {
    /// Respond with a JSON error body, for use by the REST API.
    fn into_json_response(self) -> Response {
        let status = match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::MissingField(_) | Error::InvalidAmount(_) => StatusCode::BAD_REQUEST,
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("An unexpected error occurred: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }

    /// Respond with an alert fragment, for use by HTMX form submissions.
    fn into_alert_response(self) -> Response {
        match self {
            Error::MissingField(_) | Error::InvalidAmount(_) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Could not add expense".to_owned(),
                    details: format!("{}.", capitalise(&self.to_string())),
                },
            )
                .into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details: "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                    },
                )
                    .into_response()
            }
        }
    }
}

fn capitalise(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
