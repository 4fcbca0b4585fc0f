//! Alert messages shown after a form submission.
//!
//! Alerts are rendered as HTML fragments that HTMX swaps into the
//! `#alert-container` element of the page.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// An alert message with its styling.
#[derive(Debug, Clone)]
pub enum Alert {
    /// Something went wrong, with a description of what to do about it.
    Error {
        /// A short summary of the error.
        message: String,
        /// More detail on the error and how to fix it.
        details: String,
    },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        match self {
            Alert::Error { message, details } => html! {
                div
                    role="alert"
                    class="p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50
                        dark:bg-gray-800 dark:text-red-400"
                {
                    p class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p { (details) }
                    }
                }
            },
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        Html(self.into_html().into_string()).into_response()
    }
}
