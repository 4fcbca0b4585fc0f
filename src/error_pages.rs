//! Full-page error responses for the HTML routes.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// A page explaining that something went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPage {
    /// The route or resource does not exist.
    NotFound,
    /// The server failed to handle the request.
    InternalServerError,
}

impl ErrorPage {
    fn status(self) -> StatusCode {
        match self {
            ErrorPage::NotFound => StatusCode::NOT_FOUND,
            ErrorPage::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        let page = match self {
            ErrorPage::NotFound => error_view(
                "Not Found",
                "404",
                "Something's missing.",
                "Sorry, we can't find that page. Your expenses are on the home page.",
            ),
            ErrorPage::InternalServerError => error_view(
                "Internal Server Error",
                "500",
                "Sorry, something went wrong.",
                "Try again later or check the server logs",
            ),
        };

        (self.status(), Html(page.into_string())).into_response()
    }
}

/// The fallback route handler for unknown paths.
pub async fn get_404_not_found() -> Response {
    ErrorPage::NotFound.into_response()
}

/// The page that HTMX requests are redirected to after a server error.
pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::InternalServerError.into_response()
}
