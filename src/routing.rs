//! Application router configuration for the REST API and the expense tracker page.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;

use crate::{
    AppState,
    dashboard::{create_expense_form_endpoint, delete_expense_form_endpoint, get_expenses_page},
    endpoints,
    error_pages::{get_404_not_found, get_internal_server_error_page},
    expense::{create_expense_endpoint, delete_expense_endpoint, list_expenses_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    // The API is open to browser clients served from other origins.
    let api_routes = Router::new()
        .route(
            endpoints::EXPENSES_API,
            get(list_expenses_endpoint).post(create_expense_endpoint),
        )
        .route(endpoints::EXPENSE_API, delete(delete_expense_endpoint))
        .layer(CorsLayer::permissive());

    let view_routes = Router::new()
        .route(endpoints::ROOT, get(get_expenses_page))
        .route(
            endpoints::EXPENSES_FORM,
            post(create_expense_form_endpoint),
        )
        .route(
            endpoints::DELETE_EXPENSE_FORM,
            delete(delete_expense_form_endpoint),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    api_routes
        .merge(view_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}
