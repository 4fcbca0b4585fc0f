//! JSON endpoints for listing, creating and deleting expenses.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::expense::{ExpenseId, ExpenseService, NewExpense};

/// Respond with every expense as a JSON array, most recent first.
pub async fn list_expenses_endpoint(State(service): State<ExpenseService>) -> Response {
    match service.list_expenses() {
        Ok(expenses) => Json(expenses).into_response(),
        Err(error) => error.into_json_response(),
    }
}

/// Save the expense in the request body and respond with the saved expense.
///
/// The body is not validated beyond its JSON shape.
pub async fn create_expense_endpoint(
    State(service): State<ExpenseService>,
    Json(new_expense): Json<NewExpense>,
) -> Response {
    match service.create_expense(new_expense) {
        Ok(expense) => (StatusCode::CREATED, Json(expense)).into_response(),
        Err(error) => error.into_json_response(),
    }
}

/// Delete an expense. Responds with 204 whether or not the expense existed.
pub async fn delete_expense_endpoint(
    State(service): State<ExpenseService>,
    Path(expense_id): Path<ExpenseId>,
) -> Response {
    match service.delete_expense(expense_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_json_response(),
    }
}

#[cfg(test)]
mod expense_api_tests {
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;
    use time::macros::datetime;

    use crate::{
        AppState, build_router,
        endpoints::{self, format_endpoint},
        expense::Expense,
    };

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection).expect("Could not create app state.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    async fn post_expense(server: &TestServer, body: serde_json::Value) -> Expense {
        let response = server.post(endpoints::EXPENSES_API).json(&body).await;
        response.assert_status(StatusCode::CREATED);

        response.json::<Expense>()
    }

    #[tokio::test]
    async fn list_is_empty_array_initially() {
        let server = get_test_server();

        let response = server.get(endpoints::EXPENSES_API).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Expense>>(), vec![]);
    }

    #[tokio::test]
    async fn create_responds_with_created_expense() {
        let server = get_test_server();

        let expense = post_expense(
            &server,
            json!({"title": "Lunch", "amount": "12.50", "category": "Food"}),
        )
        .await;

        assert!(expense.id > 0);
        assert_eq!(expense.title, "Lunch");
        assert_eq!(expense.amount, 12.5);
        assert_eq!(expense.category, "Food");
    }

    #[tokio::test]
    async fn create_does_not_validate_fields() {
        let server = get_test_server();

        let expense = post_expense(&server, json!({"title": "Mystery"})).await;

        assert_eq!(expense.category, "");
        assert_eq!(expense.amount, 0.0);
    }

    #[tokio::test]
    async fn create_rejects_non_numeric_amount() {
        let server = get_test_server();

        let response = server
            .post(endpoints::EXPENSES_API)
            .json(&json!({"title": "Lunch", "amount": "twelve", "category": "Food"}))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_rejects_non_finite_amount() {
        let server = get_test_server();

        for amount in ["inf", "NaN"] {
            let response = server
                .post(endpoints::EXPENSES_API)
                .json(&json!({"title": "Lunch", "amount": amount, "category": "Food"}))
                .await;

            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        }

        let response = server.get(endpoints::EXPENSES_API).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Expense>>(), vec![]);
    }

    #[tokio::test]
    async fn list_is_sorted_by_date_descending() {
        let server = get_test_server();
        let older = post_expense(
            &server,
            json!({"title": "Old", "amount": 1, "category": "A", "date": "2024-01-01T00:00:00Z"}),
        )
        .await;
        let newer = post_expense(
            &server,
            json!({"title": "New", "amount": 2, "category": "B", "date": "2024-02-01T00:00:00Z"}),
        )
        .await;

        let got = server
            .get(endpoints::EXPENSES_API)
            .await
            .json::<Vec<Expense>>();

        assert_eq!(got, vec![newer, older]);
        assert_eq!(got[0].date, datetime!(2024-02-01 0:00 UTC));
    }

    #[tokio::test]
    async fn delete_responds_no_content_and_removes_expense() {
        let server = get_test_server();
        let expense = post_expense(
            &server,
            json!({"title": "Lunch", "amount": 12.5, "category": "Food"}),
        )
        .await;

        let response = server
            .delete(&format_endpoint(endpoints::EXPENSE_API, expense.id))
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
        assert_eq!(response.text(), "");
        let got = server
            .get(endpoints::EXPENSES_API)
            .await
            .json::<Vec<Expense>>();
        assert!(got.is_empty());
    }

    #[tokio::test]
    async fn delete_missing_expense_responds_no_content() {
        let server = get_test_server();

        let response = server
            .delete(&format_endpoint(endpoints::EXPENSE_API, 999))
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn allows_cross_origin_requests() {
        let server = get_test_server();

        let response = server
            .get(endpoints::EXPENSES_API)
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("http://localhost:3000"),
            )
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }
}
