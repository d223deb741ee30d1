use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use time::macros::date;

use crate::support::factory::{row_count, seed_expense};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn delete_returns_204_then_get_is_404() {
    let state = build_test_state().await;
    let expense = seed_expense(&state, 10.0, "food", date!(2024 - 01 - 15)).await;
    let app = create_test_app(state.clone()).with_prod_routes().build().await;

    let req = test::TestRequest::delete()
        .uri(&format!("/expenses/{}", expense.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(resp).await.is_empty());
    assert_eq!(row_count(&state).await, 0);

    let req = test::TestRequest::get()
        .uri(&format!("/expenses/{}", expense.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "EXPENSE_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("Expense not found"),
    )
    .await;
}

#[actix_web::test]
async fn delete_twice_is_not_found_the_second_time() {
    let state = build_test_state().await;
    let expense = seed_expense(&state, 10.0, "food", date!(2024 - 01 - 15)).await;
    let app = create_test_app(state).with_prod_routes().build().await;
    let uri = format!("/expenses/{}", expense.id);

    let first = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_problem_details_from_service_response(
        second,
        "EXPENSE_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("Expense not found"),
    )
    .await;
}

#[actix_web::test]
async fn delete_missing_leaves_other_rows_alone() {
    let state = build_test_state().await;
    let kept = seed_expense(&state, 10.0, "food", date!(2024 - 01 - 15)).await;
    let app = create_test_app(state.clone()).with_prod_routes().build().await;

    let req = test::TestRequest::delete()
        .uri(&format!("/expenses/{}", kept.id + 100))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(row_count(&state).await, 1);
}

#[actix_web::test]
async fn delete_only_removes_the_target() {
    let state = build_test_state().await;
    let a = seed_expense(&state, 1.0, "food", date!(2024 - 01 - 01)).await;
    let b = seed_expense(&state, 2.0, "food", date!(2024 - 01 - 02)).await;
    let app = create_test_app(state.clone()).with_prod_routes().build().await;

    let req = test::TestRequest::delete()
        .uri(&format!("/expenses/{}", a.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/expenses/{}", b.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    assert_eq!(row_count(&state).await, 1);
}

#[actix_web::test]
async fn delete_non_integer_id_is_rejected() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::delete().uri("/expenses/xyz").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "INVALID_EXPENSE_ID",
        StatusCode::UNPROCESSABLE_ENTITY,
        None,
    )
    .await;
}
