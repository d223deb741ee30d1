use actix_web::http::StatusCode;
use actix_web::test;
use expenses::state::app_state::AppState;

use crate::common::read_json;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn health_reports_ok() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, serde_json::json!({ "status": "ok" }));
}

#[actix_web::test]
async fn health_does_not_need_storage() {
    let app = create_test_app(AppState::without_db())
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, serde_json::json!({ "status": "ok" }));
}

#[actix_web::test]
async fn unknown_path_is_404() {
    let app = create_test_app(AppState::without_db())
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
