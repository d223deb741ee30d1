use expenses::errors::domain::{DomainError, NotFoundKind};
use expenses::repos::expenses::{self as expenses_repo, NewExpense, EXPENSE_NOT_FOUND};
use time::macros::date;

use crate::support::build_test_state;
use crate::support::factory::new_expense;

#[tokio::test]
async fn create_then_require_returns_same_expense() {
    let state = build_test_state().await;
    let db = state.db().unwrap();

    let created = expenses_repo::create(
        db,
        NewExpense {
            amount: 64.0,
            category: "utilities".to_string(),
            description: Some("power bill".to_string()),
            date: date!(2024 - 04 - 30),
        },
    )
    .await
    .unwrap();

    let fetched = expenses_repo::require_by_id(db, created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.description.as_deref(), Some("power bill"));
}

#[tokio::test]
async fn require_missing_is_expense_not_found() {
    let state = build_test_state().await;
    let db = state.db().unwrap();

    let err = expenses_repo::require_by_id(db, 77).await.unwrap_err();
    match err {
        DomainError::NotFound(NotFoundKind::Expense, detail) => {
            assert_eq!(detail, EXPENSE_NOT_FOUND)
        }
        other => panic!("expected expense not-found, got {other:?}"),
    }
    assert_eq!(expenses_repo::find_by_id(db, 77).await.unwrap(), None);
}

#[tokio::test]
async fn delete_missing_is_expense_not_found() {
    let state = build_test_state().await;
    let db = state.db().unwrap();

    let err = expenses_repo::delete(db, 1).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Expense, _)));
}

#[tokio::test]
async fn delete_removes_row_and_count_follows() {
    let state = build_test_state().await;
    let db = state.db().unwrap();

    let a = expenses_repo::create(db, new_expense(1.0, "food", date!(2024 - 01 - 01)))
        .await
        .unwrap();
    expenses_repo::create(db, new_expense(2.0, "food", date!(2024 - 01 - 01)))
        .await
        .unwrap();
    assert_eq!(expenses_repo::count(db).await.unwrap(), 2);

    expenses_repo::delete(db, a.id).await.unwrap();

    assert_eq!(expenses_repo::count(db).await.unwrap(), 1);
    assert_eq!(expenses_repo::find_by_id(db, a.id).await.unwrap(), None);
}

#[tokio::test]
async fn list_is_case_sensitive() {
    let state = build_test_state().await;
    let db = state.db().unwrap();

    expenses_repo::create(db, new_expense(1.0, "Food", date!(2024 - 01 - 01)))
        .await
        .unwrap();
    expenses_repo::create(db, new_expense(2.0, "food", date!(2024 - 01 - 01)))
        .await
        .unwrap();

    let lower = expenses_repo::list(db, Some("food")).await.unwrap();
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].category, "food");

    assert!(expenses_repo::list(db, Some("FOOD")).await.unwrap().is_empty());
    assert_eq!(expenses_repo::list(db, None).await.unwrap().len(), 2);
}

#[tokio::test]
async fn category_is_stored_verbatim() {
    let state = build_test_state().await;
    let db = state.db().unwrap();

    let created = expenses_repo::create(db, new_expense(1.0, " Dining Out ", date!(2024 - 01 - 01)))
        .await
        .unwrap();

    assert_eq!(created.category, " Dining Out ");
    assert_eq!(expenses_repo::list(db, Some(" Dining Out ")).await.unwrap().len(), 1);
}
