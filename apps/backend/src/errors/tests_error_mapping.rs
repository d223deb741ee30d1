// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::error::AppError;
use crate::errors::ErrorCode;

#[test]
fn maps_validation_to_422() {
    let de = DomainError::validation("amount: must be greater than 0");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Expense, "Expense not found");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "EXPENSE_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
    assert_eq!(app.detail(), "Expense not found");

    let other = DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "INTERNAL_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn maps_db_err_record_not_found() {
    let app: AppError = sea_orm::DbErr::RecordNotFound("expenses".into()).into();
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn constructor_helpers() {
    assert!(matches!(
        DomainError::validation("bad"),
        DomainError::Validation(_)
    ));
    assert!(matches!(
        DomainError::not_found(NotFoundKind::Expense, "missing"),
        DomainError::NotFound(NotFoundKind::Expense, _)
    ));
    assert!(matches!(
        DomainError::infra(InfraErrorKind::Timeout, "timeout"),
        DomainError::Infra(InfraErrorKind::Timeout, _)
    ));
}
