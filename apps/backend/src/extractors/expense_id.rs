use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Expense id taken from the `{id}` route segment.
///
/// Only the shape is checked here; whether a row exists is decided inside
/// the handler's transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseId(pub i64);

impl FromRequest for ExpenseId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_expense_id(req.match_info().get("id")))
    }
}

fn parse_expense_id(raw: Option<&str>) -> Result<ExpenseId, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidExpenseId, "Missing expense id parameter")
    })?;

    raw.parse::<i64>().map(ExpenseId).map_err(|_| {
        AppError::invalid(
            ErrorCode::InvalidExpenseId,
            format!("id: expected an integer, got '{raw}'"),
        )
    })
}
