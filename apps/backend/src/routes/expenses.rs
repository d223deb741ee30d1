//! `/expenses` endpoints.
//!
//! Every handler runs its storage work inside one [`with_txn`] session, so
//! the session is released whether the request succeeds or fails.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{ExpenseId, ValidatedJson};
use crate::repos::expenses::{self as expenses_repo, Expense, NewExpense};
use crate::state::app_state::AppState;

/// Body of `POST /expenses`. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseCreateRequest {
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: Date,
}

impl ExpenseCreateRequest {
    /// Check field rules and turn the request into a storable expense.
    ///
    /// All violations are reported together in one detail string.
    pub fn validate(self) -> Result<NewExpense, AppError> {
        let mut violations = Vec::new();

        if !self.amount.is_finite() {
            violations.push("amount: must be a finite number");
        } else if self.amount <= 0.0 {
            violations.push("amount: must be greater than 0");
        }
        if self.category.trim().is_empty() {
            violations.push("category: must not be empty");
        }

        if !violations.is_empty() {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                violations.join("; "),
            ));
        }

        Ok(NewExpense {
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseResponse {
    pub id: i64,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub date: Date,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            amount: expense.amount,
            category: expense.category,
            description: expense.description,
            date: expense.date,
            created_at: expense.created_at,
        }
    }
}

/// Query of `GET /expenses`.
///
/// Read from raw pairs so a repeated `category` is not an error: the last
/// occurrence wins, and other keys are ignored.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub category: Option<String>,
}

impl ListQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let category = pairs
            .into_iter()
            .filter(|(key, _)| key == "category")
            .map(|(_, value)| value)
            .last();
        Self { category }
    }

    /// `?category=` with an empty value means "no filter".
    fn filter(self) -> Option<String> {
        self.category.filter(|c| !c.is_empty())
    }
}

/// POST /expenses
async fn create_expense(
    body: ValidatedJson<ExpenseCreateRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let new_expense = body.into_inner().validate()?;

    let expense = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(expenses_repo::create(txn, new_expense).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(ExpenseResponse::from(expense)))
}

/// GET /expenses
async fn list_expenses(
    query: web::Query<Vec<(String, String)>>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let category = ListQuery::from_pairs(query.into_inner()).filter();

    let expenses = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(expenses_repo::list(txn, category.as_deref()).await?) })
    })
    .await?;

    let body: Vec<ExpenseResponse> = expenses.into_iter().map(ExpenseResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /expenses/{id}
async fn get_expense(
    expense_id: ExpenseId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let ExpenseId(id) = expense_id;

    let expense = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(expenses_repo::require_by_id(txn, id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(ExpenseResponse::from(expense)))
}

/// DELETE /expenses/{id}
async fn delete_expense(
    expense_id: ExpenseId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let ExpenseId(id) = expense_id;

    with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(expenses_repo::delete(txn, id).await?) })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/expenses")
            .route(web::get().to(list_expenses))
            .route(web::post().to(create_expense)),
    );
    cfg.service(
        web::resource("/expenses/{id}")
            .route(web::get().to(get_expense))
            .route(web::delete().to(delete_expense)),
    );
}
