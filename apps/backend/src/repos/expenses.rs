//! Expense repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use time::{Date, OffsetDateTime};
use tracing::{debug, info};

use crate::adapters::expenses_sea as expenses_adapter;
use crate::entities::expenses;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub const EXPENSE_NOT_FOUND: &str = "Expense not found";

/// Expense domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub date: Date,
    pub created_at: OffsetDateTime,
}

/// A validated expense that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub date: Date,
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    new: NewExpense,
) -> Result<Expense, DomainError> {
    let dto = expenses_adapter::ExpenseCreate {
        amount: new.amount,
        category: new.category,
        description: new.description,
        date: new.date,
    };
    let row = expenses_adapter::create_expense(conn, dto)
        .await
        .map_err(map_db_err)?;

    info!(expense_id = row.id, category = %row.category, "expense.created");
    Ok(Expense::from(row))
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    expense_id: i64,
) -> Result<Option<Expense>, DomainError> {
    let row = expenses_adapter::find_by_id(conn, expense_id)
        .await
        .map_err(map_db_err)?;
    Ok(row.map(Expense::from))
}

/// Like [`find_by_id`], but a missing row is a not-found error.
pub async fn require_by_id<C: ConnectionTrait>(
    conn: &C,
    expense_id: i64,
) -> Result<Expense, DomainError> {
    find_by_id(conn, expense_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Expense, EXPENSE_NOT_FOUND))
}

pub async fn list<C: ConnectionTrait>(
    conn: &C,
    category: Option<&str>,
) -> Result<Vec<Expense>, DomainError> {
    let rows = expenses_adapter::list(conn, category)
        .await
        .map_err(map_db_err)?;

    debug!(category = ?category, count = rows.len(), "expense.listed");
    Ok(rows.into_iter().map(Expense::from).collect())
}

/// Permanently remove a row. A missing id is a not-found error; there is
/// no distinction between "never existed" and "already deleted".
pub async fn delete<C: ConnectionTrait>(conn: &C, expense_id: i64) -> Result<(), DomainError> {
    let removed = expenses_adapter::delete_by_id(conn, expense_id)
        .await
        .map_err(map_db_err)?;

    if removed == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Expense,
            EXPENSE_NOT_FOUND,
        ));
    }

    info!(expense_id, "expense.deleted");
    Ok(())
}

pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, DomainError> {
    expenses_adapter::count(conn).await.map_err(map_db_err)
}

// Conversion between the stored row and the domain model

impl From<expenses::Model> for Expense {
    fn from(model: expenses::Model) -> Self {
        Self {
            id: model.id,
            amount: model.amount,
            category: model.category,
            description: model.description,
            date: model.date,
            created_at: model.created_at,
        }
    }
}
