//! SeaORM adapter for the expenses table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::expenses;

pub mod dto;

pub use dto::ExpenseCreate;

// Adapter functions return DbErr; repos layer maps to DomainError.

pub async fn create_expense<C: ConnectionTrait>(
    conn: &C,
    dto: ExpenseCreate,
) -> Result<expenses::Model, sea_orm::DbErr> {
    let active = expenses::ActiveModel {
        id: NotSet,
        amount: Set(dto.amount),
        category: Set(dto.category),
        description: Set(dto.description),
        date: Set(dto.date),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    expense_id: i64,
) -> Result<Option<expenses::Model>, sea_orm::DbErr> {
    expenses::Entity::find_by_id(expense_id).one(conn).await
}

/// All rows, or only those whose category equals `category` exactly.
pub async fn list<C: ConnectionTrait>(
    conn: &C,
    category: Option<&str>,
) -> Result<Vec<expenses::Model>, sea_orm::DbErr> {
    let mut query = expenses::Entity::find();
    if let Some(category) = category {
        query = query.filter(expenses::Column::Category.eq(category));
    }
    query.order_by_asc(expenses::Column::Id).all(conn).await
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_by_id<C: ConnectionTrait>(
    conn: &C,
    expense_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = expenses::Entity::delete_by_id(expense_id).exec(conn).await?;
    Ok(res.rows_affected)
}

pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    expenses::Entity::find().count(conn).await
}
