//! Seed data written straight through the repository, bypassing HTTP.

use expenses::repos::expenses::{self as expenses_repo, Expense, NewExpense};
use expenses::state::app_state::AppState;
use time::Date;

pub fn new_expense(amount: f64, category: &str, date: Date) -> NewExpense {
    NewExpense {
        amount,
        category: category.to_string(),
        description: None,
        date,
    }
}

pub async fn seed_expense(state: &AppState, amount: f64, category: &str, date: Date) -> Expense {
    let db = state.db().expect("test state has a database");
    expenses_repo::create(db, new_expense(amount, category, date))
        .await
        .expect("seed expense")
}

pub async fn row_count(state: &AppState) -> u64 {
    let db = state.db().expect("test state has a database");
    expenses_repo::count(db).await.expect("count expenses")
}
