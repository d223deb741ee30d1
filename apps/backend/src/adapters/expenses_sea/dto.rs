//! DTOs for expenses_sea adapter.

use time::Date;

/// DTO for inserting a new expense row.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseCreate {
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub date: Date,
}

impl ExpenseCreate {
    pub fn new(amount: f64, category: impl Into<String>, date: Date) -> Self {
        Self {
            amount,
            category: category.into(),
            description: None,
            date,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
