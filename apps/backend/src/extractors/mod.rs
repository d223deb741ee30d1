pub mod expense_id;
pub mod validated_json;

pub use expense_id::ExpenseId;
pub use validated_json::ValidatedJson;
