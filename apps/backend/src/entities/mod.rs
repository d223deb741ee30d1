pub mod expenses;

pub use expenses::Entity as Expenses;
pub use expenses::Model as ExpenseRow;
