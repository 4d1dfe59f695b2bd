//! SQLite storage implementation for budgets and their alerts.

mod model;
mod repository;

pub use model::{BudgetAlertDB, BudgetDB, NewBudgetAlertDB, NewBudgetDB};
pub use repository::BudgetRepository;
