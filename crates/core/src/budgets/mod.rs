//! Budgets module - spending caps, progress, and threshold alerts.

mod budgets_model;
#[cfg(test)]
mod budgets_model_tests;
mod budgets_service;
mod budgets_traits;

pub use budgets_model::{
    current_period_window, Budget, BudgetAlert, BudgetPeriod, BudgetProgress, BudgetUpdate,
    NewBudget, NewBudgetAlert,
};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
