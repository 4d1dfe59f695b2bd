//! Budget repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::budgets_model::{
    Budget, BudgetAlert, BudgetProgress, BudgetUpdate, NewBudget, NewBudgetAlert,
};
use crate::errors::Result;

/// Trait defining the contract for Budget repository operations.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Creates a budget for the user.
    async fn create(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget>;

    /// Updates a budget.
    async fn update(&self, user_id: &str, update: BudgetUpdate) -> Result<Budget>;

    /// Deletes a budget and its alerts. Returns the number of deleted budgets.
    async fn delete(&self, user_id: &str, budget_id: &str) -> Result<usize>;

    /// Retrieves a budget by id.
    fn get_by_id(&self, user_id: &str, budget_id: &str) -> Result<Budget>;

    /// Lists budgets, optionally only active ones.
    fn list(&self, user_id: &str, active_only: bool) -> Result<Vec<Budget>>;

    /// Records an alert crossing.
    async fn insert_alert(&self, alert: NewBudgetAlert) -> Result<BudgetAlert>;

    /// Looks up an alert for (budget, period start, threshold).
    fn find_alert(
        &self,
        budget_id: &str,
        period_start: NaiveDate,
        threshold_pct: i32,
    ) -> Result<Option<BudgetAlert>>;

    /// Lists alerts recorded for a budget, newest first.
    fn list_alerts(&self, user_id: &str, budget_id: &str) -> Result<Vec<BudgetAlert>>;
}

/// Trait defining the contract for Budget service operations.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    /// Creates a budget after referential checks.
    async fn create_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget>;

    /// Updates a budget.
    async fn update_budget(&self, user_id: &str, update: BudgetUpdate) -> Result<Budget>;

    /// Deletes a budget.
    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<()>;

    /// Retrieves a budget by id.
    fn get_budget(&self, user_id: &str, budget_id: &str) -> Result<Budget>;

    /// Lists budgets.
    fn list_budgets(&self, user_id: &str, active_only: bool) -> Result<Vec<Budget>>;

    /// Computes current-period progress for one budget.
    fn get_progress(&self, user_id: &str, budget_id: &str) -> Result<BudgetProgress>;

    /// Computes current-period progress for every active budget.
    fn get_all_progress(&self, user_id: &str) -> Result<Vec<BudgetProgress>>;

    /// Lists recorded alerts for a budget.
    fn list_alerts(&self, user_id: &str, budget_id: &str) -> Result<Vec<BudgetAlert>>;

    /// Evaluates all active budgets, recording alerts for newly crossed
    /// thresholds and emitting a notification for each. Returns the alerts
    /// created by this pass.
    async fn evaluate_alerts(&self, user_id: &str) -> Result<Vec<BudgetAlert>>;
}
