use log::{debug, info};
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::budgets_model::{
    current_period_window, Budget, BudgetAlert, BudgetProgress, BudgetUpdate, NewBudget,
    NewBudgetAlert,
};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::categories::CategoryRepositoryTrait;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::notifications::{NewNotification, NotificationServiceTrait, Severity};
use crate::transactions::{TransactionRepositoryTrait, TransactionType};

/// Service for budgets, their progress, and threshold alerts.
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    notification_service: Arc<dyn NotificationServiceTrait>,
}

impl BudgetService {
    /// Creates a new BudgetService instance.
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        notification_service: Arc<dyn NotificationServiceTrait>,
    ) -> Self {
        Self {
            repository,
            category_repository,
            transaction_repository,
            notification_service,
        }
    }

    /// Computes the current-period progress for a single budget.
    fn compute_progress(&self, user_id: &str, budget: &Budget) -> Result<BudgetProgress> {
        let today = Utc::now().date_naive();
        let (period_start, period_end) = current_period_window(budget.period, today);
        // A budget only starts counting from its start_date.
        let from = period_start.max(budget.start_date);

        let spent: Decimal = self
            .transaction_repository
            .list_in_range(user_id, from, period_end)?
            .iter()
            .filter(|tx| {
                tx.transaction_type == TransactionType::Expense
                    && tx.category_id == budget.category_id
            })
            .map(|tx| tx.amount)
            .sum();

        let percent_used = if budget.amount > Decimal::ZERO {
            (spent / budget.amount * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
        } else {
            Decimal::ZERO
        };

        Ok(BudgetProgress {
            budget_id: budget.id.clone(),
            category_id: budget.category_id.clone(),
            period_start,
            period_end,
            limit: budget.amount,
            spent,
            remaining: budget.amount - spent,
            percent_used,
        })
    }
}

#[async_trait::async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn create_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget> {
        new_budget.validate()?;
        self.category_repository
            .get_by_id(user_id, &new_budget.category_id)?;
        debug!(
            "Creating {} budget of {} for user {}",
            new_budget.period.as_str(),
            new_budget.amount,
            user_id
        );
        self.repository.create(user_id, new_budget).await
    }

    async fn update_budget(&self, user_id: &str, update: BudgetUpdate) -> Result<Budget> {
        update.validate()?;
        self.repository.update(user_id, update).await
    }

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<()> {
        self.repository.delete(user_id, budget_id).await?;
        Ok(())
    }

    fn get_budget(&self, user_id: &str, budget_id: &str) -> Result<Budget> {
        self.repository.get_by_id(user_id, budget_id)
    }

    fn list_budgets(&self, user_id: &str, active_only: bool) -> Result<Vec<Budget>> {
        self.repository.list(user_id, active_only)
    }

    fn get_progress(&self, user_id: &str, budget_id: &str) -> Result<BudgetProgress> {
        let budget = self.repository.get_by_id(user_id, budget_id)?;
        self.compute_progress(user_id, &budget)
    }

    fn get_all_progress(&self, user_id: &str) -> Result<Vec<BudgetProgress>> {
        let budgets = self.repository.list(user_id, true)?;
        budgets
            .iter()
            .map(|b| self.compute_progress(user_id, b))
            .collect()
    }

    fn list_alerts(&self, user_id: &str, budget_id: &str) -> Result<Vec<BudgetAlert>> {
        // Ownership check before exposing alerts.
        self.repository.get_by_id(user_id, budget_id)?;
        self.repository.list_alerts(user_id, budget_id)
    }

    async fn evaluate_alerts(&self, user_id: &str) -> Result<Vec<BudgetAlert>> {
        let budgets = self.repository.list(user_id, true)?;
        let mut created = Vec::new();

        for budget in &budgets {
            let progress = self.compute_progress(user_id, budget)?;
            let percent = progress.percent_used;

            // The warning threshold and the 100% cap are separate alerts.
            let mut thresholds = vec![budget.alert_threshold_pct];
            if budget.alert_threshold_pct != 100 {
                thresholds.push(100);
            }

            for threshold in thresholds {
                if percent < Decimal::from(threshold) {
                    continue;
                }
                if self
                    .repository
                    .find_alert(&budget.id, progress.period_start, threshold)?
                    .is_some()
                {
                    continue;
                }

                let alert = self
                    .repository
                    .insert_alert(NewBudgetAlert {
                        budget_id: budget.id.clone(),
                        period_start: progress.period_start,
                        spent: progress.spent,
                        threshold_pct: threshold,
                    })
                    .await?;

                let category = self
                    .category_repository
                    .get_by_id(user_id, &budget.category_id)?;
                let (title, severity) = if threshold >= 100 {
                    (format!("Budget exceeded: {}", category.name), Severity::Alert)
                } else {
                    (format!("Budget warning: {}", category.name), Severity::Warning)
                };
                self.notification_service
                    .create_notification(
                        user_id,
                        NewNotification {
                            title,
                            message: format!(
                                "You have spent {} of your {} {} budget ({}%)",
                                progress.spent,
                                budget.amount,
                                budget.period.as_str(),
                                percent
                            ),
                            severity,
                        },
                    )
                    .await?;

                info!(
                    "Budget {} crossed {}% for user {} (spent {})",
                    budget.id, threshold, user_id, progress.spent
                );
                created.push(alert);
            }
        }

        Ok(created)
    }
}
