use log::debug;
use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::analytics_model::{
    compute_breakdown, compute_trends, CategoryBreakdownEntry, DashboardSummary, TrendPoint,
};
use crate::accounts::{is_liability_type, AccountRepositoryTrait};
use crate::budgets::BudgetRepositoryTrait;
use crate::constants::{DASHBOARD_RECENT_TRANSACTIONS, DEFAULT_TREND_MONTHS};
use crate::errors::Result;
use crate::notifications::NotificationRepositoryTrait;
use crate::transactions::{
    TransactionFilters, TransactionRepositoryTrait, TransactionType,
};

/// Trait defining the contract for analytics operations.
pub trait AnalyticsServiceTrait: Send + Sync {
    /// Headline dashboard numbers for the current month.
    fn dashboard_summary(&self, user_id: &str) -> Result<DashboardSummary>;

    /// Per-month income/expense series for the trailing `months` months.
    fn spending_trends(&self, user_id: &str, months: Option<u32>) -> Result<Vec<TrendPoint>>;

    /// Per-category totals of one transaction type within a date range.
    fn category_breakdown(
        &self,
        user_id: &str,
        breakdown_type: TransactionType,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<CategoryBreakdownEntry>>;
}

/// Service computing dashboard, trend, and breakdown aggregates.
pub struct AnalyticsService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    notification_repository: Arc<dyn NotificationRepositoryTrait>,
}

impl AnalyticsService {
    /// Creates a new AnalyticsService instance.
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        notification_repository: Arc<dyn NotificationRepositoryTrait>,
    ) -> Self {
        Self {
            account_repository,
            transaction_repository,
            budget_repository,
            notification_repository,
        }
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn dashboard_summary(&self, user_id: &str) -> Result<DashboardSummary> {
        debug!("Computing dashboard summary for user {}", user_id);
        let today = Utc::now().date_naive();
        let month_start = today.with_day(1).unwrap_or(today);

        let accounts = self.account_repository.list(user_id, Some(true))?;
        let total_balance = accounts
            .iter()
            .map(|a| {
                if is_liability_type(&a.account_type) {
                    -a.balance
                } else {
                    a.balance
                }
            })
            .sum();

        let month_txs = self
            .transaction_repository
            .list_in_range(user_id, month_start, today)?;
        let month_income: Decimal = month_txs
            .iter()
            .filter(|t| t.transaction_type == TransactionType::Income)
            .map(|t| t.amount)
            .sum();
        let month_expenses: Decimal = month_txs
            .iter()
            .filter(|t| t.transaction_type == TransactionType::Expense)
            .map(|t| t.amount)
            .sum();

        let recent_transactions = self.transaction_repository.list(
            user_id,
            &TransactionFilters {
                limit: Some(DASHBOARD_RECENT_TRANSACTIONS as i64),
                ..Default::default()
            },
        )?;

        Ok(DashboardSummary {
            total_balance,
            month_income,
            month_expenses,
            month_net: month_income - month_expenses,
            active_budgets: self.budget_repository.list(user_id, true)?.len(),
            unread_notifications: self.notification_repository.unread_count(user_id)?,
            recent_transactions,
        })
    }

    fn spending_trends(&self, user_id: &str, months: Option<u32>) -> Result<Vec<TrendPoint>> {
        let months = months.unwrap_or(DEFAULT_TREND_MONTHS).clamp(1, 36);
        let today = Utc::now().date_naive();
        // Load a little more than the window and let the bucketing trim it.
        let from = today - Duration::days(31 * months as i64 + 31);
        let transactions = self
            .transaction_repository
            .list_in_range(user_id, from, today)?;
        Ok(compute_trends(&transactions, months, today))
    }

    fn category_breakdown(
        &self,
        user_id: &str,
        breakdown_type: TransactionType,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<CategoryBreakdownEntry>> {
        let transactions = self.transaction_repository.list_in_range(user_id, from, to)?;
        Ok(compute_breakdown(&transactions, breakdown_type))
    }
}
