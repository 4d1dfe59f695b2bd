//! Budget domain models and period arithmetic.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ALERT_THRESHOLD_PCT;
use crate::{errors::ValidationError, Error, Result};

/// The window a budget cap applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Weekly => "WEEKLY",
            BudgetPeriod::Monthly => "MONTHLY",
            BudgetPeriod::Yearly => "YEARLY",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "WEEKLY" => Ok(BudgetPeriod::Weekly),
            "MONTHLY" => Ok(BudgetPeriod::Monthly),
            "YEARLY" => Ok(BudgetPeriod::Yearly),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown budget period '{}'",
                other
            )))),
        }
    }
}

/// Returns the inclusive [start, end] window containing `today`.
///
/// Weeks anchor on Monday, months on the 1st, years on Jan 1.
pub fn current_period_window(period: BudgetPeriod, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    match period {
        BudgetPeriod::Weekly => {
            let start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
            (start, start + Duration::days(6))
        }
        BudgetPeriod::Monthly => {
            let start = today.with_day(1).unwrap_or(today);
            let next_month = if today.month() == 12 {
                NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
            };
            let end = next_month.map(|d| d - Duration::days(1)).unwrap_or(today);
            (start, end)
        }
        BudgetPeriod::Yearly => {
            let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
            let end = NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today);
            (start, end)
        }
    }
}

/// Domain model representing a budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub amount: Decimal,
    pub period: BudgetPeriod,
    pub start_date: NaiveDate,
    /// Percentage of the cap at which a warning alert fires.
    pub alert_threshold_pct: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub category_id: String,
    pub amount: Decimal,
    pub period: BudgetPeriod,
    pub start_date: NaiveDate,
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold_pct: i32,
}

fn default_alert_threshold() -> i32 {
    DEFAULT_ALERT_THRESHOLD_PCT
}

impl NewBudget {
    /// Validates the new budget data.
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Budget amount must be positive, got {}",
                self.amount
            ))));
        }
        if self.category_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "categoryId".to_string(),
            )));
        }
        if !(1..=100).contains(&self.alert_threshold_pct) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Alert threshold must be between 1 and 100, got {}",
                self.alert_threshold_pct
            ))));
        }
        Ok(())
    }
}

/// Input model for updating an existing budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
    pub id: Option<String>,
    pub amount: Decimal,
    pub period: BudgetPeriod,
    pub alert_threshold_pct: i32,
    pub is_active: bool,
}

impl BudgetUpdate {
    /// Validates the budget update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Budget ID is required for updates".to_string(),
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Budget amount must be positive, got {}",
                self.amount
            ))));
        }
        if !(1..=100).contains(&self.alert_threshold_pct) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Alert threshold must be between 1 and 100, got {}",
                self.alert_threshold_pct
            ))));
        }
        Ok(())
    }
}

/// A recorded threshold crossing for a budget period.
///
/// At most one alert exists per (budget, period start, threshold), which is
/// what keeps alerts from firing repeatedly within the same period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlert {
    pub id: String,
    pub budget_id: String,
    pub period_start: NaiveDate,
    pub spent: Decimal,
    pub threshold_pct: i32,
    pub created_at: NaiveDateTime,
}

/// Input model for recording a budget alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudgetAlert {
    pub budget_id: String,
    pub period_start: NaiveDate,
    pub spent: Decimal,
    pub threshold_pct: i32,
}

/// Computed spend-vs-cap state of a budget for its current period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    pub budget_id: String,
    pub category_id: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub limit: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    /// Spent as a percentage of the cap, rounded to 2 places.
    pub percent_used: Decimal,
}
