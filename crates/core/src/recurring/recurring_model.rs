//! Recurring transaction domain models and schedule math.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::TransactionType;
use crate::{errors::ValidationError, Error, Result};

/// How often a recurring transaction fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Biweekly => "BIWEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Quarterly => "QUARTERLY",
            Frequency::Yearly => "YEARLY",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "DAILY" => Ok(Frequency::Daily),
            "WEEKLY" => Ok(Frequency::Weekly),
            "BIWEEKLY" => Ok(Frequency::Biweekly),
            "MONTHLY" => Ok(Frequency::Monthly),
            "QUARTERLY" => Ok(Frequency::Quarterly),
            "YEARLY" => Ok(Frequency::Yearly),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown frequency '{}'",
                other
            )))),
        }
    }
}

/// Adds whole months to a date, clamping to the last day of the target
/// month (Jan 31 + 1 month = Feb 28/29).
fn add_months_clamped(date: NaiveDate, months: u32) -> NaiveDate {
    let zero_based = date.month0() + months;
    let year = date.year() + (zero_based / 12) as i32;
    let month = zero_based % 12 + 1;
    let day = date.day();
    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, last_day_of_month(year, month)))
        .unwrap_or(date)
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    for day in (28..=31).rev() {
        if NaiveDate::from_ymd_opt(year, month, day).is_some() {
            return day;
        }
    }
    28
}

/// Returns the occurrence that follows `date` for the given frequency.
pub fn next_occurrence(date: NaiveDate, frequency: Frequency) -> NaiveDate {
    match frequency {
        Frequency::Daily => date + Duration::days(1),
        Frequency::Weekly => date + Duration::days(7),
        Frequency::Biweekly => date + Duration::days(14),
        Frequency::Monthly => add_months_clamped(date, 1),
        Frequency::Quarterly => add_months_clamped(date, 3),
        Frequency::Yearly => add_months_clamped(date, 12),
    }
}

/// Domain model representing a recurring transaction template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransaction {
    pub id: String,
    pub user_id: String,
    pub account_id: String,
    pub category_id: String,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub currency: String,
    pub description: Option<String>,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    /// Next date this template is due to fire.
    pub next_due_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl RecurringTransaction {
    /// True if the template should fire on or before `today`.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.is_active
            && self.next_due_date <= today
            && self.end_date.map_or(true, |end| self.next_due_date <= end)
    }
}

/// Input model for creating a recurring transaction template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecurringTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: String,
    pub category_id: String,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub description: Option<String>,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl NewRecurringTransaction {
    /// Validates the template data.
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Recurring amount must be positive, got {}",
                self.amount
            ))));
        }
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        if self.category_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "categoryId".to_string(),
            )));
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "End date cannot precede the start date".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Input model for updating a recurring transaction template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransactionUpdate {
    pub id: Option<String>,
    pub amount: Decimal,
    pub description: Option<String>,
    pub frequency: Frequency,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl RecurringTransactionUpdate {
    /// Validates the template update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Recurring transaction ID is required for updates".to_string(),
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Recurring amount must be positive, got {}",
                self.amount
            ))));
        }
        Ok(())
    }
}
