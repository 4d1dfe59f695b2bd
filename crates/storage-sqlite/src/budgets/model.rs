//! Database models for budgets and budget alerts.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use finfusion_core::budgets::{Budget, BudgetAlert, BudgetPeriod};
use finfusion_core::Error;
use serde::{Deserialize, Serialize};

use crate::categories::CategoryDB;
use crate::utils::parse_decimal;

/// Database model for budgets.
#[derive(
    Queryable,
    Identifiable,
    Associations,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(CategoryDB, foreign_key = category_id))]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BudgetDB {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub amount: String,
    pub period: String,
    pub start_date: NaiveDate,
    pub alert_threshold_pct: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new budget
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
#[serde(rename_all = "camelCase")]
pub struct NewBudgetDB {
    pub id: Option<String>,
    pub user_id: String,
    pub category_id: String,
    pub amount: String,
    pub period: String,
    pub start_date: NaiveDate,
    pub alert_threshold_pct: i32,
    pub is_active: bool,
}

/// Database model for budget alerts
#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(BudgetDB, foreign_key = budget_id))]
#[diesel(table_name = crate::schema::budget_alerts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlertDB {
    pub id: String,
    pub budget_id: String,
    pub period_start: NaiveDate,
    pub spent: String,
    pub threshold_pct: i32,
    pub created_at: NaiveDateTime,
}

/// Database model for recording a budget alert
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::budget_alerts)]
#[serde(rename_all = "camelCase")]
pub struct NewBudgetAlertDB {
    pub id: Option<String>,
    pub budget_id: String,
    pub period_start: NaiveDate,
    pub spent: String,
    pub threshold_pct: i32,
}

// Conversion to domain models
impl TryFrom<BudgetDB> for Budget {
    type Error = Error;

    fn try_from(db: BudgetDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            category_id: db.category_id,
            amount: parse_decimal(&db.amount, "budget.amount"),
            period: BudgetPeriod::parse(&db.period)?,
            start_date: db.start_date,
            alert_threshold_pct: db.alert_threshold_pct,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<BudgetAlertDB> for BudgetAlert {
    fn from(db: BudgetAlertDB) -> Self {
        Self {
            id: db.id,
            budget_id: db.budget_id,
            period_start: db.period_start,
            spent: parse_decimal(&db.spent, "budget_alert.spent"),
            threshold_pct: db.threshold_pct,
            created_at: db.created_at,
        }
    }
}

impl NewBudgetDB {
    /// Builds the insertable row from a domain input plus the owning user.
    pub fn from_domain(user_id: String, domain: finfusion_core::budgets::NewBudget) -> Self {
        Self {
            id: domain.id,
            user_id,
            category_id: domain.category_id,
            amount: domain.amount.to_string(),
            period: domain.period.as_str().to_string(),
            start_date: domain.start_date,
            alert_threshold_pct: domain.alert_threshold_pct,
            is_active: true,
        }
    }
}

impl From<finfusion_core::budgets::NewBudgetAlert> for NewBudgetAlertDB {
    fn from(domain: finfusion_core::budgets::NewBudgetAlert) -> Self {
        Self {
            id: None,
            budget_id: domain.budget_id,
            period_start: domain.period_start,
            spent: domain.spent.to_string(),
            threshold_pct: domain.threshold_pct,
        }
    }
}
