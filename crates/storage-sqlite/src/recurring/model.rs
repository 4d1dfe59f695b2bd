//! Database models for recurring transaction templates.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use finfusion_core::recurring::{Frequency, RecurringTransaction};
use finfusion_core::transactions::TransactionType;
use finfusion_core::Error;
use serde::{Deserialize, Serialize};

use crate::utils::parse_decimal;

/// Database model for recurring transaction templates.
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::recurring_transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransactionDB {
    pub id: String,
    pub user_id: String,
    pub account_id: String,
    pub category_id: String,
    pub transaction_type: String,
    pub amount: String,
    pub currency: String,
    pub description: Option<String>,
    pub frequency: String,
    pub start_date: NaiveDate,
    pub next_due_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new recurring template
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::recurring_transactions)]
#[serde(rename_all = "camelCase")]
pub struct NewRecurringTransactionDB {
    pub id: Option<String>,
    pub user_id: String,
    pub account_id: String,
    pub category_id: String,
    pub transaction_type: String,
    pub amount: String,
    pub currency: String,
    pub description: Option<String>,
    pub frequency: String,
    pub start_date: NaiveDate,
    pub next_due_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
}

// Conversion to domain models
impl TryFrom<RecurringTransactionDB> for RecurringTransaction {
    type Error = Error;

    fn try_from(db: RecurringTransactionDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            account_id: db.account_id,
            category_id: db.category_id,
            transaction_type: TransactionType::parse(&db.transaction_type)?,
            amount: parse_decimal(&db.amount, "recurring.amount"),
            currency: db.currency,
            description: db.description,
            frequency: Frequency::parse(&db.frequency)?,
            start_date: db.start_date,
            next_due_date: db.next_due_date,
            end_date: db.end_date,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl NewRecurringTransactionDB {
    /// Builds the insertable row. The first due date is the start date.
    pub fn from_domain(
        user_id: String,
        currency: String,
        domain: finfusion_core::recurring::NewRecurringTransaction,
    ) -> Self {
        Self {
            id: domain.id,
            user_id,
            account_id: domain.account_id,
            category_id: domain.category_id,
            transaction_type: domain.transaction_type.as_str().to_string(),
            amount: domain.amount.to_string(),
            currency,
            description: domain.description,
            frequency: domain.frequency.as_str().to_string(),
            start_date: domain.start_date,
            next_due_date: domain.start_date,
            end_date: domain.end_date,
            is_active: true,
        }
    }
}
