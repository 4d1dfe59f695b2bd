//! Database models for transactions.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use finfusion_core::constants::DEFAULT_CURRENCY;
use finfusion_core::transactions::{Transaction, TransactionType};
use finfusion_core::Error;
use serde::{Deserialize, Serialize};

use crate::accounts::AccountDB;
use crate::categories::CategoryDB;
use crate::utils::parse_decimal;

/// Database model for transactions. Amount is stored as a decimal string.
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
#[diesel(belongs_to(AccountDB, foreign_key = account_id))]
#[diesel(belongs_to(CategoryDB, foreign_key = category_id))]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TransactionDB {
    pub id: String,
    pub user_id: String,
    pub account_id: String,
    pub category_id: String,
    pub transaction_type: String,
    pub amount: String,
    pub currency: String,
    pub description: Option<String>,
    pub transaction_date: NaiveDate,
    pub payment_method_code: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new transaction
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[serde(rename_all = "camelCase")]
pub struct NewTransactionDB {
    pub id: Option<String>,
    pub user_id: String,
    pub account_id: String,
    pub category_id: String,
    pub transaction_type: String,
    pub amount: String,
    pub currency: String,
    pub description: Option<String>,
    pub transaction_date: NaiveDate,
    pub payment_method_code: Option<String>,
}

// Conversion to domain models
impl TryFrom<TransactionDB> for Transaction {
    type Error = Error;

    fn try_from(db: TransactionDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            account_id: db.account_id,
            category_id: db.category_id,
            transaction_type: TransactionType::parse(&db.transaction_type)?,
            amount: parse_decimal(&db.amount, "transaction.amount"),
            currency: db.currency,
            description: db.description,
            transaction_date: db.transaction_date,
            payment_method_code: db.payment_method_code,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl NewTransactionDB {
    /// Builds the insertable row from a domain input plus the owning user.
    /// The service has already defaulted the currency from the account.
    pub fn from_domain(
        user_id: String,
        domain: finfusion_core::transactions::NewTransaction,
    ) -> Self {
        Self {
            id: domain.id,
            user_id,
            account_id: domain.account_id,
            category_id: domain.category_id,
            transaction_type: domain.transaction_type.as_str().to_string(),
            amount: domain.amount.to_string(),
            currency: domain
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            description: domain.description,
            transaction_date: domain.transaction_date,
            payment_method_code: domain.payment_method_code,
        }
    }
}
