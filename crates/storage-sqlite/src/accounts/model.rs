//! Database models for accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::parse_decimal;

/// Database model for accounts. Balance is stored as a decimal string.
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
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AccountDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub account_type: String,
    pub currency: String,
    pub balance: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new account
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
#[serde(rename_all = "camelCase")]
pub struct NewAccountDB {
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub account_type: String,
    pub currency: String,
    pub balance: String,
    pub is_active: bool,
}

// Conversion to domain models
impl From<AccountDB> for finfusion_core::accounts::Account {
    fn from(db: AccountDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            account_type: db.account_type,
            currency: db.currency,
            balance: parse_decimal(&db.balance, "account.balance"),
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewAccountDB {
    /// Builds the insertable row from a domain input plus the owning user.
    pub fn from_domain(user_id: String, domain: finfusion_core::accounts::NewAccount) -> Self {
        Self {
            id: domain.id,
            user_id,
            name: domain.name,
            account_type: domain.account_type,
            currency: domain.currency,
            balance: domain.balance.to_string(),
            is_active: domain.is_active,
        }
    }
}
