//! Database models for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for users
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
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserDB {
    pub id: String,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub base_currency: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new user
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDB {
    pub id: Option<String>,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub base_currency: String,
}

// Conversion to domain models
impl From<UserDB> for finfusion_core::users::User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            email: db.email,
            name: db.name,
            password_hash: db.password_hash,
            base_currency: db.base_currency,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<finfusion_core::users::NewUser> for NewUserDB {
    fn from(domain: finfusion_core::users::NewUser) -> Self {
        Self {
            id: domain.id,
            email: domain.email,
            name: domain.name,
            password_hash: domain.password_hash,
            base_currency: domain.base_currency,
        }
    }
}
