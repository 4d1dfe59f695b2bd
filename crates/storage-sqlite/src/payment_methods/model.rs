//! Database models for payment methods.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use finfusion_core::payment_methods::PaymentMethod;
use serde::{Deserialize, Serialize};

/// Database model for payment methods
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
#[diesel(table_name = crate::schema::payment_methods)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodDB {
    pub id: String,
    pub user_id: String,
    pub code: String,
    pub label: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new payment method
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::payment_methods)]
#[serde(rename_all = "camelCase")]
pub struct NewPaymentMethodDB {
    pub id: Option<String>,
    pub user_id: String,
    pub code: String,
    pub label: String,
    pub is_active: bool,
}

// Conversion to domain models
impl From<PaymentMethodDB> for PaymentMethod {
    fn from(db: PaymentMethodDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            code: db.code,
            label: db.label,
            is_active: db.is_active,
            created_at: db.created_at,
        }
    }
}

impl NewPaymentMethodDB {
    /// Builds the insertable row. The service has already normalized the code.
    pub fn from_domain(
        user_id: String,
        domain: finfusion_core::payment_methods::NewPaymentMethod,
    ) -> Self {
        Self {
            id: domain.id,
            user_id,
            code: domain.code,
            label: domain.label,
            is_active: domain.is_active,
        }
    }
}
