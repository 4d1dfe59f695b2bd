//! Database models for loans and loan payments.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use finfusion_core::loans::{Loan, LoanPayment};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::parse_decimal;

/// Database model for loans. Monetary fields are decimal strings.
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
#[diesel(table_name = crate::schema::loans)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct LoanDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub principal: String,
    pub annual_rate_pct: String,
    pub term_months: i32,
    pub start_date: NaiveDate,
    pub emi: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new loan
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::loans)]
#[serde(rename_all = "camelCase")]
pub struct NewLoanDB {
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub principal: String,
    pub annual_rate_pct: String,
    pub term_months: i32,
    pub start_date: NaiveDate,
    pub emi: String,
    pub is_active: bool,
}

/// Database model for loan payments
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
#[diesel(belongs_to(LoanDB, foreign_key = loan_id))]
#[diesel(table_name = crate::schema::loan_payments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct LoanPaymentDB {
    pub id: String,
    pub loan_id: String,
    pub amount: String,
    pub principal_component: String,
    pub interest_component: String,
    pub payment_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for recording a loan payment
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::loan_payments)]
#[serde(rename_all = "camelCase")]
pub struct NewLoanPaymentDB {
    pub id: Option<String>,
    pub loan_id: String,
    pub amount: String,
    pub principal_component: String,
    pub interest_component: String,
    pub payment_date: NaiveDate,
    pub notes: Option<String>,
}

// Conversion to domain models
impl From<LoanDB> for Loan {
    fn from(db: LoanDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            principal: parse_decimal(&db.principal, "loan.principal"),
            annual_rate_pct: parse_decimal(&db.annual_rate_pct, "loan.annual_rate_pct"),
            term_months: db.term_months,
            start_date: db.start_date,
            emi: parse_decimal(&db.emi, "loan.emi"),
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<LoanPaymentDB> for LoanPayment {
    fn from(db: LoanPaymentDB) -> Self {
        Self {
            id: db.id,
            loan_id: db.loan_id,
            amount: parse_decimal(&db.amount, "loan_payment.amount"),
            principal_component: parse_decimal(
                &db.principal_component,
                "loan_payment.principal_component",
            ),
            interest_component: parse_decimal(
                &db.interest_component,
                "loan_payment.interest_component",
            ),
            payment_date: db.payment_date,
            notes: db.notes,
            created_at: db.created_at,
        }
    }
}

impl NewLoanDB {
    /// Builds the insertable row with the precomputed installment.
    pub fn from_domain(
        user_id: String,
        emi: Decimal,
        domain: finfusion_core::loans::NewLoan,
    ) -> Self {
        Self {
            id: domain.id,
            user_id,
            name: domain.name,
            principal: domain.principal.to_string(),
            annual_rate_pct: domain.annual_rate_pct.to_string(),
            term_months: domain.term_months,
            start_date: domain.start_date,
            emi: emi.to_string(),
            is_active: true,
        }
    }
}
