//! Loan domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{LoanError, ValidationError};
use crate::{Error, Result};

/// Domain model representing a tracked loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub principal: Decimal,
    /// Annual interest rate in percent, e.g. 7.25.
    pub annual_rate_pct: Decimal,
    pub term_months: i32,
    pub start_date: NaiveDate,
    /// Fixed monthly installment, computed at creation.
    pub emi: Decimal,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLoan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub principal: Decimal,
    pub annual_rate_pct: Decimal,
    pub term_months: i32,
    pub start_date: NaiveDate,
}

impl NewLoan {
    /// Validates the new loan data. Numeric bounds are re-checked by the
    /// math layer; this catches the obvious cases early with field names.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Loan name cannot be empty".to_string(),
            )));
        }
        if self.principal <= Decimal::ZERO {
            return Err(LoanError::InvalidPrincipal(self.principal.to_string()).into());
        }
        if self.annual_rate_pct < Decimal::ZERO {
            return Err(LoanError::InvalidRate(self.annual_rate_pct.to_string()).into());
        }
        if self.term_months < 1 {
            return Err(LoanError::InvalidTerm(self.term_months).into());
        }
        Ok(())
    }
}

/// Input model for updating a loan's descriptive fields.
///
/// Principal, rate, and term are immutable once payments may reference
/// them; a mis-entered loan is deleted and recreated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanUpdate {
    pub id: Option<String>,
    pub name: String,
    pub is_active: bool,
}

impl LoanUpdate {
    /// Validates the loan update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Loan ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Loan name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Domain model representing a recorded loan payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPayment {
    pub id: String,
    pub loan_id: String,
    pub amount: Decimal,
    pub principal_component: Decimal,
    pub interest_component: Decimal,
    pub payment_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for recording a loan payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLoanPayment {
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub notes: Option<String>,
}

impl NewLoanPayment {
    /// Validates the payment data.
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(LoanError::InvalidPayment(self.amount.to_string()).into());
        }
        Ok(())
    }
}
