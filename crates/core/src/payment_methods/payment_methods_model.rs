//! Payment method domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Normalizes a payment-method code to UPPER_SNAKE form.
pub fn normalize_code(code: &str) -> String {
    code.trim()
        .to_ascii_uppercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Domain model representing a payment method.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    pub user_id: String,
    /// Stable UPPER_SNAKE code, unique per user (e.g. CREDIT_CARD, UPI).
    pub code: String,
    pub label: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a payment method.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaymentMethod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub code: String,
    pub label: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl NewPaymentMethod {
    /// Validates the new payment method data.
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "code".to_string(),
            )));
        }
        if self.label.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Payment method label cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating a payment method's label and status.
/// The code is immutable: transactions reference it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodUpdate {
    pub id: Option<String>,
    pub label: String,
    pub is_active: bool,
}

impl PaymentMethodUpdate {
    /// Validates the update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Payment method ID is required for updates".to_string(),
            )));
        }
        if self.label.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Payment method label cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_code;

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("credit card"), "CREDIT_CARD");
        assert_eq!(normalize_code("  upi "), "UPI");
        assert_eq!(normalize_code("Bank-Transfer"), "BANK_TRANSFER");
        assert_eq!(normalize_code("CASH"), "CASH");
    }
}
