//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a registered user.
///
/// The password hash is opaque to this crate; hashing and verification
/// happen at the server boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub base_currency: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for registering a new user.
///
/// `password_hash` is already hashed by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub base_currency: String,
}

impl NewUser {
    /// Validates the new user data.
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "A valid email address is required".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Name cannot be empty".to_string(),
            )));
        }
        if self.base_currency.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Base currency cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating a user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: String,
    pub base_currency: String,
}

impl UserUpdate {
    /// Validates the profile update data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Name cannot be empty".to_string(),
            )));
        }
        if self.base_currency.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Base currency cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
