use log::debug;
use std::sync::Arc;

use super::payment_methods_model::{
    normalize_code, NewPaymentMethod, PaymentMethod, PaymentMethodUpdate,
};
use super::payment_methods_traits::{PaymentMethodRepositoryTrait, PaymentMethodServiceTrait};
use crate::errors::{DatabaseError, Result};
use crate::Error;

/// Service for managing payment methods.
pub struct PaymentMethodService {
    repository: Arc<dyn PaymentMethodRepositoryTrait>,
}

impl PaymentMethodService {
    /// Creates a new PaymentMethodService instance.
    pub fn new(repository: Arc<dyn PaymentMethodRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl PaymentMethodServiceTrait for PaymentMethodService {
    /// Creates a payment method after checking code uniqueness.
    async fn create_payment_method(
        &self,
        user_id: &str,
        new_method: NewPaymentMethod,
    ) -> Result<PaymentMethod> {
        new_method.validate()?;
        let code = normalize_code(&new_method.code);
        debug!("Creating payment method {} for user {}", code, user_id);

        if self.repository.find_by_code(user_id, &code)?.is_some() {
            return Err(Error::ConstraintViolation(format!(
                "Payment method with code '{}' already exists",
                code
            )));
        }

        let normalized = NewPaymentMethod { code, ..new_method };
        self.repository.create(user_id, normalized).await
    }

    async fn update_payment_method(
        &self,
        user_id: &str,
        update: PaymentMethodUpdate,
    ) -> Result<PaymentMethod> {
        update.validate()?;
        self.repository.update(user_id, update).await
    }

    async fn delete_payment_method(&self, user_id: &str, method_id: &str) -> Result<()> {
        self.repository.delete(user_id, method_id).await?;
        Ok(())
    }

    fn get_by_code(&self, user_id: &str, code: &str) -> Result<PaymentMethod> {
        let code = normalize_code(code);
        self.repository
            .find_by_code(user_id, &code)?
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!(
                    "Payment method '{}' not found",
                    code
                )))
            })
    }

    fn list_payment_methods(&self, user_id: &str) -> Result<Vec<PaymentMethod>> {
        self.repository.list(user_id)
    }
}
