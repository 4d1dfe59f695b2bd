//! Payment method repository and service traits.

use async_trait::async_trait;

use super::payment_methods_model::{NewPaymentMethod, PaymentMethod, PaymentMethodUpdate};
use crate::errors::Result;

/// Trait defining the contract for PaymentMethod repository operations.
#[async_trait]
pub trait PaymentMethodRepositoryTrait: Send + Sync {
    /// Creates a payment method.
    async fn create(&self, user_id: &str, new_method: NewPaymentMethod) -> Result<PaymentMethod>;

    /// Updates a payment method's label and status.
    async fn update(&self, user_id: &str, update: PaymentMethodUpdate) -> Result<PaymentMethod>;

    /// Deletes a payment method. Returns the number of deleted records.
    async fn delete(&self, user_id: &str, method_id: &str) -> Result<usize>;

    /// Retrieves a payment method by id.
    fn get_by_id(&self, user_id: &str, method_id: &str) -> Result<PaymentMethod>;

    /// Looks up a payment method by its code.
    fn find_by_code(&self, user_id: &str, code: &str) -> Result<Option<PaymentMethod>>;

    /// Lists all payment methods for the user.
    fn list(&self, user_id: &str) -> Result<Vec<PaymentMethod>>;
}

/// Trait defining the contract for PaymentMethod service operations.
#[async_trait]
pub trait PaymentMethodServiceTrait: Send + Sync {
    /// Creates a payment method, rejecting duplicate codes.
    async fn create_payment_method(
        &self,
        user_id: &str,
        new_method: NewPaymentMethod,
    ) -> Result<PaymentMethod>;

    /// Updates a payment method.
    async fn update_payment_method(
        &self,
        user_id: &str,
        update: PaymentMethodUpdate,
    ) -> Result<PaymentMethod>;

    /// Deletes a payment method.
    async fn delete_payment_method(&self, user_id: &str, method_id: &str) -> Result<()>;

    /// Retrieves a payment method by its code.
    fn get_by_code(&self, user_id: &str, code: &str) -> Result<PaymentMethod>;

    /// Lists all payment methods.
    fn list_payment_methods(&self, user_id: &str) -> Result<Vec<PaymentMethod>>;
}
