//! Recurring transaction repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::recurring_model::{
    NewRecurringTransaction, RecurringTransaction, RecurringTransactionUpdate,
};
use crate::transactions::Transaction;
use crate::errors::Result;

/// Trait defining the contract for recurring transaction repository operations.
#[async_trait]
pub trait RecurringRepositoryTrait: Send + Sync {
    /// Creates a template; `next_due_date` starts at `start_date`.
    async fn create(
        &self,
        user_id: &str,
        new_recurring: NewRecurringTransaction,
        currency: String,
    ) -> Result<RecurringTransaction>;

    /// Updates a template's mutable fields.
    async fn update(
        &self,
        user_id: &str,
        update: RecurringTransactionUpdate,
    ) -> Result<RecurringTransaction>;

    /// Deletes a template. Returns the number of deleted records.
    async fn delete(&self, user_id: &str, recurring_id: &str) -> Result<usize>;

    /// Retrieves a template by id.
    fn get_by_id(&self, user_id: &str, recurring_id: &str) -> Result<RecurringTransaction>;

    /// Lists all templates for the user.
    fn list(&self, user_id: &str) -> Result<Vec<RecurringTransaction>>;

    /// Lists active templates with `next_due_date <= today`.
    fn list_due(&self, user_id: &str, today: NaiveDate) -> Result<Vec<RecurringTransaction>>;

    /// Advances a template's next due date, optionally deactivating it.
    async fn advance(
        &self,
        user_id: &str,
        recurring_id: &str,
        next_due_date: NaiveDate,
        is_active: bool,
    ) -> Result<RecurringTransaction>;
}

/// Trait defining the contract for recurring transaction service operations.
#[async_trait]
pub trait RecurringServiceTrait: Send + Sync {
    /// Creates a template after referential checks.
    async fn create_recurring(
        &self,
        user_id: &str,
        new_recurring: NewRecurringTransaction,
    ) -> Result<RecurringTransaction>;

    /// Updates a template.
    async fn update_recurring(
        &self,
        user_id: &str,
        update: RecurringTransactionUpdate,
    ) -> Result<RecurringTransaction>;

    /// Deletes a template.
    async fn delete_recurring(&self, user_id: &str, recurring_id: &str) -> Result<()>;

    /// Retrieves a template by id.
    fn get_recurring(&self, user_id: &str, recurring_id: &str) -> Result<RecurringTransaction>;

    /// Lists all templates.
    fn list_recurring(&self, user_id: &str) -> Result<Vec<RecurringTransaction>>;

    /// Lists templates currently due.
    fn list_due(&self, user_id: &str) -> Result<Vec<RecurringTransaction>>;

    /// Materializes every due template into real transactions, advancing
    /// due dates past today. Returns the created transactions.
    async fn materialize_due(&self, user_id: &str) -> Result<Vec<Transaction>>;
}
