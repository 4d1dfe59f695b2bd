//! Transaction repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::transactions_model::{
    NewTransaction, Transaction, TransactionFilters, TransactionUpdate,
};
use crate::errors::Result;

/// Trait defining the contract for Transaction repository operations.
///
/// Mutations also maintain the owning account's balance in the same
/// storage transaction, so a failed write leaves the balance untouched.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Inserts a transaction and applies its balance delta to the account.
    async fn create(&self, user_id: &str, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Updates a transaction, reversing the old balance delta and applying
    /// the new one.
    async fn update(&self, user_id: &str, update: TransactionUpdate) -> Result<Transaction>;

    /// Deletes a transaction and reverses its balance delta.
    /// Returns the number of deleted records.
    async fn delete(&self, user_id: &str, transaction_id: &str) -> Result<usize>;

    /// Retrieves a transaction by id.
    fn get_by_id(&self, user_id: &str, transaction_id: &str) -> Result<Transaction>;

    /// Lists transactions matching the filters, newest first.
    fn list(&self, user_id: &str, filters: &TransactionFilters) -> Result<Vec<Transaction>>;

    /// Loads all transactions within a date range, used by analytics and
    /// budget evaluation.
    fn list_in_range(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Transaction>>;
}

/// Trait defining the contract for Transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Creates a transaction after referential and type checks.
    async fn create_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction>;

    /// Updates a transaction after referential and type checks.
    async fn update_transaction(
        &self,
        user_id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction>;

    /// Deletes a transaction.
    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<()>;

    /// Retrieves a transaction by id.
    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction>;

    /// Lists transactions matching the filters.
    fn search_transactions(
        &self,
        user_id: &str,
        filters: &TransactionFilters,
    ) -> Result<Vec<Transaction>>;
}
