//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::accounts_model::{Account, AccountUpdate, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// All queries are scoped to a user; an id belonging to a different user
/// behaves as if the record does not exist.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Creates a new account for the user.
    async fn create(&self, user_id: &str, new_account: NewAccount) -> Result<Account>;

    /// Updates an existing account.
    async fn update(&self, user_id: &str, account_update: AccountUpdate) -> Result<Account>;

    /// Deletes an account by its ID. Returns the number of deleted records.
    async fn delete(&self, user_id: &str, account_id: &str) -> Result<usize>;

    /// Retrieves an account by its ID.
    fn get_by_id(&self, user_id: &str, account_id: &str) -> Result<Account>;

    /// Lists accounts, optionally filtered by active status.
    fn list(&self, user_id: &str, is_active_filter: Option<bool>) -> Result<Vec<Account>>;

    /// Applies a signed delta to an account balance.
    ///
    /// Used by loan payment recording; transaction writes adjust balances
    /// inside their own storage job instead.
    async fn adjust_balance(&self, user_id: &str, account_id: &str, delta: Decimal)
        -> Result<Account>;
}

/// Trait defining the contract for Account service operations.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account with business validation.
    async fn create_account(&self, user_id: &str, new_account: NewAccount) -> Result<Account>;

    /// Updates an existing account with business validation.
    async fn update_account(&self, user_id: &str, account_update: AccountUpdate)
        -> Result<Account>;

    /// Deletes an account.
    async fn delete_account(&self, user_id: &str, account_id: &str) -> Result<()>;

    /// Retrieves an account by ID.
    fn get_account(&self, user_id: &str, account_id: &str) -> Result<Account>;

    /// Lists accounts with an optional active-status filter.
    fn list_accounts(&self, user_id: &str, is_active_filter: Option<bool>)
        -> Result<Vec<Account>>;

    /// Gets only active accounts.
    fn get_active_accounts(&self, user_id: &str) -> Result<Vec<Account>>;
}
