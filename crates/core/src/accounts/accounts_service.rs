use log::debug;
use std::sync::Arc;

use super::accounts_model::{Account, AccountUpdate, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::Result;

/// Service for managing accounts.
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance.
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    async fn create_account(&self, user_id: &str, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        debug!(
            "Creating account '{}' ({}) for user {}",
            new_account.name, new_account.account_type, user_id
        );
        self.repository.create(user_id, new_account).await
    }

    async fn update_account(
        &self,
        user_id: &str,
        account_update: AccountUpdate,
    ) -> Result<Account> {
        account_update.validate()?;
        self.repository.update(user_id, account_update).await
    }

    async fn delete_account(&self, user_id: &str, account_id: &str) -> Result<()> {
        self.repository.delete(user_id, account_id).await?;
        Ok(())
    }

    fn get_account(&self, user_id: &str, account_id: &str) -> Result<Account> {
        self.repository.get_by_id(user_id, account_id)
    }

    fn list_accounts(
        &self,
        user_id: &str,
        is_active_filter: Option<bool>,
    ) -> Result<Vec<Account>> {
        self.repository.list(user_id, is_active_filter)
    }

    fn get_active_accounts(&self, user_id: &str) -> Result<Vec<Account>> {
        self.list_accounts(user_id, Some(true))
    }
}
