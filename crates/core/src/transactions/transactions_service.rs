use log::debug;
use std::sync::Arc;

use super::transactions_model::{
    NewTransaction, Transaction, TransactionFilters, TransactionType, TransactionUpdate,
};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::accounts::AccountRepositoryTrait;
use crate::categories::{CategoryRepositoryTrait, CategoryType};
use crate::errors::{Result, ValidationError};
use crate::Error;

/// Service for managing transactions.
///
/// Enforces the referential rules the storage layer cannot express on its
/// own: the account and category must exist, belong to the same user, and
/// the category's type must agree with the transaction type.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl TransactionService {
    /// Creates a new TransactionService instance.
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            account_repository,
            category_repository,
        }
    }

    /// Checks that account and category exist for this user and that the
    /// category type matches the transaction type.
    fn check_references(
        &self,
        user_id: &str,
        account_id: &str,
        category_id: &str,
        transaction_type: TransactionType,
    ) -> Result<String> {
        let account = self.account_repository.get_by_id(user_id, account_id)?;
        let category = self.category_repository.get_by_id(user_id, category_id)?;

        let expected = match transaction_type {
            TransactionType::Income => Some(CategoryType::Income),
            TransactionType::Expense => Some(CategoryType::Expense),
            // Transfers may use any bookkeeping category.
            TransactionType::Transfer => None,
        };
        if let Some(expected) = expected {
            if category.category_type != expected {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Category '{}' is {} but the transaction is {}",
                    category.name,
                    category.category_type.as_str(),
                    transaction_type.as_str()
                ))));
            }
        }
        Ok(account.currency)
    }
}

#[async_trait::async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn create_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        new_transaction.validate()?;
        let account_currency = self.check_references(
            user_id,
            &new_transaction.account_id,
            &new_transaction.category_id,
            new_transaction.transaction_type,
        )?;
        debug!(
            "Creating {} transaction of {} for user {}",
            new_transaction.transaction_type.as_str(),
            new_transaction.amount,
            user_id
        );

        // Default the currency from the account.
        let normalized = NewTransaction {
            currency: new_transaction.currency.clone().or(Some(account_currency)),
            ..new_transaction
        };
        self.repository.create(user_id, normalized).await
    }

    async fn update_transaction(
        &self,
        user_id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction> {
        update.validate()?;
        self.check_references(
            user_id,
            &update.account_id,
            &update.category_id,
            update.transaction_type,
        )?;
        self.repository.update(user_id, update).await
    }

    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<()> {
        self.repository.delete(user_id, transaction_id).await?;
        Ok(())
    }

    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction> {
        self.repository.get_by_id(user_id, transaction_id)
    }

    fn search_transactions(
        &self,
        user_id: &str,
        filters: &TransactionFilters,
    ) -> Result<Vec<Transaction>> {
        self.repository.list(user_id, filters)
    }
}
