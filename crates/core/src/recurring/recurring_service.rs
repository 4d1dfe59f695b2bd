use log::{debug, info};
use std::sync::Arc;

use chrono::Utc;

use super::recurring_model::{
    next_occurrence, NewRecurringTransaction, RecurringTransaction, RecurringTransactionUpdate,
};
use super::recurring_traits::{RecurringRepositoryTrait, RecurringServiceTrait};
use crate::accounts::AccountRepositoryTrait;
use crate::categories::CategoryRepositoryTrait;
use crate::errors::Result;
use crate::transactions::{NewTransaction, Transaction, TransactionServiceTrait};

/// Service for recurring transaction templates.
pub struct RecurringService {
    repository: Arc<dyn RecurringRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    transaction_service: Arc<dyn TransactionServiceTrait>,
}

impl RecurringService {
    /// Creates a new RecurringService instance.
    pub fn new(
        repository: Arc<dyn RecurringRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        transaction_service: Arc<dyn TransactionServiceTrait>,
    ) -> Self {
        Self {
            repository,
            account_repository,
            category_repository,
            transaction_service,
        }
    }
}

#[async_trait::async_trait]
impl RecurringServiceTrait for RecurringService {
    async fn create_recurring(
        &self,
        user_id: &str,
        new_recurring: NewRecurringTransaction,
    ) -> Result<RecurringTransaction> {
        new_recurring.validate()?;
        let account = self
            .account_repository
            .get_by_id(user_id, &new_recurring.account_id)?;
        self.category_repository
            .get_by_id(user_id, &new_recurring.category_id)?;

        let currency = new_recurring
            .currency
            .clone()
            .unwrap_or(account.currency);
        debug!(
            "Creating {} recurring template for user {}",
            new_recurring.frequency.as_str(),
            user_id
        );
        self.repository.create(user_id, new_recurring, currency).await
    }

    async fn update_recurring(
        &self,
        user_id: &str,
        update: RecurringTransactionUpdate,
    ) -> Result<RecurringTransaction> {
        update.validate()?;
        self.repository.update(user_id, update).await
    }

    async fn delete_recurring(&self, user_id: &str, recurring_id: &str) -> Result<()> {
        self.repository.delete(user_id, recurring_id).await?;
        Ok(())
    }

    fn get_recurring(&self, user_id: &str, recurring_id: &str) -> Result<RecurringTransaction> {
        self.repository.get_by_id(user_id, recurring_id)
    }

    fn list_recurring(&self, user_id: &str) -> Result<Vec<RecurringTransaction>> {
        self.repository.list(user_id)
    }

    fn list_due(&self, user_id: &str) -> Result<Vec<RecurringTransaction>> {
        let today = Utc::now().date_naive();
        self.repository.list_due(user_id, today)
    }

    async fn materialize_due(&self, user_id: &str) -> Result<Vec<Transaction>> {
        let today = Utc::now().date_naive();
        let due = self.repository.list_due(user_id, today)?;
        let mut created = Vec::new();

        for template in due {
            let mut due_date = template.next_due_date;

            // Catch up every missed period, not just the most recent one.
            while due_date <= today && template.end_date.map_or(true, |end| due_date <= end) {
                let tx = self
                    .transaction_service
                    .create_transaction(
                        user_id,
                        NewTransaction {
                            id: None,
                            account_id: template.account_id.clone(),
                            category_id: template.category_id.clone(),
                            transaction_type: template.transaction_type,
                            amount: template.amount,
                            currency: Some(template.currency.clone()),
                            description: template.description.clone(),
                            transaction_date: due_date,
                            payment_method_code: None,
                        },
                    )
                    .await?;
                created.push(tx);
                due_date = next_occurrence(due_date, template.frequency);
            }

            let past_end = template.end_date.map_or(false, |end| due_date > end);
            self.repository
                .advance(user_id, &template.id, due_date, template.is_active && !past_end)
                .await?;
        }

        if !created.is_empty() {
            info!(
                "Materialized {} recurring transaction(s) for user {}",
                created.len(),
                user_id
            );
        }
        Ok(created)
    }
}
