use finfusion_core::errors::{DatabaseError, ValidationError};
use finfusion_core::transactions::{
    NewTransaction, Transaction, TransactionFilters, TransactionRepositoryTrait, TransactionType,
    TransactionUpdate,
};
use finfusion_core::{Error, Result};
use rust_decimal::Decimal;

use super::model::{NewTransactionDB, TransactionDB};
use crate::accounts::apply_balance_delta;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::transactions;
use crate::schema::transactions::dsl::*;
use crate::utils::parse_decimal;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct TransactionRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        TransactionRepository { pool, writer }
    }
}

fn find_owned(
    conn: &mut SqliteConnection,
    owner_id: &str,
    transaction_id_param: &str,
) -> Result<TransactionDB> {
    transactions::table
        .filter(transactions::id.eq(transaction_id_param))
        .filter(transactions::user_id.eq(owner_id))
        .first::<TransactionDB>(conn)
        .map_err(|e| Error::from(StorageError::from(e)))
}

/// Signed balance effect of a stored row.
fn row_delta(row: &TransactionDB) -> Result<Decimal> {
    let tx_type = TransactionType::parse(&row.transaction_type)?;
    Ok(tx_type.signed(parse_decimal(&row.amount, "transaction.amount")))
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    async fn create(
        &self,
        user_id_param: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        let owner_id = user_id_param.to_string();
        let delta = new_transaction.balance_delta();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let mut new_transaction_db =
                    NewTransactionDB::from_domain(owner_id.clone(), new_transaction);
                if new_transaction_db.id.is_none() {
                    new_transaction_db.id = Some(Uuid::new_v4().to_string());
                }

                let result_db: TransactionDB = diesel::insert_into(transactions::table)
                    .values(&new_transaction_db)
                    .returning(TransactionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;

                // Balance moves in the same transaction as the insert.
                apply_balance_delta(conn, &owner_id, &result_db.account_id, delta)?;
                Transaction::try_from(result_db)
            })
            .await
    }

    async fn update(&self, user_id_param: &str, update: TransactionUpdate) -> Result<Transaction> {
        let owner_id = user_id_param.to_string();
        let transaction_id_owned = update.id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(
                "Transaction ID is required for updates".to_string(),
            ))
        })?;
        let new_delta = update.balance_delta();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let existing = find_owned(conn, &owner_id, &transaction_id_owned)?;

                // Reverse the old effect, then apply the new one. The
                // account may differ when the transaction is being moved.
                let old_delta = row_delta(&existing)?;
                apply_balance_delta(conn, &owner_id, &existing.account_id, -old_delta)?;
                apply_balance_delta(conn, &owner_id, &update.account_id, new_delta)?;

                let result_db = diesel::update(transactions.find(&transaction_id_owned))
                    .set((
                        account_id.eq(update.account_id),
                        category_id.eq(update.category_id),
                        transaction_type.eq(update.transaction_type.as_str()),
                        amount.eq(update.amount.to_string()),
                        description.eq(update.description),
                        transaction_date.eq(update.transaction_date),
                        payment_method_code.eq(update.payment_method_code),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .returning(TransactionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Transaction::try_from(result_db)
            })
            .await
    }

    async fn delete(&self, user_id_param: &str, transaction_id_param: &str) -> Result<usize> {
        let owner_id = user_id_param.to_string();
        let transaction_id_owned = transaction_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let existing = find_owned(conn, &owner_id, &transaction_id_owned)?;
                let old_delta = row_delta(&existing)?;
                apply_balance_delta(conn, &owner_id, &existing.account_id, -old_delta)?;

                let deleted = diesel::delete(transactions.find(&transaction_id_owned))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if deleted == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Transaction {} not found",
                        transaction_id_owned
                    ))));
                }
                Ok(deleted)
            })
            .await
    }

    fn get_by_id(&self, user_id_param: &str, transaction_id_param: &str) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;
        let transaction_db = find_owned(&mut conn, user_id_param, transaction_id_param)?;
        Transaction::try_from(transaction_db)
    }

    fn list(
        &self,
        user_id_param: &str,
        filters: &TransactionFilters,
    ) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = transactions
            .filter(user_id.eq(user_id_param))
            .order((transaction_date.desc(), created_at.desc()))
            .into_boxed();

        if let Some(ref filter_account) = filters.account_id {
            query = query.filter(account_id.eq(filter_account.clone()));
        }
        if let Some(ref filter_category) = filters.category_id {
            query = query.filter(category_id.eq(filter_category.clone()));
        }
        if let Some(filter_type) = filters.transaction_type {
            query = query.filter(transaction_type.eq(filter_type.as_str()));
        }
        if let Some(from) = filters.date_from {
            query = query.filter(transaction_date.ge(from));
        }
        if let Some(to) = filters.date_to {
            query = query.filter(transaction_date.le(to));
        }
        if let Some(limit) = filters.limit {
            query = query.limit(limit);
        }
        if let Some(offset) = filters.offset {
            query = query.offset(offset);
        }

        let transactions_db = query
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        transactions_db
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    fn list_in_range(
        &self,
        user_id_param: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let transactions_db = transactions
            .filter(user_id.eq(user_id_param))
            .filter(transaction_date.ge(from))
            .filter(transaction_date.le(to))
            .order(transaction_date.asc())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        transactions_db
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }
}
