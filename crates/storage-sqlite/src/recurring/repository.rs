use finfusion_core::errors::{DatabaseError, ValidationError};
use finfusion_core::recurring::{
    NewRecurringTransaction, RecurringRepositoryTrait, RecurringTransaction,
    RecurringTransactionUpdate,
};
use finfusion_core::{Error, Result};

use super::model::{NewRecurringTransactionDB, RecurringTransactionDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::recurring_transactions;
use crate::schema::recurring_transactions::dsl::*;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct RecurringRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl RecurringRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        RecurringRepository { pool, writer }
    }
}

fn find_owned(
    conn: &mut SqliteConnection,
    owner_id: &str,
    recurring_id_param: &str,
) -> Result<RecurringTransactionDB> {
    recurring_transactions::table
        .filter(recurring_transactions::id.eq(recurring_id_param))
        .filter(recurring_transactions::user_id.eq(owner_id))
        .first::<RecurringTransactionDB>(conn)
        .map_err(|e| Error::from(StorageError::from(e)))
}

#[async_trait]
impl RecurringRepositoryTrait for RecurringRepository {
    async fn create(
        &self,
        user_id_param: &str,
        new_recurring: NewRecurringTransaction,
        currency_param: String,
    ) -> Result<RecurringTransaction> {
        let owner_id = user_id_param.to_string();
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<RecurringTransaction> {
                    let mut new_recurring_db = NewRecurringTransactionDB::from_domain(
                        owner_id,
                        currency_param,
                        new_recurring,
                    );
                    if new_recurring_db.id.is_none() {
                        new_recurring_db.id = Some(Uuid::new_v4().to_string());
                    }

                    let result_db = diesel::insert_into(recurring_transactions::table)
                        .values(&new_recurring_db)
                        .returning(RecurringTransactionDB::as_returning())
                        .get_result(conn)
                        .map_err(StorageError::from)?;
                    RecurringTransaction::try_from(result_db)
                },
            )
            .await
    }

    async fn update(
        &self,
        user_id_param: &str,
        update: RecurringTransactionUpdate,
    ) -> Result<RecurringTransaction> {
        let owner_id = user_id_param.to_string();
        let recurring_id_owned = update.id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(
                "Recurring transaction ID is required for updates".to_string(),
            ))
        })?;

        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<RecurringTransaction> {
                    find_owned(conn, &owner_id, &recurring_id_owned)?;

                    let result_db = diesel::update(recurring_transactions.find(&recurring_id_owned))
                        .set((
                            amount.eq(update.amount.to_string()),
                            description.eq(update.description),
                            frequency.eq(update.frequency.as_str()),
                            end_date.eq(update.end_date),
                            is_active.eq(update.is_active),
                            updated_at.eq(Utc::now().naive_utc()),
                        ))
                        .returning(RecurringTransactionDB::as_returning())
                        .get_result(conn)
                        .map_err(StorageError::from)?;
                    RecurringTransaction::try_from(result_db)
                },
            )
            .await
    }

    async fn delete(&self, user_id_param: &str, recurring_id_param: &str) -> Result<usize> {
        let owner_id = user_id_param.to_string();
        let recurring_id_owned = recurring_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = diesel::delete(
                    recurring_transactions
                        .filter(id.eq(&recurring_id_owned))
                        .filter(user_id.eq(&owner_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                if deleted == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Recurring transaction {} not found",
                        recurring_id_owned
                    ))));
                }
                Ok(deleted)
            })
            .await
    }

    fn get_by_id(
        &self,
        user_id_param: &str,
        recurring_id_param: &str,
    ) -> Result<RecurringTransaction> {
        let mut conn = get_connection(&self.pool)?;
        let recurring_db = find_owned(&mut conn, user_id_param, recurring_id_param)?;
        RecurringTransaction::try_from(recurring_db)
    }

    fn list(&self, user_id_param: &str) -> Result<Vec<RecurringTransaction>> {
        let mut conn = get_connection(&self.pool)?;
        let recurring_db = recurring_transactions
            .filter(user_id.eq(user_id_param))
            .order(next_due_date.asc())
            .load::<RecurringTransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        recurring_db
            .into_iter()
            .map(RecurringTransaction::try_from)
            .collect()
    }

    fn list_due(
        &self,
        user_id_param: &str,
        today: NaiveDate,
    ) -> Result<Vec<RecurringTransaction>> {
        let mut conn = get_connection(&self.pool)?;
        let recurring_db = recurring_transactions
            .filter(user_id.eq(user_id_param))
            .filter(is_active.eq(true))
            .filter(next_due_date.le(today))
            // A template whose end date moved behind its next due date is
            // spent, not due.
            .filter(end_date.is_null().or(end_date.ge(next_due_date.nullable())))
            .order(next_due_date.asc())
            .load::<RecurringTransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        recurring_db
            .into_iter()
            .map(RecurringTransaction::try_from)
            .collect()
    }

    async fn advance(
        &self,
        user_id_param: &str,
        recurring_id_param: &str,
        next_due: NaiveDate,
        active: bool,
    ) -> Result<RecurringTransaction> {
        let owner_id = user_id_param.to_string();
        let recurring_id_owned = recurring_id_param.to_string();
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<RecurringTransaction> {
                    find_owned(conn, &owner_id, &recurring_id_owned)?;

                    let result_db = diesel::update(recurring_transactions.find(&recurring_id_owned))
                        .set((
                            next_due_date.eq(next_due),
                            is_active.eq(active),
                            updated_at.eq(Utc::now().naive_utc()),
                        ))
                        .returning(RecurringTransactionDB::as_returning())
                        .get_result(conn)
                        .map_err(StorageError::from)?;
                    RecurringTransaction::try_from(result_db)
                },
            )
            .await
    }
}
