use finfusion_core::accounts::{
    Account, AccountRepositoryTrait, AccountUpdate, NewAccount,
};
use finfusion_core::errors::{DatabaseError, ValidationError};
use finfusion_core::{Error, Result};
use rust_decimal::Decimal;

use super::model::{AccountDB, NewAccountDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::accounts;
use crate::schema::accounts::dsl::*;
use crate::utils::parse_decimal;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct AccountRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl AccountRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        AccountRepository { pool, writer }
    }
}

/// Loads an account scoped to its owner. An id belonging to another user
/// surfaces as NotFound.
pub(crate) fn find_owned(
    conn: &mut SqliteConnection,
    owner_id: &str,
    account_id_param: &str,
) -> Result<AccountDB> {
    accounts::table
        .filter(accounts::id.eq(account_id_param))
        .filter(accounts::user_id.eq(owner_id))
        .first::<AccountDB>(conn)
        .map_err(|e| Error::from(StorageError::from(e)))
}

/// Applies a signed balance delta to an account row, bumping updated_at.
pub(crate) fn apply_balance_delta(
    conn: &mut SqliteConnection,
    owner_id: &str,
    account_id_param: &str,
    delta: Decimal,
) -> Result<AccountDB> {
    let account_db = find_owned(conn, owner_id, account_id_param)?;
    let new_balance = parse_decimal(&account_db.balance, "account.balance") + delta;
    diesel::update(accounts::table.find(&account_db.id))
        .set((
            accounts::balance.eq(new_balance.to_string()),
            accounts::updated_at.eq(Utc::now().naive_utc()),
        ))
        .returning(AccountDB::as_returning())
        .get_result(conn)
        .map_err(|e| Error::from(StorageError::from(e)))
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn create(&self, user_id_param: &str, new_account: NewAccount) -> Result<Account> {
        let owner_id = user_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Account> {
                let mut new_account_db = NewAccountDB::from_domain(owner_id, new_account);
                if new_account_db.id.is_none() {
                    new_account_db.id = Some(Uuid::new_v4().to_string());
                }

                let result_db = diesel::insert_into(accounts::table)
                    .values(&new_account_db)
                    .returning(AccountDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Account::from(result_db))
            })
            .await
    }

    async fn update(&self, user_id_param: &str, account_update: AccountUpdate) -> Result<Account> {
        let owner_id = user_id_param.to_string();
        let account_id_owned = account_update.id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(
                "Account ID is required for updates".to_string(),
            ))
        })?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Account> {
                // Ownership check before touching the row.
                find_owned(conn, &owner_id, &account_id_owned)?;

                let result_db = diesel::update(accounts.find(&account_id_owned))
                    .set((
                        name.eq(account_update.name),
                        account_type.eq(account_update.account_type),
                        is_active.eq(account_update.is_active),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .returning(AccountDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Account::from(result_db))
            })
            .await
    }

    async fn delete(&self, user_id_param: &str, account_id_param: &str) -> Result<usize> {
        let owner_id = user_id_param.to_string();
        let account_id_owned = account_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = diesel::delete(
                    accounts
                        .filter(id.eq(&account_id_owned))
                        .filter(user_id.eq(&owner_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                if deleted == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Account {} not found",
                        account_id_owned
                    ))));
                }
                Ok(deleted)
            })
            .await
    }

    fn get_by_id(&self, user_id_param: &str, account_id_param: &str) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;
        let account_db = find_owned(&mut conn, user_id_param, account_id_param)?;
        Ok(Account::from(account_db))
    }

    fn list(&self, user_id_param: &str, is_active_filter: Option<bool>) -> Result<Vec<Account>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = accounts
            .filter(user_id.eq(user_id_param))
            .order(name.asc())
            .into_boxed();
        if let Some(active) = is_active_filter {
            query = query.filter(is_active.eq(active));
        }
        let accounts_db = query
            .load::<AccountDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(accounts_db.into_iter().map(Account::from).collect())
    }

    async fn adjust_balance(
        &self,
        user_id_param: &str,
        account_id_param: &str,
        delta: Decimal,
    ) -> Result<Account> {
        let owner_id = user_id_param.to_string();
        let account_id_owned = account_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Account> {
                let result_db = apply_balance_delta(conn, &owner_id, &account_id_owned, delta)?;
                Ok(Account::from(result_db))
            })
            .await
    }
}
