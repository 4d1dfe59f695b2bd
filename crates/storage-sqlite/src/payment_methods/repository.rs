use finfusion_core::errors::{DatabaseError, ValidationError};
use finfusion_core::payment_methods::{
    NewPaymentMethod, PaymentMethod, PaymentMethodRepositoryTrait, PaymentMethodUpdate,
};
use finfusion_core::{Error, Result};

use super::model::{NewPaymentMethodDB, PaymentMethodDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::payment_methods;
use crate::schema::payment_methods::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct PaymentMethodRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl PaymentMethodRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        PaymentMethodRepository { pool, writer }
    }
}

fn find_owned(
    conn: &mut SqliteConnection,
    owner_id: &str,
    method_id_param: &str,
) -> Result<PaymentMethodDB> {
    payment_methods::table
        .filter(payment_methods::id.eq(method_id_param))
        .filter(payment_methods::user_id.eq(owner_id))
        .first::<PaymentMethodDB>(conn)
        .map_err(|e| Error::from(StorageError::from(e)))
}

#[async_trait]
impl PaymentMethodRepositoryTrait for PaymentMethodRepository {
    async fn create(
        &self,
        user_id_param: &str,
        new_method: NewPaymentMethod,
    ) -> Result<PaymentMethod> {
        let owner_id = user_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<PaymentMethod> {
                let mut new_method_db = NewPaymentMethodDB::from_domain(owner_id, new_method);
                if new_method_db.id.is_none() {
                    new_method_db.id = Some(Uuid::new_v4().to_string());
                }

                let result_db = diesel::insert_into(payment_methods::table)
                    .values(&new_method_db)
                    .returning(PaymentMethodDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(PaymentMethod::from(result_db))
            })
            .await
    }

    async fn update(
        &self,
        user_id_param: &str,
        update: PaymentMethodUpdate,
    ) -> Result<PaymentMethod> {
        let owner_id = user_id_param.to_string();
        let method_id_owned = update.id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(
                "Payment method ID is required for updates".to_string(),
            ))
        })?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<PaymentMethod> {
                find_owned(conn, &owner_id, &method_id_owned)?;

                let result_db = diesel::update(payment_methods.find(&method_id_owned))
                    .set((label.eq(update.label), is_active.eq(update.is_active)))
                    .returning(PaymentMethodDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(PaymentMethod::from(result_db))
            })
            .await
    }

    async fn delete(&self, user_id_param: &str, method_id_param: &str) -> Result<usize> {
        let owner_id = user_id_param.to_string();
        let method_id_owned = method_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = diesel::delete(
                    payment_methods
                        .filter(id.eq(&method_id_owned))
                        .filter(user_id.eq(&owner_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                if deleted == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Payment method {} not found",
                        method_id_owned
                    ))));
                }
                Ok(deleted)
            })
            .await
    }

    fn get_by_id(&self, user_id_param: &str, method_id_param: &str) -> Result<PaymentMethod> {
        let mut conn = get_connection(&self.pool)?;
        let method_db = find_owned(&mut conn, user_id_param, method_id_param)?;
        Ok(PaymentMethod::from(method_db))
    }

    fn find_by_code(&self, user_id_param: &str, code_param: &str) -> Result<Option<PaymentMethod>> {
        let mut conn = get_connection(&self.pool)?;
        let method_db = payment_methods
            .filter(user_id.eq(user_id_param))
            .filter(code.eq(code_param))
            .first::<PaymentMethodDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(method_db.map(PaymentMethod::from))
    }

    fn list(&self, user_id_param: &str) -> Result<Vec<PaymentMethod>> {
        let mut conn = get_connection(&self.pool)?;
        let methods_db = payment_methods
            .filter(user_id.eq(user_id_param))
            .order(code.asc())
            .load::<PaymentMethodDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(methods_db.into_iter().map(PaymentMethod::from).collect())
    }
}
