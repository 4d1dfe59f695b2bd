use finfusion_core::errors::DatabaseError;
use finfusion_core::notifications::{
    NewNotification, Notification, NotificationRepositoryTrait,
};
use finfusion_core::{Error, Result};

use super::model::{NewNotificationDB, NotificationDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::notifications;
use crate::schema::notifications::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct NotificationRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl NotificationRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        NotificationRepository { pool, writer }
    }
}

#[async_trait]
impl NotificationRepositoryTrait for NotificationRepository {
    async fn create(
        &self,
        user_id_param: &str,
        new_notification: NewNotification,
    ) -> Result<Notification> {
        let owner_id = user_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Notification> {
                let mut new_notification_db =
                    NewNotificationDB::from_domain(owner_id, new_notification);
                new_notification_db.id = Some(Uuid::new_v4().to_string());

                let result_db = diesel::insert_into(notifications::table)
                    .values(&new_notification_db)
                    .returning(NotificationDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Notification::try_from(result_db)
            })
            .await
    }

    fn list(&self, user_id_param: &str, unread_only: bool) -> Result<Vec<Notification>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = notifications
            .filter(user_id.eq(user_id_param))
            .order(created_at.desc())
            .into_boxed();
        if unread_only {
            query = query.filter(is_read.eq(false));
        }
        let notifications_db = query
            .load::<NotificationDB>(&mut conn)
            .map_err(StorageError::from)?;
        notifications_db
            .into_iter()
            .map(Notification::try_from)
            .collect()
    }

    async fn mark_read(
        &self,
        user_id_param: &str,
        notification_id_param: &str,
    ) -> Result<Notification> {
        let owner_id = user_id_param.to_string();
        let notification_id_owned = notification_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Notification> {
                let result_db = diesel::update(
                    notifications
                        .filter(id.eq(&notification_id_owned))
                        .filter(user_id.eq(&owner_id)),
                )
                .set(is_read.eq(true))
                .returning(NotificationDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Notification::try_from(result_db)
            })
            .await
    }

    async fn mark_all_read(&self, user_id_param: &str) -> Result<usize> {
        let owner_id = user_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::update(
                    notifications
                        .filter(user_id.eq(&owner_id))
                        .filter(is_read.eq(false)),
                )
                .set(is_read.eq(true))
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }

    async fn delete(&self, user_id_param: &str, notification_id_param: &str) -> Result<usize> {
        let owner_id = user_id_param.to_string();
        let notification_id_owned = notification_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = diesel::delete(
                    notifications
                        .filter(id.eq(&notification_id_owned))
                        .filter(user_id.eq(&owner_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                if deleted == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Notification {} not found",
                        notification_id_owned
                    ))));
                }
                Ok(deleted)
            })
            .await
    }

    fn unread_count(&self, user_id_param: &str) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        notifications
            .filter(user_id.eq(user_id_param))
            .filter(is_read.eq(false))
            .count()
            .get_result(&mut conn)
            .map_err(|e| Error::from(StorageError::from(e)))
    }
}
