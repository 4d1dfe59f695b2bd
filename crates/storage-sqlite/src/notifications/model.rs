//! Database models for notifications.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use finfusion_core::notifications::{Notification, Severity};
use finfusion_core::Error;
use serde::{Deserialize, Serialize};

/// Database model for notifications
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::notifications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct NotificationDB {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub severity: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new notification
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::notifications)]
#[serde(rename_all = "camelCase")]
pub struct NewNotificationDB {
    pub id: Option<String>,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub severity: String,
    pub is_read: bool,
}

// Conversion to domain models
impl TryFrom<NotificationDB> for Notification {
    type Error = Error;

    fn try_from(db: NotificationDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            title: db.title,
            message: db.message,
            severity: Severity::parse(&db.severity)?,
            is_read: db.is_read,
            created_at: db.created_at,
        })
    }
}

impl NewNotificationDB {
    /// Builds the insertable row. New notifications start unread.
    pub fn from_domain(
        user_id: String,
        domain: finfusion_core::notifications::NewNotification,
    ) -> Self {
        Self {
            id: None,
            user_id,
            title: domain.title,
            message: domain.message,
            severity: domain.severity.as_str().to_string(),
            is_read: false,
        }
    }
}
