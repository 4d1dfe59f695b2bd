//! Notification repository and service traits.

use async_trait::async_trait;

use super::notifications_model::{NewNotification, Notification};
use crate::errors::Result;

/// Trait defining the contract for Notification repository operations.
#[async_trait]
pub trait NotificationRepositoryTrait: Send + Sync {
    /// Inserts a notification.
    async fn create(&self, user_id: &str, new_notification: NewNotification)
        -> Result<Notification>;

    /// Lists notifications, newest first, optionally unread only.
    fn list(&self, user_id: &str, unread_only: bool) -> Result<Vec<Notification>>;

    /// Marks one notification read.
    async fn mark_read(&self, user_id: &str, notification_id: &str) -> Result<Notification>;

    /// Marks all unread notifications read. Returns the number updated.
    async fn mark_all_read(&self, user_id: &str) -> Result<usize>;

    /// Deletes a notification. NotFound when no row matches.
    async fn delete(&self, user_id: &str, notification_id: &str) -> Result<usize>;

    /// Counts unread notifications.
    fn unread_count(&self, user_id: &str) -> Result<i64>;
}

/// Trait defining the contract for Notification service operations.
#[async_trait]
pub trait NotificationServiceTrait: Send + Sync {
    /// Creates a notification.
    async fn create_notification(
        &self,
        user_id: &str,
        new_notification: NewNotification,
    ) -> Result<Notification>;

    /// Lists notifications, optionally unread only.
    fn list_notifications(&self, user_id: &str, unread_only: bool) -> Result<Vec<Notification>>;

    /// Marks one notification read.
    async fn mark_read(&self, user_id: &str, notification_id: &str) -> Result<Notification>;

    /// Marks all notifications read. Returns the number updated.
    async fn mark_all_read(&self, user_id: &str) -> Result<usize>;

    /// Deletes a notification; deleting a missing one is NotFound.
    async fn delete_notification(&self, user_id: &str, notification_id: &str) -> Result<()>;

    /// Counts unread notifications.
    fn unread_count(&self, user_id: &str) -> Result<i64>;
}
