use std::sync::Arc;

use super::notifications_model::{NewNotification, Notification};
use super::notifications_traits::{NotificationRepositoryTrait, NotificationServiceTrait};
use crate::errors::{DatabaseError, Result};
use crate::Error;

/// Service for managing notifications.
pub struct NotificationService {
    repository: Arc<dyn NotificationRepositoryTrait>,
}

impl NotificationService {
    /// Creates a new NotificationService instance.
    pub fn new(repository: Arc<dyn NotificationRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn create_notification(
        &self,
        user_id: &str,
        new_notification: NewNotification,
    ) -> Result<Notification> {
        new_notification.validate()?;
        self.repository.create(user_id, new_notification).await
    }

    fn list_notifications(&self, user_id: &str, unread_only: bool) -> Result<Vec<Notification>> {
        self.repository.list(user_id, unread_only)
    }

    async fn mark_read(&self, user_id: &str, notification_id: &str) -> Result<Notification> {
        self.repository.mark_read(user_id, notification_id).await
    }

    async fn mark_all_read(&self, user_id: &str) -> Result<usize> {
        self.repository.mark_all_read(user_id).await
    }

    async fn delete_notification(&self, user_id: &str, notification_id: &str) -> Result<()> {
        let deleted = self.repository.delete(user_id, notification_id).await?;
        if deleted == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "Notification {} not found",
                notification_id
            ))));
        }
        Ok(())
    }

    fn unread_count(&self, user_id: &str) -> Result<i64> {
        self.repository.unread_count(user_id)
    }
}
