use log::debug;
use std::sync::Arc;

use super::users_model::{NewUser, User, UserUpdate};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::Result;
use crate::Error;

/// Service for managing users.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    /// Creates a new UserService instance.
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    /// Registers a new user after checking email uniqueness.
    async fn register(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        let email = new_user.email.trim().to_ascii_lowercase();
        debug!("Registering user {}", email);

        if self.repository.find_by_email(&email)?.is_some() {
            return Err(Error::ConstraintViolation(format!(
                "A user with email '{}' already exists",
                email
            )));
        }

        let normalized = NewUser { email, ..new_user };
        self.repository.create(normalized).await
    }

    async fn update_profile(&self, user_id: &str, update: UserUpdate) -> Result<User> {
        update.validate()?;
        self.repository.update(user_id, update).await
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository
            .find_by_email(&email.trim().to_ascii_lowercase())
    }
}
