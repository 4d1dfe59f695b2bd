//! User repository and service traits.

use async_trait::async_trait;

use super::users_model::{NewUser, User, UserUpdate};
use crate::errors::Result;

/// Trait defining the contract for User repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Inserts a new user record.
    async fn create(&self, new_user: NewUser) -> Result<User>;

    /// Updates the mutable profile fields of an existing user.
    async fn update(&self, user_id: &str, update: UserUpdate) -> Result<User>;

    /// Retrieves a user by id.
    fn get_by_id(&self, user_id: &str) -> Result<User>;

    /// Retrieves a user by email, if one exists.
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// Trait defining the contract for User service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Registers a new user, rejecting duplicate emails.
    async fn register(&self, new_user: NewUser) -> Result<User>;

    /// Updates a user's profile.
    async fn update_profile(&self, user_id: &str, update: UserUpdate) -> Result<User>;

    /// Retrieves a user by id.
    fn get_user(&self, user_id: &str) -> Result<User>;

    /// Retrieves a user by email for credential verification.
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}
