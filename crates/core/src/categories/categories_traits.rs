//! Category repository and service traits.

use async_trait::async_trait;

use super::categories_model::{Category, CategoryType, CategoryUpdate, NewCategory};
use crate::errors::Result;

/// Trait defining the contract for Category repository operations.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Creates a new category for the user.
    async fn create(&self, user_id: &str, new_category: NewCategory) -> Result<Category>;

    /// Updates a category's name and icon. The type is immutable.
    async fn update(&self, user_id: &str, update: CategoryUpdate) -> Result<Category>;

    /// Deletes a category by id. Returns the number of deleted records.
    async fn delete(&self, user_id: &str, category_id: &str) -> Result<usize>;

    /// Retrieves a category by id.
    fn get_by_id(&self, user_id: &str, category_id: &str) -> Result<Category>;

    /// Lists categories, optionally filtered by type.
    fn list(&self, user_id: &str, type_filter: Option<CategoryType>) -> Result<Vec<Category>>;

    /// Looks up a category by (name, type), used for uniqueness checks.
    fn find_by_name_and_type(
        &self,
        user_id: &str,
        name: &str,
        category_type: CategoryType,
    ) -> Result<Option<Category>>;
}

/// Trait defining the contract for Category service operations.
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    /// Creates a category, rejecting duplicate (name, type) pairs.
    async fn create_category(&self, user_id: &str, new_category: NewCategory) -> Result<Category>;

    /// Updates a category, keeping (name, type) unique.
    async fn update_category(&self, user_id: &str, update: CategoryUpdate) -> Result<Category>;

    /// Deletes a category.
    async fn delete_category(&self, user_id: &str, category_id: &str) -> Result<()>;

    /// Retrieves a category by id.
    fn get_category(&self, user_id: &str, category_id: &str) -> Result<Category>;

    /// Lists categories with an optional type filter.
    fn list_categories(
        &self,
        user_id: &str,
        type_filter: Option<CategoryType>,
    ) -> Result<Vec<Category>>;
}
