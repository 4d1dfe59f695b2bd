use log::debug;
use std::sync::Arc;

use super::categories_model::{Category, CategoryType, CategoryUpdate, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::Result;
use crate::Error;

/// Service for managing categories.
pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    /// Creates a new CategoryService instance.
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl CategoryServiceTrait for CategoryService {
    /// Creates a category after checking (name, type) uniqueness.
    async fn create_category(&self, user_id: &str, new_category: NewCategory) -> Result<Category> {
        new_category.validate()?;
        let name = new_category.name.trim().to_string();
        debug!(
            "Creating category '{}' ({}) for user {}",
            name,
            new_category.category_type.as_str(),
            user_id
        );

        if self
            .repository
            .find_by_name_and_type(user_id, &name, new_category.category_type)?
            .is_some()
        {
            return Err(Error::ConstraintViolation(format!(
                "Category '{}' of type {} already exists",
                name,
                new_category.category_type.as_str()
            )));
        }

        let normalized = NewCategory {
            name,
            ..new_category
        };
        self.repository.create(user_id, normalized).await
    }

    async fn update_category(&self, user_id: &str, update: CategoryUpdate) -> Result<Category> {
        update.validate()?;
        let category_id = update.id.clone().unwrap_or_default();
        let existing = self.repository.get_by_id(user_id, &category_id)?;
        let name = update.name.trim().to_string();

        // Renaming into an existing (name, type) pair is a duplicate.
        if let Some(other) =
            self.repository
                .find_by_name_and_type(user_id, &name, existing.category_type)?
        {
            if other.id != existing.id {
                return Err(Error::ConstraintViolation(format!(
                    "Category '{}' of type {} already exists",
                    name,
                    existing.category_type.as_str()
                )));
            }
        }

        self.repository
            .update(user_id, CategoryUpdate { name, ..update })
            .await
    }

    async fn delete_category(&self, user_id: &str, category_id: &str) -> Result<()> {
        self.repository.delete(user_id, category_id).await?;
        Ok(())
    }

    fn get_category(&self, user_id: &str, category_id: &str) -> Result<Category> {
        self.repository.get_by_id(user_id, category_id)
    }

    fn list_categories(
        &self,
        user_id: &str,
        type_filter: Option<CategoryType>,
    ) -> Result<Vec<Category>> {
        self.repository.list(user_id, type_filter)
    }
}
