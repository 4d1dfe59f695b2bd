use finfusion_core::categories::{
    Category, CategoryRepositoryTrait, CategoryType, CategoryUpdate, NewCategory,
};
use finfusion_core::errors::{DatabaseError, ValidationError};
use finfusion_core::{Error, Result};

use super::model::{CategoryDB, NewCategoryDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::categories;
use crate::schema::categories::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct CategoryRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl CategoryRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        CategoryRepository { pool, writer }
    }
}

fn find_owned(
    conn: &mut SqliteConnection,
    owner_id: &str,
    category_id_param: &str,
) -> Result<CategoryDB> {
    categories::table
        .filter(categories::id.eq(category_id_param))
        .filter(categories::user_id.eq(owner_id))
        .first::<CategoryDB>(conn)
        .map_err(|e| Error::from(StorageError::from(e)))
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn create(&self, user_id_param: &str, new_category: NewCategory) -> Result<Category> {
        let owner_id = user_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let mut new_category_db = NewCategoryDB::from_domain(owner_id, new_category);
                if new_category_db.id.is_none() {
                    new_category_db.id = Some(Uuid::new_v4().to_string());
                }

                let result_db = diesel::insert_into(categories::table)
                    .values(&new_category_db)
                    .returning(CategoryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Category::try_from(result_db)
            })
            .await
    }

    async fn update(&self, user_id_param: &str, update: CategoryUpdate) -> Result<Category> {
        let owner_id = user_id_param.to_string();
        let category_id_owned = update.id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(
                "Category ID is required for updates".to_string(),
            ))
        })?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                find_owned(conn, &owner_id, &category_id_owned)?;

                let result_db = diesel::update(categories.find(&category_id_owned))
                    .set((name.eq(update.name), icon.eq(update.icon)))
                    .returning(CategoryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Category::try_from(result_db)
            })
            .await
    }

    async fn delete(&self, user_id_param: &str, category_id_param: &str) -> Result<usize> {
        let owner_id = user_id_param.to_string();
        let category_id_owned = category_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = diesel::delete(
                    categories
                        .filter(id.eq(&category_id_owned))
                        .filter(user_id.eq(&owner_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                if deleted == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Category {} not found",
                        category_id_owned
                    ))));
                }
                Ok(deleted)
            })
            .await
    }

    fn get_by_id(&self, user_id_param: &str, category_id_param: &str) -> Result<Category> {
        let mut conn = get_connection(&self.pool)?;
        let category_db = find_owned(&mut conn, user_id_param, category_id_param)?;
        Category::try_from(category_db)
    }

    fn list(
        &self,
        user_id_param: &str,
        type_filter: Option<CategoryType>,
    ) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = categories
            .filter(user_id.eq(user_id_param))
            .order(name.asc())
            .into_boxed();
        if let Some(filter) = type_filter {
            query = query.filter(category_type.eq(filter.as_str()));
        }
        let categories_db = query
            .load::<CategoryDB>(&mut conn)
            .map_err(StorageError::from)?;
        categories_db.into_iter().map(Category::try_from).collect()
    }

    fn find_by_name_and_type(
        &self,
        user_id_param: &str,
        name_param: &str,
        type_param: CategoryType,
    ) -> Result<Option<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let category_db = categories
            .filter(user_id.eq(user_id_param))
            .filter(name.eq(name_param))
            .filter(category_type.eq(type_param.as_str()))
            .first::<CategoryDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        category_db.map(Category::try_from).transpose()
    }
}
