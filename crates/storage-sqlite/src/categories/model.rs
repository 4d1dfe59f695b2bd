//! Database models for categories.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use finfusion_core::categories::{Category, CategoryType};
use finfusion_core::Error;
use serde::{Deserialize, Serialize};

/// Database model for categories. The type column holds the enum's
/// SCREAMING_SNAKE string form.
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
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CategoryDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub category_type: String,
    pub icon: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new category
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[serde(rename_all = "camelCase")]
pub struct NewCategoryDB {
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub category_type: String,
    pub icon: Option<String>,
}

// Conversion to domain models. Rows with an unrecognized type column are
// surfaced as errors rather than silently remapped.
impl TryFrom<CategoryDB> for Category {
    type Error = Error;

    fn try_from(db: CategoryDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            category_type: CategoryType::parse(&db.category_type)?,
            icon: db.icon,
            created_at: db.created_at,
        })
    }
}

impl NewCategoryDB {
    /// Builds the insertable row from a domain input plus the owning user.
    pub fn from_domain(user_id: String, domain: finfusion_core::categories::NewCategory) -> Self {
        Self {
            id: domain.id,
            user_id,
            name: domain.name,
            category_type: domain.category_type.as_str().to_string(),
            icon: domain.icon,
        }
    }
}
