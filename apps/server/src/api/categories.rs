use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use finfusion_core::categories::{Category, CategoryType, CategoryUpdate, NewCategory};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    category_type: Option<CategoryType>,
}

async fn list_categories(
    user: AuthUser,
    Query(query): Query<ListQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Category>>> {
    let categories = state
        .category_service
        .list_categories(&user.user_id, query.category_type)?;
    Ok(Json(categories))
}

async fn get_category(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Category>> {
    let category = state.category_service.get_category(&user.user_id, &id)?;
    Ok(Json(category))
}

async fn create_category(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(category): Json<NewCategory>,
) -> ApiResult<Json<Category>> {
    let c = state
        .category_service
        .create_category(&user.user_id, category)
        .await?;
    Ok(Json(c))
}

async fn update_category(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<CategoryUpdate>,
) -> ApiResult<Json<Category>> {
    update.id = Some(id);
    let c = state
        .category_service
        .update_category(&user.user_id, update)
        .await?;
    Ok(Json(c))
}

async fn delete_category(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state
        .category_service
        .delete_category(&user.user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}
