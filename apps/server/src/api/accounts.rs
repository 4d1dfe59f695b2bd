use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use finfusion_core::accounts::{Account, AccountUpdate, NewAccount};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    is_active: Option<bool>,
}

async fn list_accounts(
    user: AuthUser,
    Query(query): Query<ListQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Account>>> {
    let accounts = state
        .account_service
        .list_accounts(&user.user_id, query.is_active)?;
    Ok(Json(accounts))
}

async fn get_account(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Account>> {
    let account = state.account_service.get_account(&user.user_id, &id)?;
    Ok(Json(account))
}

async fn create_account(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(account): Json<NewAccount>,
) -> ApiResult<Json<Account>> {
    let a = state
        .account_service
        .create_account(&user.user_id, account)
        .await?;
    Ok(Json(a))
}

async fn update_account(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<AccountUpdate>,
) -> ApiResult<Json<Account>> {
    update.id = Some(id);
    let a = state
        .account_service
        .update_account(&user.user_id, update)
        .await?;
    Ok(Json(a))
}

async fn delete_account(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state
        .account_service
        .delete_account(&user.user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route(
            "/accounts/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
}
