use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use finfusion_core::transactions::{
    NewTransaction, Transaction, TransactionFilters, TransactionUpdate,
};

use crate::api::shared::trigger_budget_evaluation;
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_transactions(
    user: AuthUser,
    Query(filters): Query<TransactionFilters>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let transactions = state
        .transaction_service
        .search_transactions(&user.user_id, &filters)?;
    Ok(Json(transactions))
}

async fn get_transaction(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Transaction>> {
    let transaction = state
        .transaction_service
        .get_transaction(&user.user_id, &id)?;
    Ok(Json(transaction))
}

async fn create_transaction(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(transaction): Json<NewTransaction>,
) -> ApiResult<Json<Transaction>> {
    let t = state
        .transaction_service
        .create_transaction(&user.user_id, transaction)
        .await?;
    trigger_budget_evaluation(state, user.user_id);
    Ok(Json(t))
}

async fn update_transaction(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<TransactionUpdate>,
) -> ApiResult<Json<Transaction>> {
    update.id = Some(id);
    let t = state
        .transaction_service
        .update_transaction(&user.user_id, update)
        .await?;
    trigger_budget_evaluation(state, user.user_id);
    Ok(Json(t))
}

async fn delete_transaction(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state
        .transaction_service
        .delete_transaction(&user.user_id, &id)
        .await?;
    trigger_budget_evaluation(state, user.user_id);
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route(
            "/transactions/{id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}
