use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use finfusion_core::recurring::{
    NewRecurringTransaction, RecurringTransaction, RecurringTransactionUpdate,
};
use finfusion_core::transactions::Transaction;

use crate::api::shared::trigger_budget_evaluation;
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_recurring(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<RecurringTransaction>>> {
    let templates = state.recurring_service.list_recurring(&user.user_id)?;
    Ok(Json(templates))
}

async fn list_due(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<RecurringTransaction>>> {
    let due = state.recurring_service.list_due(&user.user_id)?;
    Ok(Json(due))
}

/// Turns every due template into real transactions. There is no background
/// scheduler; clients call this explicitly.
async fn materialize_due(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let created = state
        .recurring_service
        .materialize_due(&user.user_id)
        .await?;
    if !created.is_empty() {
        trigger_budget_evaluation(state, user.user_id);
    }
    Ok(Json(created))
}

async fn get_recurring(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RecurringTransaction>> {
    let template = state.recurring_service.get_recurring(&user.user_id, &id)?;
    Ok(Json(template))
}

async fn create_recurring(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(template): Json<NewRecurringTransaction>,
) -> ApiResult<Json<RecurringTransaction>> {
    let r = state
        .recurring_service
        .create_recurring(&user.user_id, template)
        .await?;
    Ok(Json(r))
}

async fn update_recurring(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<RecurringTransactionUpdate>,
) -> ApiResult<Json<RecurringTransaction>> {
    update.id = Some(id);
    let r = state
        .recurring_service
        .update_recurring(&user.user_id, update)
        .await?;
    Ok(Json(r))
}

async fn delete_recurring(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state
        .recurring_service
        .delete_recurring(&user.user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recurring", get(list_recurring).post(create_recurring))
        .route("/recurring/due", get(list_due))
        .route("/recurring/materialize", post(materialize_due))
        .route(
            "/recurring/{id}",
            get(get_recurring)
                .put(update_recurring)
                .delete(delete_recurring),
        )
}
