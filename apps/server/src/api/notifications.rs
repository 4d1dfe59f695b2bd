use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use finfusion_core::notifications::Notification;
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::CountResponse;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    #[serde(default)]
    unread_only: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UnreadCountResponse {
    unread: i64,
}

async fn list_notifications(
    user: AuthUser,
    Query(query): Query<ListQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Notification>>> {
    let notifications = state
        .notification_service
        .list_notifications(&user.user_id, query.unread_only)?;
    Ok(Json(notifications))
}

async fn unread_count(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<UnreadCountResponse>> {
    let unread = state.notification_service.unread_count(&user.user_id)?;
    Ok(Json(UnreadCountResponse { unread }))
}

async fn mark_read(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Notification>> {
    let n = state
        .notification_service
        .mark_read(&user.user_id, &id)
        .await?;
    Ok(Json(n))
}

async fn mark_all_read(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CountResponse>> {
    let count = state
        .notification_service
        .mark_all_read(&user.user_id)
        .await?;
    Ok(Json(CountResponse { count }))
}

async fn delete_notification(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state
        .notification_service
        .delete_notification(&user.user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/notifications", get(list_notifications))
        .route("/notifications/unread-count", get(unread_count))
        .route("/notifications/read-all", post(mark_all_read))
        .route("/notifications/{id}/read", put(mark_read))
        .route(
            "/notifications/{id}",
            axum::routing::delete(delete_notification),
        )
}
