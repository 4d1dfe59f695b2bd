use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use finfusion_core::payment_methods::{NewPaymentMethod, PaymentMethod, PaymentMethodUpdate};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_payment_methods(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<PaymentMethod>>> {
    let methods = state
        .payment_method_service
        .list_payment_methods(&user.user_id)?;
    Ok(Json(methods))
}

async fn get_by_code(
    user: AuthUser,
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PaymentMethod>> {
    let method = state
        .payment_method_service
        .get_by_code(&user.user_id, &code)?;
    Ok(Json(method))
}

async fn create_payment_method(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(method): Json<NewPaymentMethod>,
) -> ApiResult<Json<PaymentMethod>> {
    let m = state
        .payment_method_service
        .create_payment_method(&user.user_id, method)
        .await?;
    Ok(Json(m))
}

async fn update_payment_method(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<PaymentMethodUpdate>,
) -> ApiResult<Json<PaymentMethod>> {
    update.id = Some(id);
    let m = state
        .payment_method_service
        .update_payment_method(&user.user_id, update)
        .await?;
    Ok(Json(m))
}

async fn delete_payment_method(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state
        .payment_method_service
        .delete_payment_method(&user.user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/payment-methods",
            get(list_payment_methods).post(create_payment_method),
        )
        .route("/payment-methods/code/{code}", get(get_by_code))
        .route(
            "/payment-methods/{id}",
            axum::routing::put(update_payment_method).delete(delete_payment_method),
        )
}
