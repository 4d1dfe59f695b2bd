use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use finfusion_core::loans::{
    AmortizationRow, Loan, LoanPayment, LoanUpdate, NewLoan, NewLoanPayment, PrepaymentInput,
    PrepaymentOutcome,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    #[serde(default)]
    active_only: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutstandingResponse {
    loan_id: String,
    outstanding: Decimal,
}

async fn list_loans(
    user: AuthUser,
    Query(query): Query<ListQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Loan>>> {
    let loans = state
        .loan_service
        .list_loans(&user.user_id, query.active_only)?;
    Ok(Json(loans))
}

async fn get_loan(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Loan>> {
    let loan = state.loan_service.get_loan(&user.user_id, &id)?;
    Ok(Json(loan))
}

async fn create_loan(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(loan): Json<NewLoan>,
) -> ApiResult<Json<Loan>> {
    let l = state.loan_service.create_loan(&user.user_id, loan).await?;
    Ok(Json(l))
}

async fn update_loan(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<LoanUpdate>,
) -> ApiResult<Json<Loan>> {
    update.id = Some(id);
    let l = state.loan_service.update_loan(&user.user_id, update).await?;
    Ok(Json(l))
}

async fn delete_loan(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.loan_service.delete_loan(&user.user_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn loan_schedule(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<AmortizationRow>>> {
    let schedule = state.loan_service.get_schedule(&user.user_id, &id)?;
    Ok(Json(schedule))
}

async fn simulate_prepayment(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(input): Json<PrepaymentInput>,
) -> ApiResult<Json<PrepaymentOutcome>> {
    let outcome = state
        .loan_service
        .simulate_prepayment(&user.user_id, &id, &input)?;
    Ok(Json(outcome))
}

async fn list_payments(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<LoanPayment>>> {
    let payments = state.loan_service.list_payments(&user.user_id, &id)?;
    Ok(Json(payments))
}

async fn record_payment(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payment): Json<NewLoanPayment>,
) -> ApiResult<Json<LoanPayment>> {
    let p = state
        .loan_service
        .record_payment(&user.user_id, &id, payment)
        .await?;
    Ok(Json(p))
}

async fn outstanding_balance(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<OutstandingResponse>> {
    let outstanding = state.loan_service.outstanding_balance(&user.user_id, &id)?;
    Ok(Json(OutstandingResponse {
        loan_id: id,
        outstanding,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/loans", get(list_loans).post(create_loan))
        .route(
            "/loans/{id}",
            get(get_loan).put(update_loan).delete(delete_loan),
        )
        .route("/loans/{id}/schedule", get(loan_schedule))
        .route("/loans/{id}/simulate", post(simulate_prepayment))
        .route("/loans/{id}/payments", get(list_payments).post(record_payment))
        .route("/loans/{id}/outstanding", get(outstanding_balance))
}
