//! Handlers for payments.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::handlers::json_body;
use crate::lifecycle::RecordPaymentRequest;
use crate::state::AppState;

/// GET /pagamentos
///
/// The most recent payments, newest first, with status normalized to
/// `pago` / `em_aberto`.
pub async fn list_payments(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let payments = state.lifecycle.list_payments().await?;
    Ok(Json(payments))
}

/// POST /pagamentos
pub async fn record_payment(
    State(state): State<AppState>,
    body: Result<Json<RecordPaymentRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let payment = state.lifecycle.record_payment(json_body(body)?).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}
