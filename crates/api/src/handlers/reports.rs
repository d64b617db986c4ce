//! Handlers for reports.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /relatorios/usuarios-devedores
///
/// Users with open payments and the sum they owe, largest debt first.
pub async fn debtors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let debtors = state.lifecycle.list_debtors().await?;
    Ok(Json(debtors))
}
