//! Handlers for opening and closing rentals.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::handlers::json_body;
use crate::lifecycle::{CloseRentalRequest, OpenRentalRequest};
use crate::state::AppState;

/// POST /alugueis
///
/// Open a rental and occupy the locker. Returns 201 with the rental row.
pub async fn open_rental(
    State(state): State<AppState>,
    body: Result<Json<OpenRentalRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let rental = state.lifecycle.open_rental(json_body(body)?).await?;
    Ok((StatusCode::CREATED, Json(rental)))
}

/// POST /alugueis/encerrar-por-codigo
///
/// Close the active rental of the locker identified by `cod_armario`.
/// Responds with `{aluguel, multa}` where `multa` is null for on-time
/// returns, or 404 when the locker has no active rental.
pub async fn close_by_locker_code(
    State(state): State<AppState>,
    body: Result<Json<CloseRentalRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let closed = state.lifecycle.close_rental(json_body(body)?).await?;
    Ok(Json(closed))
}
