//! Handlers for locker availability and occupancy.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::lifecycle::LockerSearchParams;
use crate::state::AppState;

/// GET /armarios/disponibilidade
///
/// Lockers matching the optional beach, size and status filters. When both
/// `inicio` and `fim` are given, lockers with an active rental overlapping
/// that window are excluded.
pub async fn search_available(
    State(state): State<AppState>,
    Query(params): Query<LockerSearchParams>,
) -> AppResult<impl IntoResponse> {
    let lockers = state.lifecycle.search_lockers(&params).await?;
    Ok(Json(lockers))
}

/// GET /armarios/ocupados
pub async fn list_occupied(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let lockers = state.lifecycle.list_occupied_lockers().await?;
    Ok(Json(lockers))
}
