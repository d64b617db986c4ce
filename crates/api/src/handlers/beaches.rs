use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /praias
pub async fn list_beaches(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let beaches = state.lifecycle.list_beaches().await?;
    Ok(Json(beaches))
}
