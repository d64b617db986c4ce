//! Route definitions for lockers.

use axum::routing::get;
use axum::Router;

use crate::handlers::lockers;
use crate::state::AppState;

/// Locker routes mounted at `/armarios`.
///
/// ```text
/// GET /disponibilidade   -> search_available
/// GET /ocupados          -> list_occupied
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/disponibilidade", get(lockers::search_available))
        .route("/ocupados", get(lockers::list_occupied))
}
