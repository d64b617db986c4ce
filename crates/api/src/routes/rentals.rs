//! Route definitions for rentals.

use axum::routing::post;
use axum::Router;

use crate::handlers::rentals;
use crate::state::AppState;

/// Rental routes mounted at `/alugueis`.
///
/// ```text
/// POST /                       -> open_rental
/// POST /encerrar-por-codigo    -> close_by_locker_code
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(rentals::open_rental))
        .route("/encerrar-por-codigo", post(rentals::close_by_locker_code))
}
