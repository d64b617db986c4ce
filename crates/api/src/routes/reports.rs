//! Route definitions for reports.

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Report routes mounted at `/relatorios`.
///
/// ```text
/// GET /usuarios-devedores   -> debtors
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/usuarios-devedores", get(reports::debtors))
}
