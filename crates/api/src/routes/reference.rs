//! Route definitions for reference data used to populate frontend selects.

use axum::routing::get;
use axum::Router;

use crate::handlers::{beaches, users};
use crate::state::AppState;

/// Reference routes mounted at the root.
///
/// ```text
/// GET /praias     -> list_beaches
/// GET /usuarios   -> list_users
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/praias", get(beaches::list_beaches))
        .route("/usuarios", get(users::list_users))
}
