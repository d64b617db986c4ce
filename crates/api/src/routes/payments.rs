//! Route definitions for payments.

use axum::routing::get;
use axum::Router;

use crate::handlers::payments;
use crate::state::AppState;

/// Payment routes mounted at `/pagamentos`.
///
/// ```text
/// GET  /   -> list_payments
/// POST /   -> record_payment
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(payments::list_payments).post(payments::record_payment),
    )
}
