pub mod lockers;
pub mod payments;
pub mod rentals;
pub mod reference;
pub mod reports;

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Build the route tree consumed by the frontend.
///
/// Route hierarchy:
///
/// ```text
/// /armarios/disponibilidade                 locker search (GET)
/// /armarios/ocupados                        occupied lockers (GET)
///
/// /alugueis                                 open rental (POST)
/// /alugueis/encerrar-por-codigo             close rental by locker code (POST)
///
/// /pagamentos                               list recent (GET), record (POST)
///
/// /relatorios/usuarios-devedores            debtor report (GET)
///
/// /praias                                   beaches (GET)
/// /usuarios                                 users (GET)
///
/// /health                                   service and database health (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/armarios", lockers::router())
        .nest("/alugueis", rentals::router())
        .nest("/pagamentos", payments::router())
        .nest("/relatorios", reports::router())
        .merge(reference::router())
        .route("/health", get(health::health))
}
