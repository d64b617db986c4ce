use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    pub fn new(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

/// GET /health
///
/// Always 200; an unreachable database only degrades the report.
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::new(state.lifecycle.database_reachable().await))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_database_degrades_the_report() {
        let report = HealthReport::new(false);
        assert_eq!(report.status, "degraded");
        assert!(!report.db_healthy);

        assert_eq!(HealthReport::new(true).status, "ok");
    }
}
