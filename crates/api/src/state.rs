use std::sync::Arc;

use trankaki_db::store::PgStore;
use trankaki_db::DbPool;

use crate::config::ServerConfig;
use crate::lifecycle::RentalLifecycle;

/// State handed to every handler. Handlers reach the database only
/// through `lifecycle`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub lifecycle: Arc<RentalLifecycle<PgStore>>,
}

impl AppState {
    /// Bind the lifecycle service to a PostgreSQL store over `pool`.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            lifecycle: Arc::new(RentalLifecycle::new(PgStore::new(pool))),
        }
    }
}
