use ut_config::Config;
use ut_core::{ActivityLog, Clock, SystemClock};
use ut_db::ActivityLogRepository;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub activity_log: ActivityLog,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self::with_clock(pool, config, Arc::new(SystemClock))
    }

    pub fn with_clock(pool: SqlitePool, config: Config, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(ActivityLogRepository::new(pool.clone()));

        Self {
            pool,
            activity_log: ActivityLog::new(store, clock),
            config: Arc::new(config),
        }
    }

    pub fn user_header(&self) -> &str {
        &self.config.auth.user_header
    }
}
