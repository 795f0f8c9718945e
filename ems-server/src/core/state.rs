use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;

/// Server state - shared handles cloned into every handler
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | Immutable configuration |
/// | pool | SqlitePool | Embedded database pool |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// Initialize server state: open the database and apply migrations.
    ///
    /// # Panics
    ///
    /// Panics when the database cannot be opened or migrated.
    pub async fn initialize(config: &Config) -> Self {
        let db = DbService::new(&config.database_path)
            .await
            .expect("Failed to initialize database");

        Self::new(config.clone(), db.pool)
    }
}
