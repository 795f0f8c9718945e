/// Server configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PORT | 5000 | HTTP listen port |
/// | DATABASE_PATH | ems.db | SQLite database file |
/// | FRONTEND_URL | (unset) | Allowed CORS origin; permissive when unset |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | MAX_CONNECTIONS | 1000 | Global in-flight request cap |
/// | LOG_DIR | (unset) | Daily-rolling log files when set |
///
/// # Example
///
/// ```ignore
/// PORT=8080 DATABASE_PATH=/data/ems.db cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// Frontend origin allowed by CORS
    pub frontend_url: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Maximum concurrent in-flight requests
    pub max_connections: u32,
    /// Directory for rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "ems.db".into()),
            frontend_url: std::env::var("FRONTEND_URL").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            max_connections: std::env::var("MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1000),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override database path and port, keeping the rest from the
    /// environment. Mostly used by tests.
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
