//! Database Config

use std::time::Duration;

use clap::Args;
use customers_app::database::PoolSettings;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Seconds to wait for a pooled connection, including the first connect.
    #[arg(long, env = "DATABASE_CONNECT_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub database_connect_timeout_seconds: u64,

    /// Maximum number of pooled connections.
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10_u32)]
    pub database_max_connections: u32,

    /// Per-statement deadline in milliseconds.
    #[arg(long, env = "DATABASE_STATEMENT_TIMEOUT_MS", default_value_t = 5_000_u64)]
    pub database_statement_timeout_ms: u64,
}

impl DatabaseConfig {
    #[must_use]
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            connect_timeout: Duration::from_secs(self.database_connect_timeout_seconds),
            max_connections: self.database_max_connections,
            statement_timeout: Duration::from_millis(self.database_statement_timeout_ms),
        }
    }
}
