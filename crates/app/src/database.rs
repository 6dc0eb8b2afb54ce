//! Database connection management

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use sqlx::{
    PgPool, Postgres, Transaction, migrate::MigrateError, postgres::PgPoolOptions, query,
};

/// SQL used to bound every statement issued inside a transaction.
pub const SET_STATEMENT_TIMEOUT_SQL: &str = "SELECT set_config('statement_timeout', $1, true)";

const PING_SQL: &str = "SELECT 1";

/// Connection pool tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    /// Upper bound on waiting for a pooled connection, including the first connect.
    pub connect_timeout: Duration,

    /// Maximum number of open connections.
    pub max_connections: u32,

    /// Deadline applied to each statement run through [`Db::begin`].
    pub statement_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            max_connections: 10,
            statement_timeout: Duration::from_secs(5),
        }
    }
}

/// Cloneable pool handle shared by every service.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
    statement_timeout: Duration,
}

impl Db {
    /// Wrap `pool`, bounding every statement run through [`Db::begin`] by `statement_timeout`.
    #[must_use]
    pub fn new(pool: PgPool, statement_timeout: Duration) -> Self {
        Self {
            pool,
            statement_timeout,
        }
    }

    /// The underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Begin a transaction with the configured statement deadline applied.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction or setting the deadline fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        query(SET_STATEMENT_TIMEOUT_SQL)
            .bind(self.statement_timeout.as_millis().to_string())
            .execute(&mut *tx)
            .await?;

        Ok(tx)
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl DatabaseHealth for Db {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        query(PING_SQL).execute(&self.pool).await?;

        Ok(())
    }
}

/// Reachability check used by readiness reporting.
#[automock]
#[async_trait]
pub trait DatabaseHealth: Send + Sync {
    /// Run a trivial query against the database.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established within the connect timeout.
pub async fn connect(database_url: &str, settings: &PoolSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.connect_timeout)
        .connect(database_url)
        .await
}

/// Apply the embedded schema migrations.
///
/// # Errors
///
/// Returns an error if any migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
