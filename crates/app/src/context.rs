//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, DatabaseHealth, Db, PoolSettings},
    domain::customers::{CustomersService, PgCustomersService},
};

/// Failure while building the [`AppContext`].
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The pool could not be established.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Services wired over one database handle.
#[derive(Clone)]
pub struct AppContext {
    /// Customer Store.
    pub customers: Arc<dyn CustomersService>,
    /// Manager credentials and customer tokens.
    pub auth: Arc<dyn AuthService>,

    /// Database reachability check.
    pub database: Arc<dyn DatabaseHealth>,

    /// Shared handle, kept so the owner can close the pool on shutdown.
    pub db: Db,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        settings: &PoolSettings,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, settings)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(Db::new(pool, settings.statement_timeout)))
    }

    /// Build every service over an existing handle.
    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            customers: Arc::new(PgCustomersService::new(db.clone())),
            auth: Arc::new(PgAuthService::new(db.clone())),
            database: Arc::new(db.clone()),
            db,
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}
