//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{error, info};
use zeroize::Zeroizing;

use crate::{
    auth::{
        AuthServiceError, ManagerRecord, elapsed_hours, generate_customer_token_secret,
        is_customer_token_expired, is_well_formed_customer_token, repository::PgAuthRepository,
        spawn_hash_password, spawn_verify_password,
    },
    database::Db,
    domain::customers::records::CustomerId,
};

/// `PostgreSQL`-backed [`AuthService`].
#[derive(Debug, Clone)]
pub struct PgAuthService {
    db: Db,
    repository: PgAuthRepository,
}

impl PgAuthService {
    /// Build the service over a shared handle.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAuthRepository::new(),
        }
    }

    /// Register a manager account, storing only a salted hash of the password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::AlreadyExists`] if the login is taken, or an
    /// internal error if hashing or the insert fails.
    pub async fn create_manager(
        &self,
        login: &str,
        password: Zeroizing<String>,
    ) -> Result<ManagerRecord, AuthServiceError> {
        let password_hash = spawn_hash_password(password).await?;

        let mut tx = self.db.begin().await?;

        let manager = self
            .repository
            .create_manager(&mut tx, login, &password_hash)
            .await?;

        tx.commit().await?;

        Ok(manager)
    }

    async fn verify_manager_credential(
        &self,
        login: &str,
        password: &str,
    ) -> Result<bool, AuthServiceError> {
        let mut tx = self.db.begin().await?;

        let password_hash = self
            .repository
            .find_manager_password_hash(&mut tx, login)
            .await?;

        tx.commit().await?;

        let Some(password_hash) = password_hash else {
            return Ok(false);
        };

        let valid =
            spawn_verify_password(Zeroizing::new(password.to_owned()), password_hash).await?;

        Ok(valid)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn check_manager_credential(&self, login: &str, password: &str) -> bool {
        match self.verify_manager_credential(login, password).await {
            Ok(valid) => valid,
            Err(source) => {
                error!("failed to check manager credential: {source}");

                false
            }
        }
    }

    async fn issue_customer_token(
        &self,
        login: &str,
        password: &str,
    ) -> Result<String, AuthServiceError> {
        let mut tx = self.db.begin().await?;

        let credential = self
            .repository
            .find_customer_credential(&mut tx, login)
            .await?;

        tx.commit().await?;

        let credential = credential.ok_or(AuthServiceError::NoSuchUser)?;

        let valid = spawn_verify_password(
            Zeroizing::new(password.to_owned()),
            credential.password_hash,
        )
        .await?;

        if !valid {
            return Err(AuthServiceError::InvalidCredential);
        }

        let token = generate_customer_token_secret()?.encode();

        let mut tx = self.db.begin().await?;

        self.repository
            .create_customer_token(&mut tx, &token, credential.customer_id)
            .await?;

        tx.commit().await?;

        info!(customer_id = %credential.customer_id, "issued customer token");

        Ok(token)
    }

    async fn validate_customer_token(&self, token: &str) -> Result<CustomerId, AuthServiceError> {
        if !is_well_formed_customer_token(token) {
            return Err(AuthServiceError::NoSuchUser);
        }

        let mut tx = self.db.begin().await?;

        let stored = self.repository.find_customer_token(&mut tx, token).await?;

        tx.commit().await?;

        let stored = stored.ok_or(AuthServiceError::NoSuchUser)?;

        if is_customer_token_expired(elapsed_hours(stored.created, stored.checked_at)) {
            return Err(AuthServiceError::TokenExpired);
        }

        Ok(stored.customer_id)
    }
}

/// Manager credential checks and customer bearer tokens.
#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Whether `login`/`password` belong to a manager.
    ///
    /// Every failure, including storage errors, is reported as `false`.
    async fn check_manager_credential(&self, login: &str, password: &str) -> bool;

    /// Exchange a customer's phone and password for a new bearer token.
    async fn issue_customer_token(
        &self,
        login: &str,
        password: &str,
    ) -> Result<String, AuthServiceError>;

    /// Resolve a bearer token to the customer it was issued to.
    async fn validate_customer_token(&self, token: &str) -> Result<CustomerId, AuthServiceError>;
}
