//! Customers service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;
use zeroize::Zeroizing;

use crate::{
    auth::spawn_hash_password,
    database::Db,
    domain::customers::{
        data::CustomerUpsert,
        errors::CustomersServiceError,
        records::{CustomerId, CustomerRecord},
        repository::PgCustomersRepository,
    },
};

/// `PostgreSQL`-backed [`CustomersService`].
#[derive(Debug, Clone)]
pub struct PgCustomersService {
    db: Db,
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    /// Build the service over a shared handle.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCustomersRepository::new(),
        }
    }
}

#[async_trait]
impl CustomersService for PgCustomersService {
    async fn get_customer(
        &self,
        customer: CustomerId,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let customer = self.repository.get_customer(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(customer)
    }

    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let customers = self.repository.list_customers(&mut tx).await?;

        tx.commit().await?;

        Ok(customers)
    }

    async fn list_active_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let customers = self.repository.list_active_customers(&mut tx).await?;

        tx.commit().await?;

        Ok(customers)
    }

    async fn save_customer(
        &self,
        customer: CustomerUpsert,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let CustomerUpsert {
            id,
            name,
            phone,
            password,
        } = customer;

        let password = Zeroizing::new(password);

        // Hash before taking a pooled connection when the save can only create.
        let prehashed = match id {
            Some(_) => None,
            None => Some(spawn_hash_password(password.clone()).await?),
        };

        let mut tx = self.db.begin().await?;

        let existing = match id {
            Some(id) => self.repository.lock_customer(&mut tx, id).await?,
            None => None,
        };

        let saved_id = if let Some(existing) = existing {
            self.repository
                .update_customer(&mut tx, existing.id, &name, &phone)
                .await?;

            debug!(customer_id = %existing.id, "updated customer");

            existing.id
        } else {
            let password_hash = match prehashed {
                Some(password_hash) => password_hash,
                None => spawn_hash_password(password).await?,
            };

            let created = self
                .repository
                .create_customer(&mut tx, &name, &phone, &password_hash)
                .await?
                .ok_or(CustomersServiceError::AlreadyExists)?;

            debug!(customer_id = %created, "created customer");

            created
        };

        let saved = self.repository.get_customer(&mut tx, saved_id).await?;

        tx.commit().await?;

        Ok(saved)
    }

    async fn remove_customer(
        &self,
        customer: CustomerId,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let removed = self
            .repository
            .lock_customer(&mut tx, customer)
            .await?
            .ok_or(CustomersServiceError::NotFound)?;

        self.repository.delete_customer(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(removed)
    }

    async fn set_customer_active(
        &self,
        customer: CustomerId,
        active: bool,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .set_customer_active(&mut tx, customer, active)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

/// Customer Store operations.
#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Retrieve a single customer.
    async fn get_customer(
        &self,
        customer: CustomerId,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Retrieve every customer, in no particular order.
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError>;

    /// Retrieve customers whose `active` flag is set.
    async fn list_active_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError>;

    /// Create or update a customer and return the stored state.
    async fn save_customer(
        &self,
        customer: CustomerUpsert,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Delete a customer, returning the record as it was before removal.
    async fn remove_customer(
        &self,
        customer: CustomerId,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Block (`false`) or unblock (`true`) a customer.
    async fn set_customer_active(
        &self,
        customer: CustomerId,
        active: bool,
    ) -> Result<CustomerRecord, CustomersServiceError>;
}
