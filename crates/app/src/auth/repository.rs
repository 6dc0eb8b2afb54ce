//! Auth repository.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    auth::models::{CustomerCredential, ManagerId, ManagerRecord, StoredCustomerToken},
    domain::customers::records::CustomerId,
};

const FIND_MANAGER_PASSWORD_SQL: &str = include_str!("sql/find_manager_password.sql");
const CREATE_MANAGER_SQL: &str = include_str!("sql/create_manager.sql");
const FIND_CUSTOMER_CREDENTIAL_SQL: &str = include_str!("sql/find_customer_credential.sql");
const CREATE_CUSTOMER_TOKEN_SQL: &str = include_str!("sql/create_customer_token.sql");
const FIND_CUSTOMER_TOKEN_SQL: &str = include_str!("sql/find_customer_token.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAuthRepository;

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_manager_password_hash(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        login: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        query_scalar::<Postgres, String>(FIND_MANAGER_PASSWORD_SQL)
            .bind(login)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_manager(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        login: &str,
        password_hash: &str,
    ) -> Result<ManagerRecord, sqlx::Error> {
        query_as::<Postgres, ManagerRecord>(CREATE_MANAGER_SQL)
            .bind(login)
            .bind(password_hash)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_customer_credential(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        phone: &str,
    ) -> Result<Option<CustomerCredential>, sqlx::Error> {
        query_as::<Postgres, CustomerCredential>(FIND_CUSTOMER_CREDENTIAL_SQL)
            .bind(phone)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_customer_token(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        token: &str,
        customer: CustomerId,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_CUSTOMER_TOKEN_SQL)
            .bind(token)
            .bind(customer.into_i64())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn find_customer_token(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        token: &str,
    ) -> Result<Option<StoredCustomerToken>, sqlx::Error> {
        query_as::<Postgres, StoredCustomerToken>(FIND_CUSTOMER_TOKEN_SQL)
            .bind(token)
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ManagerRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ManagerId::from_i64(row.try_get("id")?),
            login: row.try_get("login")?,
            created: row.try_get::<SqlxTimestamp, _>("created")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for CustomerCredential {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            customer_id: CustomerId::from_i64(row.try_get("id")?),
            password_hash: row.try_get("password")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for StoredCustomerToken {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            customer_id: CustomerId::from_i64(row.try_get("customer_id")?),
            created: row.try_get::<SqlxTimestamp, _>("created")?.to_jiff(),
            checked_at: row.try_get::<SqlxTimestamp, _>("checked_at")?.to_jiff(),
        })
    }
}
