//! Customers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::customers::records::{CustomerId, CustomerRecord};

const GET_CUSTOMER_SQL: &str = include_str!("sql/get_customer.sql");
const LOCK_CUSTOMER_SQL: &str = include_str!("sql/lock_customer.sql");
const LIST_CUSTOMERS_SQL: &str = include_str!("sql/list_customers.sql");
const LIST_ACTIVE_CUSTOMERS_SQL: &str = include_str!("sql/list_active_customers.sql");
const CREATE_CUSTOMER_SQL: &str = include_str!("sql/create_customer.sql");
const UPDATE_CUSTOMER_SQL: &str = include_str!("sql/update_customer.sql");
const DELETE_CUSTOMER_SQL: &str = include_str!("sql/delete_customer.sql");
const SET_CUSTOMER_ACTIVE_SQL: &str = include_str!("sql/set_customer_active.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCustomersRepository;

impl PgCustomersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
    ) -> Result<CustomerRecord, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(GET_CUSTOMER_SQL)
            .bind(customer.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    /// Read a customer and hold its row lock until the transaction ends.
    pub(crate) async fn lock_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
    ) -> Result<Option<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(LOCK_CUSTOMER_SQL)
            .bind(customer.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_customers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(LIST_CUSTOMERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_active_customers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(LIST_ACTIVE_CUSTOMERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert a customer, returning `None` when a unique constraint swallowed the row.
    pub(crate) async fn create_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
        phone: &str,
        password_hash: &str,
    ) -> Result<Option<CustomerId>, sqlx::Error> {
        query_scalar::<Postgres, i64>(CREATE_CUSTOMER_SQL)
            .bind(name)
            .bind(phone)
            .bind(password_hash)
            .fetch_optional(&mut **tx)
            .await
            .map(|id| id.map(CustomerId::from_i64))
    }

    pub(crate) async fn update_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
        name: &str,
        phone: &str,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_CUSTOMER_SQL)
            .bind(customer.into_i64())
            .bind(name)
            .bind(phone)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CUSTOMER_SQL)
            .bind(customer.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn set_customer_active(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
        active: bool,
    ) -> Result<CustomerRecord, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(SET_CUSTOMER_ACTIVE_SQL)
            .bind(customer.into_i64())
            .bind(active)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CustomerRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CustomerId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            phone: row.try_get("phone")?,
            active: row.try_get("active")?,
            created: row.try_get::<SqlxTimestamp, _>("created")?.to_jiff(),
        })
    }
}
