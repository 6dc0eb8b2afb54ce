//! Per-test databases inside one shared `PostgreSQL` container.

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};

const TEST_USER: &str = "customers_test";
const TEST_PASSWORD: &str = "customers_test_password";

/// Shared PostgreSQL container that starts once and is reused across all tests
static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

/// Databases waiting to be dropped once their `TestDb` goes away.
static CLEANUP_SENDER: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

/// Generated names only ever contain ASCII alphanumerics and underscores.
fn is_safe_database_name(name: &str) -> bool {
    (1..=63).contains(&name.len())
        && name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn server_url(port: u16, database: &str) -> String {
    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{TEST_USER}:{TEST_PASSWORD}@{host}:{port}/{database}")
}

async fn init_postgres_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(TEST_USER)
        .with_password(TEST_PASSWORD)
        .with_db_name(TEST_USER)
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

async fn init_cleanup_task() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if let Err(error) = drop_database(&name).await {
                eprintln!("Failed to drop test database '{name}': {error}");
            }
        }
    });

    sender
}

async fn drop_database(name: &str) -> Result<(), sqlx::Error> {
    let Some(container) = POSTGRES_CONTAINER.get() else {
        return Ok(());
    };

    let Ok(port) = container.get_host_port_ipv4(5432).await else {
        return Ok(());
    };

    if !is_safe_database_name(name) {
        return Ok(());
    }

    let mut conn = PgConnection::connect(&server_url(port, "postgres")).await?;

    sqlx::query(&format!("DROP DATABASE IF EXISTS \"{name}\""))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// A freshly migrated database private to one test.
///
/// Service methods commit their own transactions, so isolation comes from giving every
/// test its own database rather than from rollback. The database is dropped in the
/// background once the value goes out of scope.
#[derive(Debug, Clone)]
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = CLEANUP_SENDER.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub async fn new() -> Self {
        let _cleanup_sender = CLEANUP_SENDER.get_or_init(init_cleanup_task).await;

        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("Clock is before the Unix epoch")
            .as_nanos();

        let thread_id = format!("{:?}", std::thread::current().id());
        let thread_id: String = thread_id.chars().filter(char::is_ascii_digit).collect();

        let name = format!("customers_test_{nanos}_{thread_id}");

        assert!(is_safe_database_name(&name), "generated an unsafe database name: {name}");

        let container = POSTGRES_CONTAINER
            .get_or_init(init_postgres_container)
            .await;

        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get container port");

        let mut conn = PgConnection::connect(&server_url(port, "postgres"))
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let pool = PgPool::connect(&server_url(port, &name))
            .await
            .expect("Failed to create pool for database");

        crate::database::migrate(&pool)
            .await
            .expect("Failed to run migrations on database");

        Self { pool, name }
    }

    /// Returns the connection pool for this test database.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_style_names_are_safe() {
        assert!(is_safe_database_name("customers_test_1700000000_12"));
    }

    #[test]
    fn unsafe_names_are_rejected() {
        assert!(!is_safe_database_name(""));
        assert!(!is_safe_database_name("1abc"));
        assert!(!is_safe_database_name("a\"; DROP TABLE customers; --"));
        assert!(!is_safe_database_name(&"a".repeat(64)));
    }

    #[tokio::test]
    async fn migrated_schema_is_present() {
        let test_db = TestDb::new().await;

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.tables \
             WHERE table_schema = 'public' \
               AND table_name IN ('customers', 'managers', 'customers_tokens')",
        )
        .fetch_one(test_db.pool())
        .await
        .expect("Failed to inspect schema");

        assert_eq!(tables, 3);
    }
}
