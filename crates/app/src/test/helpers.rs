//! Test Helpers

use zeroize::Zeroizing;

use crate::{
    auth::{AuthServiceError, ManagerRecord},
    domain::customers::data::CustomerUpsert,
    test::TestContext,
};

pub(crate) fn new_customer(name: &str, phone: &str, password: &str) -> CustomerUpsert {
    CustomerUpsert {
        id: None,
        name: name.to_string(),
        phone: phone.to_string(),
        password: password.to_string(),
    }
}

pub(crate) async fn create_manager(
    ctx: &TestContext,
    login: &str,
    password: &str,
) -> Result<ManagerRecord, AuthServiceError> {
    ctx.auth
        .create_manager(login, Zeroizing::new(password.to_string()))
        .await
}

/// Backdate a stored token by `seconds`.
pub(crate) async fn age_customer_token(ctx: &TestContext, token: &str, seconds: u32) {
    sqlx::query(
        "UPDATE customers_tokens SET created = now() - make_interval(secs => $2) WHERE token = $1",
    )
    .bind(token)
    .bind(f64::from(seconds))
    .execute(ctx.db.pool())
    .await
    .expect("Failed to backdate customer token");
}

pub(crate) async fn count_customer_tokens(ctx: &TestContext) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM customers_tokens")
        .fetch_one(ctx.db.pool())
        .await
        .expect("Failed to count customer tokens")
}
