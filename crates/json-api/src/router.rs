//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{auth, customers, healthcheck, observability, state::State, tokens};

pub(crate) fn app_router(state: Arc<State>, manager_auth_enabled: bool) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(tokens_router())
        .push(customers_router(manager_auth_enabled))
}

/// Token routes sit in front of the customer routes so `token` is never read as an id.
fn tokens_router() -> Router {
    Router::with_path("customers/token")
        .post(tokens::issue::handler)
        .push(Router::with_path("validate").post(tokens::validate::handler))
}

fn customers_router(manager_auth_enabled: bool) -> Router {
    let router = Router::with_path("customers");

    let router = if manager_auth_enabled {
        router.hoop(auth::middleware::handler)
    } else {
        router
    };

    router
        .get(customers::index::handler)
        .post(customers::save::handler)
        .push(Router::with_path("active").get(customers::active::handler))
        .push(
            Router::with_path("{id}")
                .get(customers::get::handler)
                .delete(customers::delete::handler)
                .push(
                    Router::with_path("block")
                        .post(customers::block::handler)
                        .delete(customers::unblock::handler),
                ),
        )
}

#[cfg(test)]
mod tests {
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use salvo::{
        http::header::AUTHORIZATION,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use customers_app::{auth::MockAuthService, domain::customers::MockCustomersService};

    use crate::test_helpers::{make_customer, state_with};

    use super::*;

    fn basic(login: &str, password: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{login}:{password}")))
    }

    #[tokio::test]
    async fn test_customer_routes_require_manager_when_enabled() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers.expect_list_customers().never();

        let service = Service::new(app_router(
            state_with(customers, MockAuthService::new()),
            true,
        ));

        let res = TestClient::get("http://example.com/customers")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_manager_credentials_open_customer_routes() -> TestResult {
        let mut customers = MockCustomersService::new();
        let mut auth = MockAuthService::new();

        auth.expect_check_manager_credential()
            .once()
            .withf(|login, password| login == "admin" && password == "hunter2")
            .return_const(true);

        customers
            .expect_list_customers()
            .once()
            .return_once(|| Ok(vec![make_customer(1)]));

        let service = Service::new(app_router(state_with(customers, auth), true));

        let mut res = TestClient::get("http://example.com/customers")
            .add_header(AUTHORIZATION, basic("admin", "hunter2"), true)
            .send(&service)
            .await;

        let body: Vec<serde_json::Value> = res.take_json().await?;

        assert_eq!(body.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_customer_routes_are_open_when_manager_auth_disabled() -> TestResult {
        let mut customers = MockCustomersService::new();
        let mut auth = MockAuthService::new();

        auth.expect_check_manager_credential().never();

        customers
            .expect_list_customers()
            .once()
            .return_once(|| Ok(Vec::new()));

        let service = Service::new(app_router(state_with(customers, auth), false));

        let res = TestClient::get("http://example.com/customers")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_token_routes_skip_manager_auth() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_check_manager_credential().never();
        auth.expect_issue_customer_token()
            .once()
            .return_once(|_, _| Ok("ab".repeat(256)));

        let service = Service::new(app_router(
            state_with(MockCustomersService::new(), auth),
            true,
        ));

        let res = TestClient::post("http://example.com/customers/token")
            .json(&json!({ "login": "555", "password": "secret" }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_active_is_not_read_as_an_id() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers.expect_get_customer().never();
        customers
            .expect_list_active_customers()
            .once()
            .return_once(|| Ok(Vec::new()));

        let service = Service::new(app_router(
            state_with(customers, MockAuthService::new()),
            false,
        ));

        let res = TestClient::get("http://example.com/customers/active")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
