//! Save Customer Handler

use salvo::{oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    customers::{
        errors::into_status_error,
        models::{CustomerRequest, CustomerResponse},
    },
    extensions::*,
};

/// Save Customer Handler
///
/// Creates a customer, or updates the name and phone of an existing one.
/// Responds with the stored state after the write.
#[endpoint(
    tags("customers"),
    summary = "Save Customer",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Customer saved"),
        (status_code = StatusCode::CONFLICT, description = "Phone already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CustomerRequest>,
    depot: &mut Depot,
) -> Result<Json<CustomerResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let customer = state
        .customers
        .save_customer(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    info!(customer_id = %customer.id, "saved customer");

    Ok(Json(customer.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use customers_app::domain::customers::{
        CustomersServiceError, MockCustomersService, data::CustomerUpsert, records::CustomerId,
    };

    use crate::test_helpers::{customers_service, make_customer};

    use super::*;

    fn make_service(repo: MockCustomersService) -> Service {
        customers_service(repo, Router::with_path("customers").post(handler))
    }

    #[tokio::test]
    async fn test_create_returns_stored_customer_without_password() -> TestResult {
        let mut repo = MockCustomersService::new();

        repo.expect_save_customer()
            .once()
            .withf(|upsert| {
                *upsert
                    == CustomerUpsert {
                        id: None,
                        name: "A".to_string(),
                        phone: "555".to_string(),
                        password: "secret".to_string(),
                    }
            })
            .return_once(|_| Ok(make_customer(1)));

        let mut res = TestClient::post("http://example.com/customers")
            .json(&json!({ "name": "A", "phone": "555", "password": "secret" }))
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["id"], 1);
        assert_eq!(body["active"], true);
        assert!(body.get("password").is_none(), "password must be omitted");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_forwards_the_id() -> TestResult {
        let mut repo = MockCustomersService::new();

        repo.expect_save_customer()
            .once()
            .withf(|upsert| upsert.id == Some(CustomerId::from_i64(5)) && upsert.name == "B")
            .return_once(|_| {
                let mut customer = make_customer(5);

                customer.name = "B".to_string();

                Ok(customer)
            });

        let body: CustomerResponse = TestClient::post("http://example.com/customers")
            .json(&json!({ "id": 5, "name": "B", "phone": "555" }))
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(body.id, 5);
        assert_eq!(body.name, "B");

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_phone_returns_409() -> TestResult {
        let mut repo = MockCustomersService::new();

        repo.expect_save_customer()
            .once()
            .return_once(|_| Err(CustomersServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/customers")
            .json(&json!({ "name": "A", "phone": "555", "password": "secret" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_body_returns_400() -> TestResult {
        let mut repo = MockCustomersService::new();

        repo.expect_save_customer().never();

        let res = TestClient::post("http://example.com/customers")
            .json(&json!({ "name": 42 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
