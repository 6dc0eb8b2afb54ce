//! Block Customer Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use customers_app::domain::customers::records::CustomerId;

use crate::{
    customers::{errors::into_status_error, models::CustomerResponse},
    extensions::*,
};

/// Block Customer Handler
///
/// Marks a customer inactive so it drops out of the active list.
#[endpoint(
    tags("customers"),
    summary = "Block Customer",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Customer updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<CustomerResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let customer = state
        .customers
        .set_customer_active(CustomerId::from_i64(id.into_inner()), false)
        .await
        .map_err(into_status_error)?;

    Ok(Json(customer.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use customers_app::domain::customers::{CustomersServiceError, MockCustomersService};

    use crate::test_helpers::{customers_service, make_customer};

    use super::*;

    fn make_service(repo: MockCustomersService) -> Service {
        customers_service(repo, Router::with_path("customers/{id}/block").post(handler))
    }

    #[tokio::test]
    async fn test_block_deactivates_customer() -> TestResult {
        let mut repo = MockCustomersService::new();

        repo.expect_set_customer_active()
            .once()
            .withf(|id, active| *id == CustomerId::from_i64(2) && !*active)
            .return_once(|_, _| {
                let mut customer = make_customer(2);

                customer.active = false;

                Ok(customer)
            });

        let body: CustomerResponse = TestClient::post("http://example.com/customers/2/block")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert!(!body.active, "customer should be blocked");

        Ok(())
    }

    #[tokio::test]
    async fn test_block_missing_customer_returns_404() -> TestResult {
        let mut repo = MockCustomersService::new();

        repo.expect_set_customer_active()
            .once()
            .return_once(|_, _| Err(CustomersServiceError::NotFound));

        let res = TestClient::post("http://example.com/customers/2/block")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
