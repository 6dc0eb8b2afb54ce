//! Unblock Customer Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use customers_app::domain::customers::records::CustomerId;

use crate::{
    customers::{errors::into_status_error, models::CustomerResponse},
    extensions::*,
};

/// Unblock Customer Handler
///
/// Marks a customer active again.
#[endpoint(
    tags("customers"),
    summary = "Unblock Customer",
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
        .set_customer_active(CustomerId::from_i64(id.into_inner()), true)
        .await
        .map_err(into_status_error)?;

    Ok(Json(customer.into()))
}
