//! Delete Customer Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use customers_app::domain::customers::records::CustomerId;

use crate::{
    customers::{errors::into_status_error, models::CustomerResponse},
    extensions::*,
};

/// Delete Customer Handler
///
/// Responds with the customer as it was just before removal.
#[endpoint(
    tags("customers"),
    summary = "Delete Customer",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Customer deleted"),
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

    let removed = state
        .customers
        .remove_customer(CustomerId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    info!(customer_id = %removed.id, "removed customer");

    Ok(Json(removed.into()))
}
