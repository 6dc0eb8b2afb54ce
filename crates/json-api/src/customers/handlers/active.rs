//! Active Customers Handler

use salvo::prelude::*;

use crate::{
    customers::{errors::into_status_error, models::CustomerResponse},
    extensions::*,
};

/// Active Customers Handler
///
/// Returns customers that are not blocked.
#[endpoint(
    tags("customers"),
    summary = "List Active Customers",
    security(("basic_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CustomerResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let customers = state
        .customers
        .list_active_customers()
        .await
        .map_err(into_status_error)?;

    Ok(Json(customers.into_iter().map(Into::into).collect()))
}
