//! Customer Index Handler

use salvo::prelude::*;

use crate::{
    customers::{errors::into_status_error, models::CustomerResponse},
    extensions::*,
};

/// Customer Index Handler
///
/// Returns every customer; an empty list when there are none.
#[endpoint(
    tags("customers"),
    summary = "List Customers",
    security(("basic_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CustomerResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let customers = state
        .customers
        .list_customers()
        .await
        .map_err(into_status_error)?;

    Ok(Json(customers.into_iter().map(Into::into).collect()))
}
