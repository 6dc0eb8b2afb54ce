//! Customer Errors

use salvo::http::StatusError;
use tracing::error;

use customers_app::domain::customers::CustomersServiceError;

pub(crate) fn into_status_error(error: CustomersServiceError) -> StatusError {
    match error {
        CustomersServiceError::NotFound => StatusError::not_found().brief("Customer not found"),
        CustomersServiceError::AlreadyExists => {
            StatusError::conflict().brief("Customer with this phone already exists")
        }
        CustomersServiceError::Password(source) => {
            error!("failed to process customer password: {source}");

            StatusError::internal_server_error()
        }
        CustomersServiceError::Sql(source) => {
            error!("customer storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
