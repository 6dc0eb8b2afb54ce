//! Token Errors

use salvo::http::StatusError;
use tracing::error;

use customers_app::auth::AuthServiceError;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::NoSuchUser => StatusError::not_found().brief("Customer not found"),
        AuthServiceError::InvalidCredential => {
            StatusError::unauthorized().brief("Invalid credentials")
        }
        AuthServiceError::TokenExpired => StatusError::bad_request().brief("Token expired"),
        AuthServiceError::AlreadyExists => {
            error!("unexpected manager conflict while handling a customer token");

            StatusError::internal_server_error()
        }
        AuthServiceError::Sql(source) => {
            error!("customer token storage error: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Password(source) => {
            error!("failed to verify customer password: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Token(source) => {
            error!("failed to generate customer token: {source}");

            StatusError::internal_server_error()
        }
    }
}
