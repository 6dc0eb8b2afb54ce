//! Validate Customer Token Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use customers_app::auth::AuthServiceError;

use crate::{
    extensions::*,
    observability::{AuthRejection, record_auth_rejection},
    tokens::{
        errors::into_status_error,
        models::{ValidateTokenRequest, ValidateTokenResponse},
    },
};

/// Validate Customer Token Handler
///
/// Resolves a bearer token to its customer. Unknown and expired tokens are
/// answered with a `fail` envelope rather than an error body.
#[endpoint(
    tags("tokens"),
    summary = "Validate Customer Token",
    responses(
        (status_code = StatusCode::OK, description = "Token valid"),
        (status_code = StatusCode::NOT_FOUND, description = "Token not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Token expired or bad request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ValidateTokenRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ValidateTokenResponse>, StatusError> {
    let state = depot.state_or_500()?;

    match state.auth.validate_customer_token(&json.token).await {
        Ok(customer_id) => Ok(Json(ValidateTokenResponse::ok(customer_id.into_i64()))),
        Err(AuthServiceError::NoSuchUser) => {
            record_auth_rejection(AuthRejection::UnknownToken);

            res.status_code(StatusCode::NOT_FOUND);

            Ok(Json(ValidateTokenResponse::fail("not found")))
        }
        Err(AuthServiceError::TokenExpired) => {
            record_auth_rejection(AuthRejection::ExpiredToken);

            res.status_code(StatusCode::BAD_REQUEST);

            Ok(Json(ValidateTokenResponse::fail("expired")))
        }
        Err(error) => Err(into_status_error(error)),
    }
}
