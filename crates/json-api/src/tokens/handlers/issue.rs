//! Issue Customer Token Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    tokens::{
        errors::into_status_error,
        models::{IssueTokenRequest, TokenResponse},
    },
};

/// Issue Customer Token Handler
///
/// Exchanges a customer's phone number and password for a bearer token.
#[endpoint(
    tags("tokens"),
    summary = "Issue Customer Token",
    responses(
        (status_code = StatusCode::OK, description = "Token issued"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid credentials"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<IssueTokenRequest>,
    depot: &mut Depot,
) -> Result<Json<TokenResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let request = json.into_inner();

    let token = state
        .auth
        .issue_customer_token(&request.login, &request.password)
        .await
        .map_err(into_status_error)?;

    Ok(Json(TokenResponse { token }))
}
