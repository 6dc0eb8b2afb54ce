//! Token Models

use std::fmt;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Issue Token Request
///
/// `login` is the customer's phone number.
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct IssueTokenRequest {
    pub login: String,
    pub password: String,
}

impl fmt::Debug for IssueTokenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssueTokenRequest")
            .field("login", &self.login)
            .field("password", &"**redacted**")
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TokenResponse {
    /// 512 lowercase hex characters, valid for one hour
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ValidateTokenRequest {
    pub token: String,
}

/// Validate Token Response
///
/// `status` is `ok` with the owning `customerId`, or `fail` with a `reason`.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidateTokenResponse {
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidateTokenResponse {
    pub(crate) fn ok(customer_id: i64) -> Self {
        Self {
            status: "ok".to_string(),
            customer_id: Some(customer_id),
            reason: None,
        }
    }

    pub(crate) fn fail(reason: &str) -> Self {
        Self {
            status: "fail".to_string(),
            customer_id: None,
            reason: Some(reason.to_string()),
        }
    }
}
