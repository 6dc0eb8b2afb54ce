//! Readiness check

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::extensions::*;

/// Healthcheck response
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `ok` when the service can serve requests
    pub status: String,

    /// `ok` or `unreachable`
    pub database: String,
}

/// Healthcheck handler
///
/// Answers 503 while the database cannot be reached.
#[endpoint(
    tags("health"),
    summary = "Health check endpoint",
    responses(
        (status_code = StatusCode::OK, description = "Service ready"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Database unreachable"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.state_or_500()?;

    if let Err(source) = state.database.ping().await {
        warn!("database ping failed: {source}");

        res.status_code(StatusCode::SERVICE_UNAVAILABLE);

        return Ok(Json(HealthResponse {
            status: "unavailable".to_string(),
            database: "unreachable".to_string(),
        }));
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        database: "ok".to_string(),
    }))
}
