//! Observability setup and request logging middleware.

use thiserror::Error;

mod logging;
mod metrics;
mod request;
mod settings;

pub(crate) use metrics::{AuthRejection, metrics_handler, record_auth_rejection};
pub(crate) use request::request_logging;

use crate::config::ServerConfig;

/// Errors raised while initialising observability.
#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    /// Failed to initialise tracing subscriber.
    #[error("failed to initialise tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Process-wide logging and request metrics.
#[derive(Debug)]
pub(crate) struct Observability;

impl Observability {
    /// Install the global subscriber and apply runtime settings.
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        settings::apply_runtime_config(config);

        logging::init_subscriber(config)?;

        Ok(Self)
    }
}
