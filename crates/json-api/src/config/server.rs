//! Server Config

use std::time::Duration;

use clap::Args;

/// Listener address and shutdown behaviour.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "9999")]
    pub port: u16,

    /// Seconds in-flight requests get to finish after a shutdown signal
    #[arg(long, env = "SHUTDOWN_GRACE_SECONDS", default_value_t = 30_u64)]
    pub shutdown_grace_seconds: u64,
}

impl ServerRuntimeConfig {
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[must_use]
    pub fn shutdown_grace_period(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_seconds)
    }
}
