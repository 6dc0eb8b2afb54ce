//! Auth Config

use clap::{ArgAction, Args};

/// Manager authentication settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Require manager basic auth on the customer administration routes.
    #[arg(
        long,
        env = "MANAGER_AUTH_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub manager_auth_enabled: bool,
}
