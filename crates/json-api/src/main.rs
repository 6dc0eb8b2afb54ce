//! Customers JSON API Server

use std::process;

use salvo::{
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
};
use tracing::{error, info};

use customers_app::context::AppContext;

use crate::{config::ServerConfig, observability::Observability, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod config;
mod customers;
mod extensions;
mod healthcheck;
mod observability;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod tokens;

/// Customers JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        #[expect(clippy::exit, reason = "no server to shut down yet")]
        process::exit(1);
    });

    if let Err(source) = Observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("Observability error: {source}");
        }

        #[expect(clippy::exit, reason = "no server to shut down yet")]
        process::exit(1);
    }

    let app = match AppContext::from_database_url(
        &config.database.database_url,
        &config.database.pool_settings(),
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            #[expect(clippy::exit, reason = "no server to shut down yet")]
            process::exit(1);
        }
    };

    let db = app.db.clone();

    if !config.auth.manager_auth_enabled {
        info!("manager basic auth is disabled for customer routes");
    }

    let router = router::app_router(
        State::from_app_context(&app),
        config.auth.manager_auth_enabled,
    );

    let doc = OpenApi::new("Customers API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "basic_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let server = Server::new(listener);

    let handle = server.handle();
    let grace_period = config.server.shutdown_grace_period();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, grace_period).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;

    db.close().await;

    info!("server stopped");
}
