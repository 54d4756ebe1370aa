//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, the authorization client and the
//! Axum server lifecycle.

use crate::api::middleware::basic_auth::BasicCredentials;
use crate::application::services::UrlService;
use crate::config::Config;
use crate::infrastructure::auth::{GrpcAdminTransport, RetryingAuthClient};
use crate::infrastructure::persistence::{MIGRATOR, SqliteUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - Lazily-connecting gRPC authorization client
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The authorization service address is not a valid URI
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    let transport =
        GrpcAdminTransport::connect_lazy(&config.auth_client_address, config.auth_client_timeout())
            .context("Invalid AUTH_CLIENT_ADDRESS")?;
    let authorizer = RetryingAuthClient::new(transport, config.retry_policy());
    tracing::info!(
        address = %config.auth_client_address,
        attempts = config.auth_client_retries,
        "Authorization client configured"
    );

    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    let url_service = UrlService::new(
        repository,
        Arc::new(RandomAliasGenerator),
        config.alias_generation_attempts,
    );

    let credentials = BasicCredentials::new(
        config.http_user.clone(),
        config.http_password.clone(),
        config.http_user_id,
    );

    let state = AppState::new(Arc::new(url_service), Arc::new(authorizer), credentials);

    let app = app_router(state, config.request_timeout());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Opens the SQLite pool, creating the database file if needed.
async fn connect_pool(config: &Config) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(options)
        .await
        .context("Failed to connect to database")
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
