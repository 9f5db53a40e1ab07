//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, service wiring, and the Axum
//! server lifecycle.

use crate::application::services::{AuthService, DomainService, SuggestionService, WizardService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgCustomerRepository, PgRegistrationRepository, PgSaasServiceRepository, PgTldRepository,
    connect_pool,
};
use crate::infrastructure::registrar::InwxRegistrarProvider;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Registrar client provider
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Registrar HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: &Config) -> Result<()> {
    let pool = connect_pool(config)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    let state = build_state(config, pool)?;
    let app = app_router(state, &config.cors_origins);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wires repositories, the registrar provider and services into [`AppState`].
///
/// # Errors
///
/// Returns an error if the registrar HTTP client cannot be built.
pub fn build_state(config: &Config, pool: PgPool) -> Result<AppState> {
    let pool = Arc::new(pool);
    let saas_service_repository = Arc::new(PgSaasServiceRepository::new(pool.clone()));
    let customer_repository = Arc::new(PgCustomerRepository::new(pool.clone()));
    let tld_repository = Arc::new(PgTldRepository::new(pool.clone()));
    let registration_repository = Arc::new(PgRegistrationRepository::new(pool));

    let registrar_provider = Arc::new(
        InwxRegistrarProvider::new(config.registrar_settings())
            .context("Failed to build registrar client")?,
    );

    Ok(AppState {
        suggestion_service: Arc::new(SuggestionService::new(tld_repository.clone())),
        domain_service: Arc::new(DomainService::new(
            saas_service_repository.clone(),
            customer_repository.clone(),
            tld_repository,
            registration_repository,
            registrar_provider,
        )),
        wizard_service: Arc::new(WizardService::new(
            saas_service_repository,
            customer_repository,
        )),
        auth_service: Arc::new(AuthService::new(
            &config.client_token,
            &config.default_tenant_key,
            &config.token_tenants,
        )),
        environment: config.environment(),
    })
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received, draining connections");
}
