//! kodra-admin server entry point.
//!
//! Connects to PostgreSQL, builds the sibling-service clients and starts
//! the Axum HTTP server.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use kodra_admin::api;
use kodra_admin::app_state::AppState;
use kodra_admin::clients::Clients;
use kodra_admin::config::AdminConfig;
use kodra_admin::persistence::PostgresStore;
use kodra_admin::service::{AdminService, ReviewSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Load configuration
    let config = AdminConfig::from_env()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;
    tracing::info!(
        service = %config.service_name,
        addr = %config.listen_addr,
        pending_kyc_rule = %config.pending_kyc_rule,
        "starting admin service"
    );

    // Build data access and outbound clients
    let store = PostgresStore::connect(&config)
        .await
        .context("connecting to database")?;
    let http = reqwest::Client::builder()
        .build()
        .context("building HTTP client")?;
    let clients = Clients::new(&http, &config.services);

    // Build service layer
    let admin_service = Arc::new(AdminService::new(
        Arc::new(store),
        clients,
        ReviewSettings::from_config(&config),
    ));

    let app_state = AppState {
        admin_service,
        service_name: Arc::from(config.service_name.as_str()),
    };

    let app = api::build_app(app_state);

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
        )
    };

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Initializes the global subscriber. `LOG_FORMAT=json` selects JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
