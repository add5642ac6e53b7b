//! Card Cost API server entry point.

use std::sync::Arc;

use card_cost_api::api::routes::create_router;
use card_cost_api::infrastructure::{
    AppConfig, AppDependencies, HttpBinLookupClient, InMemoryCardCostRepository,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,card_cost_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Card Cost API...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    };

    tracing::info!(
        host = %config.app_host,
        port = config.app_port,
        binlist_url = %config.binlist_url,
        fallback_country = %config.fallback_country,
        "Configuration loaded"
    );

    let bind_address = format!("{}:{}", config.app_host, config.app_port);

    let repository = Arc::new(InMemoryCardCostRepository::new());
    let bin_lookup = Arc::new(HttpBinLookupClient::new(config.binlist_url.clone()));

    let deps = AppDependencies::new(config, repository, bin_lookup);

    let app = create_router(deps).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&bind_address).await.unwrap();
    tracing::info!("Card Cost API started on http://{bind_address}");
    tracing::info!("Available endpoints:");
    tracing::info!("  POST   /payment-card-cost - Resolve a card number to a cost");
    tracing::info!("  POST   /card-costs        - Create a card cost");
    tracing::info!("  GET    /card-costs        - List card costs");
    tracing::info!("  GET    /card-costs/:id    - Get a card cost");
    tracing::info!("  PUT    /card-costs/:id    - Update a card cost");
    tracing::info!("  DELETE /card-costs/:id    - Delete a card cost");
    tracing::info!("  GET    /health            - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("Card Cost API stopped");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received");
}
