//! # homegated — homegate daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the ownership store, command publisher, and information
//!   provider adapters
//! - Construct the gateway service, injecting adapters via port traits
//! - Build the axum router, bind to a TCP port, and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use homegate_adapter_http_axum::state::AppState;
use homegate_adapter_mqtt::MqttCommandPublisher;
use homegate_adapter_storage_sqlite_sqlx::SqliteUserRepository;
use homegate_adapter_virtual::StaticDeviceInformation;
use homegate_app::services::gateway_service::GatewayService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Ownership store
    let db = homegate_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database.url.clone(),
    }
    .build()
    .await?;
    let user_repo = SqliteUserRepository::new(db.pool().clone());

    // Command publisher
    let publisher = MqttCommandPublisher::connect(&config.mqtt);

    // Device information provider
    let information = StaticDeviceInformation;

    // Gateway service + HTTP
    let gateway = GatewayService::new(user_repo.clone(), publisher, information);
    let state = AppState::new(gateway, user_repo);
    let app = homegate_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "homegated listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
