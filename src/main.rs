//! Application entry point.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use secrecy::SecretString;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use wallet_tracker_api::api::create_router;
use wallet_tracker_api::app::AppState;
use wallet_tracker_api::domain::ConfigError;
use wallet_tracker_api::infra::blockchain::DEFAULT_NETWORK;
use wallet_tracker_api::infra::{AlchemyClient, AlchemyConfig};

/// Application configuration
struct Config {
    alchemy_api_key: SecretString,
    alchemy_network: String,
    /// Full provider endpoint override (optional - derived from network and key if not set)
    alchemy_base_url: Option<String>,
    provider_timeout: Duration,
    /// Cap on the transactions `limit` parameter (optional - no cap if not set)
    max_transactions_limit: Option<u32>,
    host: String,
    port: u16,
}

impl Config {
    fn from_env() -> Result<Self> {
        let alchemy_api_key = env::var("ALCHEMY_API_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::MissingEnv("ALCHEMY_API_KEY".to_string()))?;
        let alchemy_network =
            env::var("ALCHEMY_NETWORK").unwrap_or_else(|_| DEFAULT_NETWORK.to_string());
        let alchemy_base_url = env::var("ALCHEMY_BASE_URL")
            .ok()
            .filter(|s| !s.is_empty());
        let provider_timeout_secs = env::var("PROVIDER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);
        let max_transactions_limit = env::var("MAX_TRANSACTIONS_LIMIT")
            .ok()
            .map(|v| {
                v.parse::<u32>()
                    .with_context(|| format!("MAX_TRANSACTIONS_LIMIT is not a number: {}", v))
            })
            .transpose()?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        Ok(Self {
            alchemy_api_key: SecretString::from(alchemy_api_key),
            alchemy_network,
            alchemy_base_url,
            provider_timeout: Duration::from_secs(provider_timeout_secs),
            max_transactions_limit,
            host,
            port,
        })
    }

    fn alchemy_config(&self) -> AlchemyConfig {
        let config = AlchemyConfig::new(self.alchemy_network.clone(), self.alchemy_api_key.clone())
            .with_timeout(self.provider_timeout);
        match &self.alchemy_base_url {
            Some(url) => config.with_base_url(url.clone()),
            None => config,
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    info!("Wallet Tracker API v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    let provider = AlchemyClient::new(config.alchemy_config())
        .context("Failed to create Alchemy client")?;
    info!(network = %config.alchemy_network, "Alchemy provider initialized");

    match config.max_transactions_limit {
        Some(max) => info!("Transactions limit capped at {}", max),
        None => info!("Transactions limit uncapped"),
    }

    let app_state = Arc::new(AppState::with_max_limit(
        Arc::new(provider),
        config.max_transactions_limit,
    ));
    let router = create_router(app_state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
