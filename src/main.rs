//! Ad Service
//!
//! Minimal HTTP API for ad records:
//! - Create, read, patch, delete and list over `/ads`
//! - SQLite datastore with one session per request
//! - Health probes under `/health`

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};

use ad_store::{AdStore, StoreConfig};
use api::{router, AppState};
use telemetry::{health, init_tracing_from_env};

/// Application configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,

    #[serde(default)]
    database: StoreConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database: StoreConfig::default(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing_from_env();

    info!("Starting Ad Service v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;

    // Open the process-wide pool and make sure the table exists
    let store = AdStore::connect(config.database.clone())
        .await
        .context("Failed to open datastore")?;

    ad_store::health::init_schema(&store)
        .await
        .context("Failed to initialize datastore schema")?;

    let healthy = ad_store::health::check_connection(&store).await;
    health().database.record(healthy);
    if healthy {
        info!("Datastore connection: healthy");
    } else {
        error!("Datastore connection: unhealthy");
    }

    let app = router(AppState::new(store.clone()));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid server address")?;

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error");

    info!("Shutting down...");
    store.close().await;

    served?;
    info!("Shutdown complete");
    Ok(())
}

/// Load configuration from defaults, `config/default.toml`, and environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        .add_source(config::Config::try_from(&Config::default())?)
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("ADS")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // Single-underscore names are easier to set than the `__` nested form
    if let Ok(host) = std::env::var("ADS_HOST") {
        config.host = host;
    }
    if let Ok(port) = std::env::var("ADS_PORT") {
        config.port = port.parse().context("ADS_PORT must be a port number")?;
    }
    if let Ok(url) = std::env::var("ADS_DATABASE_URL") {
        config.database.url = url;
    }

    Ok(config)
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received terminate signal");
        }
    }
}
