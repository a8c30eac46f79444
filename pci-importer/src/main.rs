//! pci-importer - road PCI spreadsheet validation service
//!
//! Run with: `cargo run --bin pci-importer -- --port 8000`
//!
//! Every flag can also be set from the environment:
//! - `PCI_HOST` - Host to bind to (default: 0.0.0.0)
//! - `PCI_PORT` - Port to listen on (default: 8000)
//! - `PCI_VALIDATION_POLICY` - `strict` or `lenient` (default: strict)
//! - `PCI_MAX_UPLOAD_BYTES` - Request body limit (default: 10 MiB)

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pci_importer::{AppState, ServerConfig, build_router};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "pci_importer=info,pci_importer_lib=info,tower_http=info".into()
            }),
        )
        .init();

    let config = ServerConfig::parse();
    let addr = config.socket_addr();

    info!(
        "Starting pci-importer v{} (policy: {}, max upload: {} bytes)",
        env!("CARGO_PKG_VERSION"),
        config.policy,
        config.max_upload_bytes
    );

    let app = build_router(AppState::from(&config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("pci-importer listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
