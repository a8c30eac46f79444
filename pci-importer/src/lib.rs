//! pci-importer library - HTTP front-end of the road PCI spreadsheet validator
//!
//! `POST /upload_excel/` takes a multipart spreadsheet upload and answers with
//! the validated rows or the reasons they were refused.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use pci_importer_lib::ValidationPolicy;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod config;
pub mod error;

pub use config::ServerConfig;
pub use error::ApiError;

/// Application state shared across HTTP handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Policy applied to every upload
    pub policy: ValidationPolicy,
    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(policy: ValidationPolicy, max_upload_bytes: usize) -> Self {
        Self {
            policy,
            max_upload_bytes,
        }
    }
}

impl From<&ServerConfig> for AppState {
    fn from(config: &ServerConfig) -> Self {
        AppState::new(config.policy, config.max_upload_bytes)
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes;

    Router::new()
        .route("/health", get(api::health))
        .route("/upload_excel/", post(api::upload_excel))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
