//! HTTP Adapters - axum Router, Handlers and Server
//!
//! Two routes:
//! - `/data`    : increment the access counter, render the new total
//! - `/healthz` : liveness, independent of store health

pub mod handlers;
pub mod server;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::usecases::AccessCounter;

pub use server::HttpServer;

/// State injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub counter: Arc<AccessCounter>,
}

impl AppState {
    pub fn new(counter: Arc<AccessCounter>) -> Self {
        Self { counter }
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/data", get(handlers::data))
        .route("/healthz", get(handlers::healthz))
        .with_state(state)
}
