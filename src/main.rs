//! Access Counter — Entry Point
//!
//! Wiring sequence:
//! 1. Init tracing (JSON structured logging)
//! 2. Load config from the environment (REDIS_ADDR)
//! 3. Resolve the store credential (Vault file → REDIS_PASSWORD → empty)
//! 4. Create the Redis counter store and the AccessCounter use case
//! 5. Best-effort connectivity check (warning only)
//! 6. Bind :8080 — the only step allowed to abort startup
//! 7. Serve /data + /healthz until SIGINT/SIGTERM, then drain and exit

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};

use access_counter::adapters::http::{AppState, HttpServer};
use access_counter::adapters::secrets::SecretResolver;
use access_counter::adapters::store::RedisCounterStore;
use access_counter::config::{self, DEFAULT_LOG_LEVEL};
use access_counter::usecases::AccessCounter;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .json()
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting access counter");

    // ── 2. Load configuration ───────────────────────────────
    let config = config::loader::load_config();

    // ── 3. Resolve store credential (soft failure) ──────────
    let secret = SecretResolver::from_config(&config).resolve_or_empty();

    // ── 4. Store adapter + use case ─────────────────────────
    let store = Arc::new(RedisCounterStore::new(&config.store, secret.credential));
    let counter = Arc::new(AccessCounter::new(
        store,
        config.store.counter_key.clone(),
    ));

    // ── 5. Startup connectivity check (never fatal) ─────────
    counter.probe_on_startup().await;

    // ── 6. Bind listener ────────────────────────────────────
    let server = HttpServer::new(AppState::new(counter), config.http.listen_addr());
    let bound = match server.bind().await {
        Ok(bound) => bound,
        Err(e) => {
            error!(error = %e, "Server failed to start");
            return Err(e).context("Failed to bind HTTP listener");
        }
    };

    // ── 7. Serve until shutdown signal ──────────────────────
    bound
        .serve(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Shutdown complete");
    Ok(())
}

/// Resolve on SIGINT, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("SIGINT received, initiating graceful shutdown"),
        _ = terminate => info!("SIGTERM received, initiating graceful shutdown"),
    }
}
