//! Error taxonomy for the access counter.
//!
//! Only `ServiceError::ListenerBind` is fatal. Everything else is logged and
//! either degraded (missing secret, unreachable store at startup) or turned
//! into a 500 at the handler boundary.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Body returned to clients whenever the store call fails.
pub const STORE_FAILURE_BODY: &str = "Error connecting to database";

/// No secret source produced a credential.
#[derive(Debug, thiserror::Error)]
#[error("no store credential found (checked: {})", .checked.join(", "))]
pub struct SecretUnavailable {
    /// Origins that were consulted, in order.
    pub checked: Vec<String>,
}

/// Failure talking to the key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The configured address cannot be turned into connection info.
    #[error("invalid store address {addr:?}: {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: redis::RedisError,
    },

    /// Opening the connection took longer than the connect timeout.
    #[error("connecting to store at {addr} timed out after {timeout:?}")]
    ConnectTimeout { addr: String, timeout: Duration },

    /// Network, auth or command failure reported by the client.
    #[error("store request failed: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Service-level failures, one per row of the error taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Startup connectivity check failed. Logged, never fatal.
    #[error("store unreachable at startup: {0}")]
    StoreUnreachable(#[source] StoreError),

    /// A request-time store call failed.
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[source] StoreError),

    /// The HTTP listener could not bind. Terminates the process.
    #[error("failed to bind listener on {addr}: {source}")]
    ListenerBind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        // Details stay in the log; clients only get the fixed body.
        error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, STORE_FAILURE_BODY).into_response()
    }
}
