//! HTTP Server - Listener Lifecycle
//!
//! Binding is split from serving so that a bind failure surfaces as its
//! own error before any request is accepted. Serving ends when the
//! shutdown future resolves; in-flight requests are drained first.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::error::ServiceError;

use super::{router, AppState};

/// axum server for the access counter routes.
pub struct HttpServer {
    /// Shared handler state.
    state: AppState,
    /// Address to bind.
    addr: SocketAddr,
}

/// A server whose listener is already bound.
pub struct BoundServer {
    state: AppState,
    listener: TcpListener,
}

impl HttpServer {
    pub fn new(state: AppState, addr: SocketAddr) -> Self {
        Self { state, addr }
    }

    /// Bind the listener. The only fatal step of startup.
    #[instrument(skip(self), fields(addr = %self.addr))]
    pub async fn bind(self) -> Result<BoundServer, ServiceError> {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|source| ServiceError::ListenerBind {
                addr: self.addr,
                source,
            })?;

        Ok(BoundServer {
            state: self.state,
            listener,
        })
    }
}

impl BoundServer {
    /// Actual bound address (useful when binding port 0).
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until `shutdown` resolves.
    pub async fn serve<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.listener.local_addr()?;
        info!(address = %addr, "Server listening");

        axum::serve(self.listener, router(self.state))
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server stopped");
        Ok(())
    }
}
