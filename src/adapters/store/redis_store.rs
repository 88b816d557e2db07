//! Redis Counter Store - Concrete Adapter for the CounterStore Port
//!
//! Talks to Redis over a tokio multiplexed connection. The connection is
//! opened on first use and cached; a failed call drops it so the next call
//! starts from a fresh connection. Every call is a single attempt: no retry
//! loop, no backoff.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, AsyncConnectionConfig, Client, ConnectionInfo, IntoConnectionInfo};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::config::StoreConfig;
use crate::domain::{AccessCount, CounterKey, Credential};
use crate::error::StoreError;
use crate::ports::CounterStore;

/// Upper bound on opening a connection to the store, setup included.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on waiting for the reply to a single command.
pub const RESPONSE_TIMEOUT: Duration = Duration::from_secs(3);

/// Redis-backed atomic counter store.
pub struct RedisCounterStore {
    /// `host:port` of the Redis server.
    address: String,
    /// Password sent with AUTH; empty means no AUTH.
    credential: Credential,
    /// Logical database index.
    database: i64,
    /// Bound on connection setup.
    connect_timeout: Duration,
    /// Bound on each command round-trip.
    response_timeout: Duration,
    /// Lazily opened, shared connection. Never locked across I/O.
    conn: Mutex<Option<MultiplexedConnection>>,
}

impl RedisCounterStore {
    /// Create a store handle. Does not touch the network.
    pub fn new(config: &StoreConfig, credential: Credential) -> Self {
        Self {
            address: config.address.clone(),
            credential,
            database: config.database,
            connect_timeout: CONNECT_TIMEOUT,
            response_timeout: RESPONSE_TIMEOUT,
            conn: Mutex::new(None),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }

    /// Connection parameters derived from address, database and credential.
    pub fn connection_info(&self) -> Result<ConnectionInfo, StoreError> {
        let url = format!("redis://{}/{}", self.address, self.database);
        let mut info = url
            .as_str()
            .into_connection_info()
            .map_err(|source| StoreError::InvalidAddress {
                addr: self.address.clone(),
                source,
            })?;

        info.redis.password = if self.credential.is_empty() {
            None
        } else {
            Some(self.credential.expose().to_string())
        };

        Ok(info)
    }

    /// Return the cached connection, opening one if needed.
    ///
    /// Concurrent callers that all miss the cache each dial on their own;
    /// the first one back fills the slot and the others use it.
    async fn connection(&self) -> Result<MultiplexedConnection, StoreError> {
        if let Some(conn) = self.conn.lock().await.as_ref() {
            return Ok(conn.clone());
        }

        let opened = self.open().await?;

        let mut guard = self.conn.lock().await;
        if let Some(existing) = guard.as_ref() {
            return Ok(existing.clone());
        }
        debug!(address = %self.address, "Opened store connection");
        *guard = Some(opened.clone());
        Ok(opened)
    }

    /// Dial and set up a fresh connection within the connect timeout.
    async fn open(&self) -> Result<MultiplexedConnection, StoreError> {
        let client = Client::open(self.connection_info()?)?;
        let config = AsyncConnectionConfig::new().set_response_timeout(self.response_timeout);

        let conn = tokio::time::timeout(
            self.connect_timeout,
            client.get_multiplexed_async_connection_with_config(&config),
        )
        .await
        .map_err(|_| StoreError::ConnectTimeout {
            addr: self.address.clone(),
            timeout: self.connect_timeout,
        })??;

        Ok(conn)
    }

    /// Forget the cached connection after a failed call.
    async fn reset(&self) {
        *self.conn.lock().await = None;
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    #[instrument(skip(self), fields(address = %self.address))]
    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let result: redis::RedisResult<()> = redis::cmd("PING").query_async(&mut conn).await;
        if let Err(e) = result {
            self.reset().await;
            return Err(e.into());
        }
        Ok(())
    }

    #[instrument(skip(self), fields(address = %self.address, key = %key))]
    async fn increment(&self, key: &CounterKey) -> Result<AccessCount, StoreError> {
        let mut conn = self.connection().await?;
        let result: redis::RedisResult<i64> = conn.incr(key.as_str(), 1).await;
        match result {
            Ok(value) => Ok(AccessCount::new(value)),
            Err(e) => {
                self.reset().await;
                Err(e.into())
            }
        }
    }
}
