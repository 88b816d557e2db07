//! Access Counter - Record Accesses in the Shared Store
//!
//! Holds no counter state of its own. Each access is one atomic increment
//! in the store, and the store's answer is returned as-is.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{AccessCount, CounterKey};
use crate::error::ServiceError;
use crate::ports::CounterStore;

/// Access counting on top of any `CounterStore`.
pub struct AccessCounter {
    /// Backing store, shared with nothing else.
    store: Arc<dyn CounterStore>,
    /// Counter incremented on every access.
    key: CounterKey,
}

impl AccessCounter {
    pub fn new(store: Arc<dyn CounterStore>, key: CounterKey) -> Self {
        Self { store, key }
    }

    /// Increment the access counter once and return the new total.
    pub async fn record_access(&self) -> Result<AccessCount, ServiceError> {
        self.store
            .increment(&self.key)
            .await
            .map_err(ServiceError::StoreUnavailable)
    }

    /// One round-trip to the store.
    pub async fn check_connectivity(&self) -> Result<(), ServiceError> {
        self.store
            .ping()
            .await
            .map_err(ServiceError::StoreUnreachable)
    }

    /// Startup probe: logs the outcome and never fails.
    ///
    /// Returns whether the store answered, for callers that care.
    pub async fn probe_on_startup(&self) -> bool {
        match self.check_connectivity().await {
            Ok(()) => {
                info!("Connected to store");
                true
            }
            Err(e) => {
                warn!(error = %e, "Could not connect to store, serving anyway");
                false
            }
        }
    }
}
