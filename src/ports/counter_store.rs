//! Counter Store Port - Atomic Counter Interface
//!
//! The store owns the counter value. Implementations issue exactly one
//! remote call per method invocation and never retry.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::domain::{AccessCount, CounterKey};

/// Trait for key-value stores that provide atomic counters.
///
/// Must be safe for concurrent use: handlers share one instance.
#[async_trait]
pub trait CounterStore: Send + Sync + 'static {
  /// Lightweight round-trip used for the startup connectivity check.
  async fn ping(&self) -> Result<(), StoreError>;

  /// Atomically increment `key` by one and return the new value.
  ///
  /// A missing key is treated as zero by the store.
  async fn increment(&self, key: &CounterKey) -> Result<AccessCount, StoreError>;
}
