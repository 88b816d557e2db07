//! Configuration Loader - Process Environment
//!
//! Reads the service configuration from the real process environment.
//! Loading never fails: every setting has a default.

use tracing::info;

use super::AppConfig;

/// Load configuration from the process environment.
pub fn load_config() -> AppConfig {
  let config = AppConfig::from_lookup(|key| std::env::var(key).ok());

  info!(
    store_address = %config.store.address,
    database = config.store.database,
    counter = %config.store.counter_key,
    listen = %config.http.listen_addr(),
    "Configuration loaded"
  );

  config
}
