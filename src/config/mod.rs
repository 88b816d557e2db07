//! Configuration Module - Environment-based Service Configuration
//!
//! The service has no config file and no flags. The store address and the
//! fallback credential come from environment variables; everything else is
//! fixed. Lookups go through an injectable function so tests never have to
//! mutate the process environment.

pub mod loader;

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::CounterKey;

/// Environment variable holding the store address.
pub const REDIS_ADDR_VAR: &str = "REDIS_ADDR";

/// Environment variable consulted when the secret file is missing.
pub const REDIS_PASSWORD_VAR: &str = "REDIS_PASSWORD";

/// Where the Vault agent sidecar renders the store password.
pub const VAULT_SECRET_PATH: &str = "/vault/secrets/redis-config";

/// Store address used when `REDIS_ADDR` is unset or empty.
pub const DEFAULT_REDIS_ADDR: &str = "localhost:6379";

/// Fixed HTTP listen port.
pub const LISTEN_PORT: u16 = 8080;

/// Tracing filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Top-level service configuration.
///
/// Built once at startup and handed to the components that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Store connection settings.
  pub store: StoreConfig,
  /// Credential fallback chain settings.
  pub secrets: SecretsConfig,
  /// HTTP listener settings.
  pub http: HttpConfig,
}

/// Key-value store settings.
#[derive(Debug, Clone)]
pub struct StoreConfig {
  /// `host:port` of the store.
  pub address: String,
  /// Logical database index. Always the default database.
  pub database: i64,
  /// Counter incremented by `/data`.
  pub counter_key: CounterKey,
}

/// Credential sources, in precedence order.
#[derive(Debug, Clone)]
pub struct SecretsConfig {
  /// Injected secret file, tried first.
  pub file_path: PathBuf,
  /// Environment variable tried second.
  pub env_var: String,
}

/// HTTP listener settings.
#[derive(Debug, Clone)]
pub struct HttpConfig {
  /// Listen port on all interfaces.
  pub port: u16,
}

impl HttpConfig {
  pub fn listen_addr(&self) -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], self.port))
  }
}

impl AppConfig {
  /// Build configuration from an arbitrary variable lookup.
  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let address = lookup(REDIS_ADDR_VAR)
      .filter(|addr| !addr.is_empty())
      .unwrap_or_else(|| DEFAULT_REDIS_ADDR.to_string());

    Self {
      store: StoreConfig {
        address,
        database: 0,
        counter_key: CounterKey::default(),
      },
      secrets: SecretsConfig {
        file_path: PathBuf::from(VAULT_SECRET_PATH),
        env_var: REDIS_PASSWORD_VAR.to_string(),
      },
      http: HttpConfig { port: LISTEN_PORT },
    }
  }
}

impl Default for AppConfig {
  fn default() -> Self {
    Self::from_lookup(|_| None)
  }
}
