//! Secret Adapters - Credential Fallback Chain
//!
//! Implements the `SecretSource` port for the Vault-injected file and the
//! fallback environment variable, and walks them in order.

pub mod env;
pub mod file;
pub mod resolver;

pub use env::EnvSecretSource;
pub use file::FileSecretSource;
pub use resolver::{ResolvedSecret, SecretResolver};
