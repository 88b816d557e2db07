//! Environment-variable secret source (local development path).

use std::env::VarError;
use std::sync::Arc;

use tracing::warn;

use crate::domain::SecretOrigin;
use crate::ports::SecretSource;

type Lookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads the credential verbatim from an environment variable.
///
/// A variable that is set but empty is treated as unset.
#[derive(Clone)]
pub struct EnvSecretSource {
    var: String,
    lookup: Lookup,
}

impl EnvSecretSource {
    /// Source backed by the real process environment.
    pub fn new(var: impl Into<String>) -> Self {
        Self::with_lookup(var, process_env)
    }

    /// Source backed by an arbitrary lookup, for tests and embedding.
    pub fn with_lookup<F>(var: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            var: var.into(),
            lookup: Arc::new(lookup),
        }
    }
}

/// Read `key` from the process environment.
///
/// A value that is not valid UTF-8 is dropped with a warning instead of
/// being silently treated as unset.
fn process_env(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            warn!(var = key, "Environment variable is not valid UTF-8, ignoring it");
            None
        }
    }
}

impl std::fmt::Debug for EnvSecretSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvSecretSource")
            .field("var", &self.var)
            .finish_non_exhaustive()
    }
}

impl SecretSource for EnvSecretSource {
    fn origin(&self) -> SecretOrigin {
        SecretOrigin::Environment
    }

    fn fetch(&self) -> Option<String> {
        (self.lookup)(&self.var).filter(|value| !value.is_empty())
    }
}
