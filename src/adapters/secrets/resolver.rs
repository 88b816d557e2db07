//! Secret Resolver - Ordered Credential Fallback
//!
//! Walks the configured sources in precedence order and stops at the first
//! one that yields a value. Called exactly once, at startup; the result is
//! never refreshed.

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::{Credential, SecretOrigin};
use crate::error::SecretUnavailable;
use crate::ports::SecretSource;

use super::{EnvSecretSource, FileSecretSource};

/// Credential together with the source that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSecret {
    pub credential: Credential,
    pub origin: SecretOrigin,
}

/// Ordered list of secret sources.
pub struct SecretResolver {
    sources: Vec<Box<dyn SecretSource>>,
}

impl SecretResolver {
    pub fn new(sources: Vec<Box<dyn SecretSource>>) -> Self {
        Self { sources }
    }

    /// Vault file first, then the password environment variable.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(vec![
            Box::new(FileSecretSource::new(&config.secrets.file_path)),
            Box::new(EnvSecretSource::new(&config.secrets.env_var)),
        ])
    }

    /// Return the first credential any source produces.
    pub fn resolve(&self) -> Result<ResolvedSecret, SecretUnavailable> {
        for source in &self.sources {
            if let Some(value) = source.fetch() {
                return Ok(ResolvedSecret {
                    credential: Credential::new(value),
                    origin: source.origin(),
                });
            }
        }

        Err(SecretUnavailable {
            checked: self.sources.iter().map(|s| s.origin().to_string()).collect(),
        })
    }

    /// Resolve, degrading to an empty credential when nothing is found.
    ///
    /// Emits exactly one log line naming the winning source, or a warning.
    pub fn resolve_or_empty(&self) -> ResolvedSecret {
        match self.resolve() {
            Ok(resolved) => {
                info!(
                    source = %resolved.origin,
                    empty = resolved.credential.is_empty(),
                    "Loaded store credential"
                );
                resolved
            }
            Err(e) => {
                warn!(error = %e, "No store credential found, continuing without one");
                ResolvedSecret {
                    credential: Credential::empty(),
                    origin: SecretOrigin::None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Fixed-value source that counts how often it was consulted.
    struct StubSource {
        origin: SecretOrigin,
        value: Option<&'static str>,
        calls: Arc<AtomicUsize>,
    }

    impl StubSource {
        fn boxed(
            origin: SecretOrigin,
            value: Option<&'static str>,
        ) -> (Box<dyn SecretSource>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let source = Self {
                origin,
                value,
                calls: Arc::clone(&calls),
            };
            (Box::new(source), calls)
        }
    }

    impl SecretSource for StubSource {
        fn origin(&self) -> SecretOrigin {
            self.origin
        }

        fn fetch(&self) -> Option<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.value.map(str::to_string)
        }
    }

    #[test]
    fn test_first_source_wins_and_short_circuits() {
        let (file, _) = StubSource::boxed(SecretOrigin::VaultFile, Some("from-file"));
        let (env, env_calls) = StubSource::boxed(SecretOrigin::Environment, Some("from-env"));

        let resolved = SecretResolver::new(vec![file, env]).resolve().unwrap();
        assert_eq!(resolved.credential.expose(), "from-file");
        assert_eq!(resolved.origin, SecretOrigin::VaultFile);
        assert_eq!(env_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_falls_through_to_second_source() {
        let (file, _) = StubSource::boxed(SecretOrigin::VaultFile, None);
        let (env, _) = StubSource::boxed(SecretOrigin::Environment, Some("from-env"));

        let resolved = SecretResolver::new(vec![file, env]).resolve().unwrap();
        assert_eq!(resolved.credential.expose(), "from-env");
        assert_eq!(resolved.origin, SecretOrigin::Environment);
    }

    #[test]
    fn test_nothing_found_reports_checked_sources() {
        let (file, _) = StubSource::boxed(SecretOrigin::VaultFile, None);
        let (env, _) = StubSource::boxed(SecretOrigin::Environment, None);

        let err = SecretResolver::new(vec![file, env]).resolve().unwrap_err();
        assert_eq!(err.checked, vec!["vault_file", "environment"]);
    }

    #[test]
    fn test_resolve_or_empty_degrades() {
        let (file, _) = StubSource::boxed(SecretOrigin::VaultFile, None);
        let resolved = SecretResolver::new(vec![file]).resolve_or_empty();
        assert!(resolved.credential.is_empty());
        assert_eq!(resolved.origin, SecretOrigin::None);
    }

    #[test]
    fn test_empty_chain_degrades() {
        let resolved = SecretResolver::new(Vec::new()).resolve_or_empty();
        assert_eq!(resolved.credential, Credential::empty());
    }

    #[test]
    fn test_real_sources_file_beats_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "vault-pass").unwrap();

        let resolver = SecretResolver::new(vec![
            Box::new(FileSecretSource::new(file.path())),
            Box::new(EnvSecretSource::with_lookup("REDIS_PASSWORD", |_| {
                Some("env-pass".to_string())
            })),
        ]);

        let resolved = resolver.resolve_or_empty();
        assert_eq!(resolved.credential.expose(), "vault-pass");
        assert_eq!(resolved.origin, SecretOrigin::VaultFile);
    }

    #[test]
    fn test_from_config_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.secrets.file_path = dir.path().join("missing");
        config.secrets.env_var = "ACCESS_COUNTER_RESOLVER_TEST".to_string();

        temp_env::with_var("ACCESS_COUNTER_RESOLVER_TEST", Some("env-pass"), || {
            let resolved = SecretResolver::from_config(&config).resolve().unwrap();
            assert_eq!(resolved.credential.expose(), "env-pass");
            assert_eq!(resolved.origin, SecretOrigin::Environment);
        });
    }
}
