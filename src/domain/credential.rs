//! Store credential and where it came from.
//!
//! The credential is resolved once at startup and never changes. Its value
//! is kept out of `Debug` output so it cannot leak through structured logs.

use std::fmt;

/// Which secret source supplied the credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretOrigin {
    /// Vault-injected secret file.
    VaultFile,
    /// Fallback environment variable.
    Environment,
    /// Nothing found; the credential is empty.
    None,
}

impl fmt::Display for SecretOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VaultFile => write!(f, "vault_file"),
            Self::Environment => write!(f, "environment"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Opaque secret used to authenticate to the store.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Empty credential: the store is contacted without AUTH.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw secret value. Only the store adapter should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("Credential(<empty>)")
        } else {
            f.write_str("Credential(<redacted>)")
        }
    }
}
