//! Vault-injected secret file.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::domain::SecretOrigin;
use crate::ports::SecretSource;

/// Reads the credential from a file rendered by the secret-injection
/// sidecar.
///
/// Surrounding whitespace is stripped since templating tools usually add a
/// trailing newline. A readable file always wins, even if it trims to empty.
/// Content that is not valid UTF-8 is rejected rather than rewritten, and
/// the chain moves on to the next source.
#[derive(Debug, Clone)]
pub struct FileSecretSource {
    path: PathBuf,
}

impl FileSecretSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SecretSource for FileSecretSource {
    fn origin(&self) -> SecretOrigin {
        SecretOrigin::VaultFile
    }

    fn fetch(&self) -> Option<String> {
        match std::fs::read(&self.path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(content) => Some(content.trim().to_string()),
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        error = %e,
                        "Secret file is not valid UTF-8, ignoring it"
                    );
                    None
                }
            },
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "Secret file not readable");
                None
            }
        }
    }
}
