//! Secret Source Port - One Step of the Credential Fallback Chain
//!
//! Each source is a lookup with no side effects beyond reading its backing
//! location. The resolver walks sources in order and stops at the first hit.

use crate::domain::SecretOrigin;

/// A single place a credential may come from.
pub trait SecretSource: Send + Sync {
  /// Origin reported in logs when this source wins.
  fn origin(&self) -> SecretOrigin;

  /// Return the credential if this source has one.
  fn fetch(&self) -> Option<String>;
}
