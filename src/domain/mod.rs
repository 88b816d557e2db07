//! Domain layer - Core types for the access counter.
//!
//! Pure value types with no I/O. Adapters and use cases exchange these
//! across the port boundaries.

pub mod counter;
pub mod credential;

// Re-export core types for convenience
pub use counter::{AccessCount, CounterKey};
pub use credential::{Credential, SecretOrigin};
