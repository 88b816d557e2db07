//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the use cases require from the
//! outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `SecretSource`: One strategy in the credential fallback chain
//! - `CounterStore`: Atomic counters in the external key-value store

pub mod counter_store;
pub mod secret_source;

pub use counter_store::CounterStore;
pub use secret_source::SecretSource;
