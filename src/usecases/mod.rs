//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates the ports to implement the service's operations.
//!
//! Use cases:
//! - `AccessCounter`: Record an access and report connectivity

pub mod access_counter;

pub use access_counter::AccessCounter;
