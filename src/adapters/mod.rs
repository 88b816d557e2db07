//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (files, environment, Redis) and exposes the use
//! cases over HTTP.
//!
//! Adapter categories:
//! - `secrets`: Vault file and environment credential sources
//! - `store`: Redis counter store
//! - `http`: axum router, handlers and server

pub mod http;
pub mod secrets;
pub mod store;
