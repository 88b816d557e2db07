//! Store Adapters - Key-Value Store Access
//!
//! Implements the `CounterStore` port against Redis.

pub mod redis_store;

pub use redis_store::RedisCounterStore;
