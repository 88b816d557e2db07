//! Counter domain types.
//!
//! The counter value itself lives in the store; the service only ever sees
//! the post-increment value handed back by one atomic increment.

use std::fmt;

/// Name of a counter in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CounterKey(String);

impl CounterKey {
    /// Key used by the `/data` endpoint.
    pub const ACCESS_COUNT: &'static str = "access_count";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CounterKey {
    fn default() -> Self {
        Self::new(Self::ACCESS_COUNT)
    }
}

impl fmt::Display for CounterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authoritative post-increment value returned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccessCount(i64);

impl AccessCount {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Response body for a successful `/data` request.
    pub fn render(self) -> String {
        format!("Access count: {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_matches_wire_format() {
        assert_eq!(AccessCount::new(1).render(), "Access count: 1");
        assert_eq!(AccessCount::new(42).render(), "Access count: 42");
    }

    #[test]
    fn test_render_negative_value() {
        // DECR from another client can push the counter below zero.
        assert_eq!(AccessCount::new(-3).render(), "Access count: -3");
    }

    #[test]
    fn test_default_key_is_access_count() {
        assert_eq!(CounterKey::default().as_str(), "access_count");
        assert_eq!(CounterKey::new("hits").to_string(), "hits");
    }
}
