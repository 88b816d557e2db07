//! Property-Based Tests — Credential Precedence and Counter Rendering
//!
//! Uses `proptest` to check the fallback chain across random secret
//! values, and that `/data` always reports the store's post-increment value.

use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use proptest::prelude::*;
use tower::ServiceExt;

use access_counter::adapters::http::{router, AppState};
use access_counter::adapters::secrets::{EnvSecretSource, FileSecretSource, SecretResolver};
use access_counter::domain::{AccessCount, CounterKey, SecretOrigin};
use access_counter::error::StoreError;
use access_counter::ports::CounterStore;
use access_counter::usecases::AccessCounter;

fn resolver(file: &std::path::Path, env_value: Option<String>) -> SecretResolver {
    SecretResolver::new(vec![
        Box::new(FileSecretSource::new(file)),
        Box::new(EnvSecretSource::with_lookup("REDIS_PASSWORD", move |_| {
            env_value.clone()
        })),
    ])
}

struct CounterAt(AtomicI64);

#[async_trait]
impl CounterStore for CounterAt {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn increment(&self, _key: &CounterKey) -> Result<AccessCount, StoreError> {
        Ok(AccessCount::new(self.0.fetch_add(1, Ordering::SeqCst) + 1))
    }
}

// ── Secret precedence ───────────────────────────────────────

proptest! {
    /// A readable secret file wins over any environment value, trimmed.
    #[test]
    fn file_always_wins_trimmed(
        lead in "[ \t\n]{0,3}",
        secret in "[A-Za-z0-9!@#%^&*._-]{0,32}",
        trail in "[ \t\r\n]{0,3}",
        env_value in proptest::option::of("[A-Za-z0-9]{0,16}"),
    ) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{lead}{secret}{trail}").unwrap();

        let resolved = resolver(file.path(), env_value).resolve_or_empty();
        prop_assert_eq!(resolved.origin, SecretOrigin::VaultFile);
        prop_assert_eq!(resolved.credential.expose(), secret.as_str());
    }

    /// Without the file, a non-empty environment value is used verbatim.
    #[test]
    fn env_used_verbatim_without_file(env_value in "[ -~]{1,32}") {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("redis-config");

        let resolved = resolver(&missing, Some(env_value.clone())).resolve_or_empty();
        prop_assert_eq!(resolved.origin, SecretOrigin::Environment);
        prop_assert_eq!(resolved.credential.expose(), env_value.as_str());
    }

    /// No file and no usable environment value degrades to empty.
    #[test]
    fn neither_source_gives_empty(env_value in proptest::option::of(Just(String::new()))) {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("redis-config");

        let resolved = resolver(&missing, env_value).resolve_or_empty();
        prop_assert_eq!(resolved.origin, SecretOrigin::None);
        prop_assert!(resolved.credential.is_empty());
    }
}

// ── /data reports N + 1 ─────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn data_reports_store_value_plus_one(start in 0i64..i64::MAX - 1) {
        let store = Arc::new(CounterAt(AtomicI64::new(start)));
        let counter = AccessCounter::new(store.clone(), CounterKey::default());
        let app = router(AppState::new(Arc::new(counter)));

        let (status, body) = tokio_test::block_on(async move {
            let request = Request::builder().uri("/data").body(Body::empty()).unwrap();
            let response = app.oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            (status, String::from_utf8(bytes.to_vec()).unwrap())
        });

        prop_assert_eq!(status, StatusCode::OK);
        prop_assert_eq!(body, format!("Access count: {}", start + 1));
        prop_assert_eq!(store.0.load(Ordering::SeqCst), start + 1);
    }
}
