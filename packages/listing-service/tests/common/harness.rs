//! Test harness for integration testing.
//!
//! Each harness owns a private in-memory SQLite database with migrations
//! applied and a recording NATS publisher, so tests never share state.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use listing_core::kernel::{connect_in_memory, run_migrations, ServerDeps, TestNats};
use listing_core::server::build_app;
use sqlx::SqlitePool;
use test_context::AsyncTestContext;
use tower::ServiceExt;

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let (status, body) = ctx.get_json("/listings").await;
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Database pool - use this for test fixtures.
    pub db_pool: SqlitePool,
    /// Recording NATS publisher wired into the app.
    pub nats: Arc<TestNats>,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
            .await
            .expect("Failed to create test harness")
    }

    async fn teardown(self) {
        self.db_pool.close().await;
    }
}

impl TestHarness {
    /// Creates a new harness with a fresh database and a working bus.
    pub async fn new() -> Result<Self> {
        Self::with_nats(TestNats::new()).await
    }

    /// Creates a new harness whose bus rejects every publish.
    pub async fn with_failing_nats() -> Result<Self> {
        Self::with_nats(TestNats::failing()).await
    }

    async fn with_nats(nats: TestNats) -> Result<Self> {
        // Respects RUST_LOG; try_init because many tests share the process
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let db_pool = connect_in_memory()
            .await
            .context("Failed to open test database")?;
        run_migrations(&db_pool).await?;

        Ok(Self {
            db_pool,
            nats: Arc::new(nats),
        })
    }

    /// Dependencies sharing this harness's database and bus.
    pub fn deps(&self) -> ServerDeps {
        ServerDeps::new(self.db_pool.clone(), self.nats.clone())
    }

    /// Build the application router.
    pub fn app(&self) -> Router {
        build_app(self.deps())
    }

    /// Send a request through the router and return status and raw body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self
            .app()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes();

        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    /// `GET` a path and parse the JSON body.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        let (status, body) = self.send(request).await;

        (status, parse_json(&body))
    }

    /// `POST /listings` with a urlencoded form body.
    pub async fn post_listing(&self, form: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/listings")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .expect("valid request");
        let (status, body) = self.send(request).await;

        (status, parse_json(&body))
    }

    /// `POST` to `uri` with no body and no content type.
    pub async fn post_empty(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        let (status, body) = self.send(request).await;

        (status, parse_json(&body))
    }

    /// Number of rows currently in the listings table.
    pub async fn listing_count(&self) -> i64 {
        listing_core::domains::listings::Listing::count(&self.db_pool)
            .await
            .expect("failed to count listings")
    }
}

fn parse_json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("invalid JSON body {:?}: {}", body, e))
}
