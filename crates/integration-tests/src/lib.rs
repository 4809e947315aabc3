//! Integration tests for Multibase.
//!
//! # Running Tests
//!
//! These tests drive a running server over HTTP and therefore need the
//! whole stack up:
//!
//! ```bash
//! # Start PostgreSQL, MongoDB and Redis, run migrations, then:
//! cargo run -p multibase-api &
//! cargo test -p multibase-integration-tests -- --ignored
//! ```
//!
//! Every test is `#[ignore]`d so a plain `cargo test` stays green without
//! live backends.

use reqwest::Client;
use uuid::Uuid;

/// Shared context for driving the API under test.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Create a context pointing at the server under test.
    ///
    /// The base URL comes from `API_BASE_URL`, defaulting to the local
    /// development address.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be constructed.
    #[must_use]
    pub fn new() -> Self {
        let base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());
        let client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    /// Build a full URL from a path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A unique email for this test run, so reruns don't trip the unique index.
#[must_use]
pub fn unique_email() -> String {
    format!("user-{}@test.example", Uuid::new_v4())
}

/// A unique cart/user id for this test run.
#[must_use]
pub fn unique_user_id() -> String {
    format!("it-{}", Uuid::new_v4())
}
