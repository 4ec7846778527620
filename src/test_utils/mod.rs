//! Test utilities shared by unit and integration tests.
//!
//! Provides one-time logging setup, a complete client configuration and
//! in-memory transports that record what they were asked to send.

use serde_json::Value;
use std::sync::{Mutex, Once};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::PartialClientConfig;
use crate::core::SanityShopifyError;
use crate::enrich::{CommerceResponse, CommerceTransport, ContentTransport};
use crate::query::BatchQuery;
use crate::sanity::ContentRequest;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Respects `RUST_LOG` when set, otherwise uses `level`; with neither, no
/// subscriber is installed.
///
/// ```bash
/// RUST_LOG=sanity_shopify=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}

/// A complete client configuration for tests.
#[must_use]
pub fn test_client_config() -> PartialClientConfig {
    PartialClientConfig {
        project_id: Some("test-project".to_string()),
        dataset: Some("test".to_string()),
        api_version: Some("2021-10-24".to_string()),
        token: None,
        use_cdn: None,
    }
}

/// Content transport answering every request with a fixed body.
pub struct MockContent {
    response: Result<Value, SanityShopifyError>,
    requests: Mutex<Vec<ContentRequest>>,
}

impl MockContent {
    #[must_use]
    pub fn ok(response: Value) -> Self {
        Self {
            response: Ok(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn failing(reason: &str) -> Self {
        Self {
            response: Err(SanityShopifyError::ContentTransport {
                reason: reason.to_string(),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<ContentRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl ContentTransport for MockContent {
    async fn fetch(&self, request: &ContentRequest) -> Result<Value, SanityShopifyError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.response.clone()
    }
}

/// Commerce transport answering every batch with a fixed body.
pub struct MockCommerce {
    response: Result<Value, SanityShopifyError>,
    batches: Mutex<Vec<BatchQuery>>,
}

impl MockCommerce {
    #[must_use]
    pub fn ok(response: Value) -> Self {
        Self {
            response: Ok(response),
            batches: Mutex::new(Vec::new()),
        }
    }

    /// Answers with an empty response; for tests expecting no call at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::ok(Value::Object(serde_json::Map::new()))
    }

    #[must_use]
    pub fn failing(reason: &str) -> Self {
        Self {
            response: Err(SanityShopifyError::CommerceTransport {
                reason: reason.to_string(),
            }),
            batches: Mutex::new(Vec::new()),
        }
    }

    /// Batches received so far.
    pub fn batches(&self) -> Vec<BatchQuery> {
        self.batches.lock().map(|b| b.clone()).unwrap_or_default()
    }
}

impl CommerceTransport for MockCommerce {
    async fn execute(&self, batch: &BatchQuery) -> Result<CommerceResponse, SanityShopifyError> {
        if let Ok(mut batches) = self.batches.lock() {
            batches.push(batch.clone());
        }
        CommerceResponse::from_value(self.response.clone()?)
    }
}
