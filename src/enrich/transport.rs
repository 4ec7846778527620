//! Transport boundaries.
//!
//! The crate performs no network I/O itself. Callers plug in whatever HTTP
//! stack they run on by implementing these two traits. A content transport
//! POSTs [`ContentRequest::body`] to [`ContentRequest::url`], attaching
//! `Authorization: Bearer <token>` when the request carries a token. A
//! commerce transport POSTs [`BatchQuery::body`] to the Storefront API
//! (`https://{store}/api/{version}/graphql.json`) with its
//! `X-Shopify-Storefront-Access-Token` header.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::future::Future;

use crate::core::SanityShopifyError;
use crate::query::BatchQuery;
use crate::sanity::ContentRequest;

/// Performs requests against the content platform.
pub trait ContentTransport {
    /// Send `request` and return the parsed JSON response body.
    ///
    /// Failures should be reported as [`SanityShopifyError::ContentTransport`].
    fn fetch(&self, request: &ContentRequest) -> impl Future<Output = Result<Value, SanityShopifyError>>;
}

/// Performs batch queries against the Storefront API.
pub trait CommerceTransport {
    /// Send `batch` and return the parsed GraphQL response.
    ///
    /// GraphQL-level errors belong in [`CommerceResponse::errors`]; only
    /// transport failures should be returned as
    /// [`SanityShopifyError::CommerceTransport`].
    fn execute(&self, batch: &BatchQuery) -> impl Future<Output = Result<CommerceResponse, SanityShopifyError>>;
}

/// A Storefront API GraphQL response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CommerceResponse {
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    /// Reported errors. A single error object is accepted as a one-element list.
    #[serde(default, deserialize_with = "one_or_many")]
    pub errors: Vec<Value>,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(errors)) => errors,
        Some(single) => vec![single],
    })
}

impl CommerceResponse {
    /// Interpret a raw JSON response body.
    ///
    /// # Errors
    ///
    /// [`SanityShopifyError::CommerceTransport`] if `data` is present but not
    /// an object.
    pub fn from_value(value: Value) -> Result<Self, SanityShopifyError> {
        serde_json::from_value(value).map_err(|e| SanityShopifyError::CommerceTransport {
            reason: format!("unexpected response shape: {e}"),
        })
    }
}
