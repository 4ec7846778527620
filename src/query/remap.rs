//! Positional re-merge of batch responses.
//!
//! The Storefront API answers a batch query with one field per alias. The
//! product id is not echoed back, so the alias index is the only link between
//! a response field and the product that was asked for.

use serde_json::{Map, Value};
use tracing::warn;

use crate::constants::PRODUCT_ALIAS_PREFIX;

use super::fragment::ProductRequest;

/// Parse the request index out of an alias such as `product3`.
#[must_use]
pub fn alias_index(alias: &str) -> Option<usize> {
    alias.strip_prefix(PRODUCT_ALIAS_PREFIX)?.parse().ok()
}

/// Key every aliased response field by the content id of its request.
///
/// `requests` must be the exact list the batch query was built from. Fields
/// whose alias does not parse, or whose index has no request, are dropped.
/// A field answered with `null` (unknown product) is kept as `null`.
///
/// # Examples
///
/// ```rust
/// use sanity_shopify::query::{ProductRequest, remap_by_alias};
/// use serde_json::json;
///
/// let requests = vec![ProductRequest {
///     external_id: "1".into(),
///     content_id: "shopifyProduct-1".into(),
///     fragment: "id".into(),
/// }];
/// let data = json!({"product0": {"id": "gid://shopify/Product/1"}, "product7": {}});
///
/// let products = remap_by_alias(data.as_object().unwrap(), &requests);
/// assert_eq!(products.len(), 1);
/// assert_eq!(products["shopifyProduct-1"]["id"], "gid://shopify/Product/1");
/// ```
#[must_use]
pub fn remap_by_alias(data: &Map<String, Value>, requests: &[ProductRequest]) -> Map<String, Value> {
    let mut products = Map::new();

    for (alias, content) in data {
        let Some(request) = alias_index(alias).and_then(|index| requests.get(index)) else {
            warn!("Ignoring response field '{}' with no matching product request", alias);
            continue;
        };
        products.insert(request.content_id.clone(), content.clone());
    }

    products
}
