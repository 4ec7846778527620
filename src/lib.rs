//! sanity-shopify - Shopify product references in Sanity content
//!
//! Sanity documents that sell Shopify products refer to them through string
//! ids such as `shopifyProduct-7342335787245`. These ids can appear anywhere
//! in a document: as `_id` of an embedded product document, inside arrays of
//! references, or deep within portable text. This crate finds them, fetches
//! every referenced product with a single aliased Storefront API query, and
//! keys the answer back by content id.
//!
//! # Pipeline
//!
//! 1. [`products::extract`] walks a content document and consolidates every
//!    product token into one [`products::ConsolidatedReference`] per product,
//!    keeping the chain of containers around each occurrence.
//! 2. [`query::select_fragments`] decides per product which selection set to
//!    fetch (or to skip it), and [`query::BatchQuery`] renders the batch.
//! 3. [`query::remap_by_alias`] turns the `product0..productN` response
//!    fields into a map keyed by content id.
//!
//! [`enrich::Enricher`] runs the whole pipeline around a content request,
//! over caller-supplied [`enrich::ContentTransport`] and
//! [`enrich::CommerceTransport`] implementations.
//!
//! # Modules
//!
//! - [`products`] - reference extraction and consolidation
//! - [`query`] - fragment selection, batch query text and response remapping
//! - [`sanity`] - content request descriptors (GROQ and GraphQL)
//! - [`enrich`] - the enrichment pipeline and transport seams
//! - [`config`] - client configuration and the settings file
//! - [`core`] - error types and user-facing error context
//! - [`cli`] - the `sanity-shopify` command-line interface
//! - [`constants`] - ids, prefixes and defaults
//!
//! # Example
//!
//! ```rust
//! use sanity_shopify::products::extract;
//! use sanity_shopify::query::{BatchQuery, StorefrontVariables, default_selector, PRODUCT_PROVIDER_FRAGMENT};
//! use serde_json::json;
//!
//! let page = json!({
//!     "title": "Home",
//!     "featured": [{ "_ref": "shopifyProduct-111" }, { "_ref": "shopifyProduct-222" }]
//! });
//!
//! let references = extract(&page);
//! let batch = BatchQuery::from_references(
//!     &references,
//!     default_selector,
//!     &StorefrontVariables::default(),
//!     PRODUCT_PROVIDER_FRAGMENT,
//! )
//! .expect("two products to fetch");
//!
//! assert!(batch.query.contains("product0: product(id: \"gid://shopify/Product/111\")"));
//! assert!(batch.query.contains("product1: product(id: \"gid://shopify/Product/222\")"));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod enrich;
pub mod products;
pub mod query;
pub mod sanity;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
