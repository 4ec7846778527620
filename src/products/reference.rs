//! Product reference types and id conversions.
//!
//! Sanity content refers to Shopify products through prefixed ids
//! (`shopifyProduct-7342335787245`). The commerce side knows the same product
//! by the bare id (`7342335787245`). The helpers here convert between the two
//! namespaces; the conversion is reversible for every well-formed token.

use crate::constants::{PRODUCT_PREFIX, SHOPIFY_PRODUCT_GID_PREFIX};

use super::ancestors::Ancestors;

/// Strip the content prefix from an id, yielding the commerce id.
///
/// Ids without the prefix are returned unchanged.
#[must_use]
pub fn to_external_id(id: &str) -> &str {
    id.strip_prefix(PRODUCT_PREFIX).unwrap_or(id)
}

/// Build the content id for an id in either namespace.
#[must_use]
pub fn to_content_id(id: &str) -> String {
    format!("{}{}", PRODUCT_PREFIX, to_external_id(id))
}

/// Storefront API global id for a commerce product id.
#[must_use]
pub fn storefront_gid(external_id: &str) -> String {
    format!("{}{}", SHOPIFY_PRODUCT_GID_PREFIX, external_id)
}

/// One textual occurrence of a product token in a document.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductReference<'a> {
    /// Id in the commerce namespace, without prefix.
    pub external_id: String,
    /// Id as it appears in content, with prefix.
    pub content_id: String,
    /// One ancestor chain per place the token was found.
    pub occurrences: Vec<Ancestors<'a>>,
}

impl<'a> ProductReference<'a> {
    /// Build a reference for a matched token found under `parents`.
    #[must_use]
    pub fn from_token(token: &str, parents: Ancestors<'a>) -> Self {
        Self {
            external_id: to_external_id(token).to_string(),
            content_id: to_content_id(token),
            occurrences: vec![parents],
        }
    }

    /// Whether the reference carries both ids.
    ///
    /// A bare prefix (`shopifyProduct-`) yields an empty external id and is
    /// not a usable reference.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.external_id.is_empty() && !self.content_id.is_empty()
    }
}

/// All occurrences of one product across a document.
///
/// Produced by [`consolidate`](super::consolidate::consolidate); entries keep
/// the position at which their product was first discovered.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidatedReference<'a> {
    pub external_id: String,
    pub content_id: String,
    /// Every occurrence chain, in discovery order.
    pub occurrences: Vec<Ancestors<'a>>,
}

impl<'a> ConsolidatedReference<'a> {
    #[must_use]
    pub fn occurrence_count(&self) -> usize {
        self.occurrences.len()
    }

    /// Storefront API global id of the referenced product.
    #[must_use]
    pub fn gid(&self) -> String {
        storefront_gid(&self.external_id)
    }
}

impl<'a> From<ProductReference<'a>> for ConsolidatedReference<'a> {
    fn from(reference: ProductReference<'a>) -> Self {
        Self {
            external_id: reference.external_id,
            content_id: reference.content_id,
            occurrences: reference.occurrences,
        }
    }
}
