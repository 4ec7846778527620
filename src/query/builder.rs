//! Batch query text for the Storefront API.
//!
//! One GraphQL document fetches every referenced product through aliased
//! fields: `product0`, `product1`, ... in the order of the request list. The
//! document layout, whitespace included, is stable so fragment definitions
//! and response handling written against it keep working.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Write as _;
use tracing::debug;

use crate::constants::PRODUCT_ALIAS_PREFIX;
use crate::products::{ConsolidatedReference, storefront_gid};

use super::fragment::{FragmentSelection, ProductRequest, select_fragments};
use super::variables::StorefrontVariables;

/// Alias of the field requesting the product at `index`.
#[must_use]
pub fn product_alias(index: usize) -> String {
    format!("{}{}", PRODUCT_ALIAS_PREFIX, index)
}

fn aliased_field(index: usize, request: &ProductRequest) -> String {
    format!(
        "\n      {}: product(id: \"{}\") {{\n        {}\n      }}\n    ",
        product_alias(index),
        storefront_gid(&request.external_id),
        request.fragment
    )
}

/// Render the batch query document.
///
/// `country` adds the `$country` variable and the `@inContext` directive.
/// `product_fragment` is appended after the operation and must define every
/// fragment the requests spread.
#[must_use]
pub fn build_batch_query(
    requests: &[ProductRequest],
    country: Option<&str>,
    product_fragment: &str,
) -> String {
    let in_country = country.is_some_and(|c| !c.is_empty());
    let fields = requests
        .iter()
        .enumerate()
        .map(|(index, request)| aliased_field(index, request))
        .collect::<Vec<_>>()
        .join("\n");

    let mut query = String::new();
    query.push_str("\n  query getProducts(\n    ");
    if in_country {
        query.push_str("$country: CountryCode");
    }
    for variable in [
        "numProductMetafields",
        "numProductVariants",
        "numProductMedia",
        "numProductVariantMetafields",
        "numProductVariantSellingPlanAllocations",
        "numProductSellingPlanGroups",
        "numProductSellingPlans",
    ] {
        let _ = write!(query, "\n    ${}: Int!", variable);
    }
    query.push_str("\n  ) ");
    if in_country {
        query.push_str("@inContext(country: $country)");
    }
    query.push_str(" {\n    ");
    query.push_str(&fields);
    query.push_str("\n  }\n\n  ");
    query.push_str(product_fragment);
    query.push_str("\n  ");
    query
}

/// A ready-to-send batch request and the alias order it was built with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchQuery {
    pub query: String,
    pub variables: Map<String, Value>,
    /// Requests in alias order; index `n` answers to `product{n}`.
    #[serde(skip)]
    pub requests: Vec<ProductRequest>,
}

impl BatchQuery {
    /// Build the batch for already selected requests.
    ///
    /// Returns `None` when there is nothing to fetch, in which case the
    /// commerce call is skipped altogether.
    #[must_use]
    pub fn from_requests(
        requests: Vec<ProductRequest>,
        variables: &StorefrontVariables,
        product_fragment: &str,
    ) -> Option<Self> {
        if requests.is_empty() {
            return None;
        }
        let query = build_batch_query(&requests, variables.country(), product_fragment);
        debug!("Built batch query for {} product(s)", requests.len());
        Some(Self {
            query,
            variables: variables.to_json(),
            requests,
        })
    }

    /// Select fragments for `references` and build the batch.
    #[must_use]
    pub fn from_references<F>(
        references: &[ConsolidatedReference<'_>],
        selector: F,
        variables: &StorefrontVariables,
        product_fragment: &str,
    ) -> Option<Self>
    where
        F: Fn(&ConsolidatedReference<'_>) -> FragmentSelection,
    {
        Self::from_requests(select_fragments(references, selector), variables, product_fragment)
    }

    /// Request body as sent to a GraphQL endpoint.
    #[must_use]
    pub fn body(&self) -> Value {
        serde_json::json!({
            "query": self.query,
            "variables": self.variables,
        })
    }
}
