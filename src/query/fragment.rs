//! Per-product fragment selection.
//!
//! Callers decide, product by product, which GraphQL selection to request
//! from the Storefront API. A selector sees the consolidated reference,
//! including its occurrence chains, so it can pick a richer fragment for
//! products that appear in a hero block and a lean one elsewhere, or skip a
//! product entirely.

use crate::constants::DEFAULT_FRAGMENT_SPREAD;
use crate::products::ConsolidatedReference;

/// Fragment definitions appended to every batch query.
///
/// Defines `ProductProviderFragment`, the spread requested by default. It
/// consumes all list-size variables declared by the batch query.
pub const PRODUCT_PROVIDER_FRAGMENT: &str = r#"fragment ProductProviderFragment on Product {
    id
    handle
    title
    descriptionHtml
    compareAtPriceRange {
      maxVariantPrice { amount currencyCode }
      minVariantPrice { amount currencyCode }
    }
    priceRange {
      maxVariantPrice { amount currencyCode }
      minVariantPrice { amount currencyCode }
    }
    media(first: $numProductMedia) {
      edges {
        node {
          mediaContentType
          alt
          ... on MediaImage {
            image { id url altText width height }
          }
        }
      }
    }
    metafields(first: $numProductMetafields) {
      edges {
        node { id type namespace key value }
      }
    }
    sellingPlanGroups(first: $numProductSellingPlanGroups) {
      edges {
        node {
          name
          sellingPlans(first: $numProductSellingPlans) {
            edges {
              node { id name description recurringDeliveries }
            }
          }
        }
      }
    }
    variants(first: $numProductVariants) {
      edges {
        node {
          id
          title
          availableForSale
          sku
          priceV2 { amount currencyCode }
          compareAtPriceV2 { amount currencyCode }
          selectedOptions { name value }
          metafields(first: $numProductVariantMetafields) {
            edges {
              node { id type namespace key value }
            }
          }
          sellingPlanAllocations(first: $numProductVariantSellingPlanAllocations) {
            edges {
              node {
                sellingPlan { id }
                priceAdjustments {
                  price { amount currencyCode }
                }
              }
            }
          }
        }
      }
    }
  }"#;

/// Outcome of a fragment selector for one product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FragmentSelection {
    /// Request this selection set for the product.
    Fragment(String),
    /// Leave the product out of the batch.
    Exclude,
    /// Request [`DEFAULT_FRAGMENT_SPREAD`].
    #[default]
    Default,
}

impl FragmentSelection {
    /// The selection text to request, or `None` when the product is excluded.
    #[must_use]
    pub fn resolve(self) -> Option<String> {
        match self {
            Self::Fragment(fragment) => Some(fragment),
            Self::Exclude => None,
            Self::Default => Some(DEFAULT_FRAGMENT_SPREAD.to_string()),
        }
    }
}

impl From<String> for FragmentSelection {
    fn from(fragment: String) -> Self {
        Self::Fragment(fragment)
    }
}

impl From<&str> for FragmentSelection {
    fn from(fragment: &str) -> Self {
        Self::Fragment(fragment.to_string())
    }
}

impl From<Option<String>> for FragmentSelection {
    fn from(fragment: Option<String>) -> Self {
        fragment.map_or(Self::Default, Self::Fragment)
    }
}

/// One product to request, in alias order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRequest {
    pub external_id: String,
    pub content_id: String,
    /// Selection set placed inside the aliased `product(id: ...)` field.
    pub fragment: String,
}

/// Apply `selector` to every consolidated reference.
///
/// Excluded products are removed; the position of each remaining request is
/// its alias index in the batch query.
pub fn select_fragments<F>(references: &[ConsolidatedReference<'_>], selector: F) -> Vec<ProductRequest>
where
    F: Fn(&ConsolidatedReference<'_>) -> FragmentSelection,
{
    references
        .iter()
        .filter_map(|reference| {
            selector(reference).resolve().map(|fragment| ProductRequest {
                external_id: reference.external_id.clone(),
                content_id: reference.content_id.clone(),
                fragment,
            })
        })
        .collect()
}

/// Selector that requests the default fragment for every product.
#[must_use]
pub fn default_selector(_reference: &ConsolidatedReference<'_>) -> FragmentSelection {
    FragmentSelection::Default
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::extract;
    use serde_json::json;

    #[test]
    fn test_resolve() {
        assert_eq!(FragmentSelection::Default.resolve().as_deref(), Some("...ProductProviderFragment"));
        assert_eq!(FragmentSelection::from("handle").resolve().as_deref(), Some("handle"));
        assert_eq!(FragmentSelection::Exclude.resolve(), None);
        assert_eq!(FragmentSelection::from(None), FragmentSelection::Default);
    }

    #[test]
    fn test_default_selector_keeps_all() {
        let doc = json!(["shopifyProduct-1", "shopifyProduct-2"]);
        let refs = extract(&doc);
        let requests = select_fragments(&refs, default_selector);

        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.fragment == DEFAULT_FRAGMENT_SPREAD));
        assert_eq!(requests[1].content_id, "shopifyProduct-2");
    }

    #[test]
    fn test_exclusion_shifts_positions() {
        let doc = json!(["shopifyProduct-1", "shopifyProduct-2", "shopifyProduct-3"]);
        let refs = extract(&doc);
        let requests = select_fragments(&refs, |r| match r.external_id.as_str() {
            "1" => FragmentSelection::Exclude,
            "3" => FragmentSelection::from("id title"),
            _ => FragmentSelection::Default,
        });

        let ids: Vec<_> = requests.iter().map(|r| r.external_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
        assert_eq!(requests[1].fragment, "id title");
    }

    #[test]
    fn test_selector_sees_occurrences() {
        let doc = json!({"hero": "shopifyProduct-1", "list": ["shopifyProduct-2", "shopifyProduct-1"]});
        let refs = extract(&doc);
        let requests = select_fragments(&refs, |r| {
            if r.occurrence_count() > 1 {
                FragmentSelection::from("...FullProduct")
            } else {
                FragmentSelection::Default
            }
        });

        assert_eq!(requests[0].fragment, "...FullProduct");
        assert_eq!(requests[1].fragment, DEFAULT_FRAGMENT_SPREAD);
    }
}
