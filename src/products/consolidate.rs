//! Grouping of raw occurrences into one entry per product.

use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, trace};

use super::extractor::find_references;
use super::reference::{ConsolidatedReference, ProductReference};

/// Group raw references by external id.
///
/// Incomplete references (empty external or content id) are dropped. The
/// first occurrence of a product fixes its position in the output; later
/// occurrences append their chains to that entry in discovery order.
#[must_use]
pub fn consolidate<'a, I>(references: I) -> Vec<ConsolidatedReference<'a>>
where
    I: IntoIterator<Item = ProductReference<'a>>,
{
    let mut consolidated: Vec<ConsolidatedReference<'a>> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for reference in references {
        if !reference.is_complete() {
            trace!("Dropping incomplete product reference '{}'", reference.content_id);
            continue;
        }

        match positions.get(&reference.external_id) {
            Some(&index) => {
                trace!("Merging occurrence of product {} into entry {}", reference.external_id, index);
                consolidated[index].occurrences.extend(reference.occurrences);
            }
            None => {
                positions.insert(reference.external_id.clone(), consolidated.len());
                consolidated.push(reference.into());
            }
        }
    }

    consolidated
}

/// Find and consolidate every product referenced in `document`.
///
/// This is the entry point used by the enrichment pipeline. The result
/// borrows `document`; recompute it for every new document snapshot.
///
/// # Examples
///
/// ```rust
/// use sanity_shopify::products::extract;
/// use serde_json::json;
///
/// let doc = json!(["shopifyProduct-1", "shopifyProduct-2", "shopifyProduct-1"]);
/// let products = extract(&doc);
///
/// assert_eq!(products.len(), 2);
/// assert_eq!(products[0].external_id, "1");
/// assert_eq!(products[0].occurrence_count(), 2);
/// assert_eq!(products[1].external_id, "2");
/// ```
#[must_use]
pub fn extract(document: &Value) -> Vec<ConsolidatedReference<'_>> {
    let raw = find_references(document);
    let raw_count = raw.len();
    let consolidated = consolidate(raw);
    debug!(
        "Found {} product occurrence(s) referring to {} product(s)",
        raw_count,
        consolidated.len()
    );
    consolidated
}
