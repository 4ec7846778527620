//! Depth-first search for product tokens in arbitrary content.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use crate::constants::PRODUCT_TOKEN_PATTERN;

use super::ancestors::Ancestors;
use super::node::ContentNode;
use super::reference::ProductReference;

fn token_regex() -> Option<&'static Regex> {
    static TOKEN_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    TOKEN_REGEX.get_or_init(|| Regex::new(PRODUCT_TOKEN_PATTERN).ok()).as_ref()
}

/// Every product token occurring in `text`, left to right, non-overlapping.
#[must_use]
pub fn tokens_in(text: &str) -> Vec<&str> {
    match token_regex() {
        Some(re) => re.find_iter(text).map(|m| m.as_str()).collect(),
        None => Vec::new(),
    }
}

/// Find every product token in `document`.
///
/// Returns one [`ProductReference`] per textual match in depth-first pre-order.
/// Each reference has a single occurrence: the chain of containers from the
/// string's immediate parent out to `document`. The string itself is not part
/// of the chain. Nothing is deduplicated here.
///
/// # Examples
///
/// ```rust
/// use sanity_shopify::products::find_references;
/// use serde_json::json;
///
/// let doc = json!({"hero": {"product": "shopifyProduct-42"}});
/// let refs = find_references(&doc);
/// assert_eq!(refs.len(), 1);
/// assert_eq!(refs[0].external_id, "42");
/// assert_eq!(refs[0].occurrences[0].len(), 2);
/// ```
#[must_use]
pub fn find_references(document: &Value) -> Vec<ProductReference<'_>> {
    let mut found = Vec::new();
    walk(document, &Ancestors::empty(), &mut found);
    found
}

fn walk<'a>(value: &'a Value, parents: &Ancestors<'a>, found: &mut Vec<ProductReference<'a>>) {
    match ContentNode::from(value) {
        ContentNode::Null | ContentNode::Other => {}
        ContentNode::String(text) => {
            for token in tokens_in(text) {
                found.push(ProductReference::from_token(token, parents.clone()));
            }
        }
        ContentNode::Sequence(items) => {
            let parents = parents.push(value);
            for item in items {
                walk(item, &parents, found);
            }
        }
        ContentNode::Mapping(map) => {
            let parents = parents.push(value);
            for entry in map.values() {
                walk(entry, &parents, found);
            }
        }
    }
}
