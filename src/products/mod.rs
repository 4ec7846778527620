//! Product reference extraction and consolidation.
//!
//! Sanity documents embed Shopify products as string tokens such as
//! `shopifyProduct-7342335787245`, anywhere in the content tree. This module
//! finds those tokens and groups them per product so a single batched query
//! can fetch each product once.
//!
//! # Stages
//!
//! 1. [`find_references`] walks the document depth-first and returns one
//!    [`ProductReference`] per match, together with the chain of containers
//!    leading from the match up to the document root ([`Ancestors`]).
//! 2. [`consolidate`] groups those references by external id. A product keeps
//!    the position of its first occurrence.
//!
//! [`extract`] runs both stages.
//!
//! # Occurrence chains
//!
//! For a product found inside
//!
//! ```json
//! {
//!   "_id": "shopifyProduct-7342335787245",
//!   "store": { "handle": "special-product" }
//! }
//! ```
//!
//! the object above is `occurrences[0].parent()`, the first parent of the first
//! place the product was found. Walking the chain further leads to the whole
//! document as the final element. Callers use this to locate the content that
//! surrounds a product, e.g. to splice fetched data back in.
//!
//! Both stages are pure. Results borrow the document and are rebuilt for every
//! new snapshot.

pub mod ancestors;
pub mod consolidate;
pub mod extractor;
pub mod node;
pub mod reference;

pub use ancestors::Ancestors;
pub use consolidate::{consolidate, extract};
pub use extractor::{find_references, tokens_in};
pub use node::ContentNode;
pub use reference::{
    ConsolidatedReference, ProductReference, storefront_gid, to_content_id, to_external_id,
};
