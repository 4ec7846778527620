//! Storefront batch queries for referenced products.
//!
//! After [`products::extract`](crate::products::extract) has consolidated the
//! references of a document, this module turns them into a single GraphQL
//! request and maps the answer back onto content ids:
//!
//! - [`fragment`] - per-product selection via a caller-supplied selector
//! - [`variables`] - country context and list-size limits
//! - [`builder`] - the aliased batch query text
//! - [`remap`] - correlation of `productN` fields back to content ids
//!
//! Correlation is positional. The request list handed to [`remap_by_alias`]
//! must be the very list the query was built from.

pub mod builder;
pub mod fragment;
pub mod remap;
pub mod variables;

pub use builder::{BatchQuery, build_batch_query, product_alias};
pub use fragment::{
    FragmentSelection, PRODUCT_PROVIDER_FRAGMENT, ProductRequest, default_selector,
    select_fragments,
};
pub use remap::{alias_index, remap_by_alias};
pub use variables::StorefrontVariables;
