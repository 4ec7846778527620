//! Global constants shared across the crate.
//!
//! Token prefixes, alias names and storefront defaults live here so the
//! extractor, the batch query builder and the re-merge step agree on them.

/// Prefix marking a Shopify product id embedded in Sanity content.
///
/// A reference token is this prefix followed by a run of ASCII word
/// characters, e.g. `shopifyProduct-7342335787245`.
pub const PRODUCT_PREFIX: &str = "shopifyProduct-";

/// Pattern matching a whole reference token inside a string.
///
/// The run after the prefix may be empty; such tokens are dropped during
/// consolidation because their external id is empty.
pub const PRODUCT_TOKEN_PATTERN: &str = r"shopifyProduct-[A-Za-z0-9_]*";

/// Prefix of the Storefront API global id for a product.
pub const SHOPIFY_PRODUCT_GID_PREFIX: &str = "gid://shopify/Product/";

/// Alias prefix of each aliased field in the batch query (`product0`, `product1`, ...).
pub const PRODUCT_ALIAS_PREFIX: &str = "product";

/// Fragment spread requested when the selector does not pick one.
pub const DEFAULT_FRAGMENT_SPREAD: &str = "...ProductProviderFragment";

/// Default settings file name looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "sanity-shopify.toml";

/// Environment variable overriding the settings file location.
pub const SETTINGS_PATH_ENV: &str = "SANITY_SHOPIFY_CONFIG";

/// Default number of product metafields requested.
pub const DEFAULT_NUM_PRODUCT_METAFIELDS: u32 = 0;

/// Default number of product variants requested.
pub const DEFAULT_NUM_PRODUCT_VARIANTS: u32 = 250;

/// Default number of product media entries requested.
pub const DEFAULT_NUM_PRODUCT_MEDIA: u32 = 1;

/// Default number of variant metafields requested.
pub const DEFAULT_NUM_PRODUCT_VARIANT_METAFIELDS: u32 = 0;

/// Default number of variant selling plan allocations requested.
pub const DEFAULT_NUM_PRODUCT_VARIANT_SELLING_PLAN_ALLOCATIONS: u32 = 0;

/// Default number of selling plan groups requested.
pub const DEFAULT_NUM_PRODUCT_SELLING_PLAN_GROUPS: u32 = 0;

/// Default number of selling plans per group requested.
pub const DEFAULT_NUM_PRODUCT_SELLING_PLANS: u32 = 0;
