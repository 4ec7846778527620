//! Storefront query variables.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{
    DEFAULT_NUM_PRODUCT_MEDIA, DEFAULT_NUM_PRODUCT_METAFIELDS,
    DEFAULT_NUM_PRODUCT_SELLING_PLAN_GROUPS, DEFAULT_NUM_PRODUCT_SELLING_PLANS,
    DEFAULT_NUM_PRODUCT_VARIANT_METAFIELDS, DEFAULT_NUM_PRODUCT_VARIANT_SELLING_PLAN_ALLOCATIONS,
    DEFAULT_NUM_PRODUCT_VARIANTS,
};

/// Variables sent with every batch query.
///
/// `country` switches the query into `@inContext(country: ...)`; the numeric
/// fields cap the list sizes requested by the product fragment. Field names
/// serialize in camelCase to match the variable names of the query text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorefrontVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub num_product_metafields: u32,
    pub num_product_variants: u32,
    pub num_product_media: u32,
    pub num_product_variant_metafields: u32,
    pub num_product_variant_selling_plan_allocations: u32,
    pub num_product_selling_plan_groups: u32,
    pub num_product_selling_plans: u32,
}

impl Default for StorefrontVariables {
    fn default() -> Self {
        Self {
            country: None,
            num_product_metafields: DEFAULT_NUM_PRODUCT_METAFIELDS,
            num_product_variants: DEFAULT_NUM_PRODUCT_VARIANTS,
            num_product_media: DEFAULT_NUM_PRODUCT_MEDIA,
            num_product_variant_metafields: DEFAULT_NUM_PRODUCT_VARIANT_METAFIELDS,
            num_product_variant_selling_plan_allocations:
                DEFAULT_NUM_PRODUCT_VARIANT_SELLING_PLAN_ALLOCATIONS,
            num_product_selling_plan_groups: DEFAULT_NUM_PRODUCT_SELLING_PLAN_GROUPS,
            num_product_selling_plans: DEFAULT_NUM_PRODUCT_SELLING_PLANS,
        }
    }
}

impl StorefrontVariables {
    /// Set the buyer country, e.g. `"US"`.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// The country to put in context, ignoring empty strings.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref().filter(|c| !c.is_empty())
    }

    /// Variables as the JSON object sent next to the query text.
    #[must_use]
    pub fn to_json(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}
