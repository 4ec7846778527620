//! Content enrichment pipeline.
//!
//! Ties the pure stages together around two caller-supplied transports:
//!
//! 1. validate the client configuration (at construction, before any call)
//! 2. fetch the content document through a [`ContentTransport`]
//! 3. extract and consolidate product references, select fragments and build
//!    the batch query
//! 4. run the batch through a [`CommerceTransport`], unless nothing is left to
//!    fetch
//! 5. map the aliased answers back onto content ids
//!
//! Transport failures never escape as `Err`: they are recorded in
//! [`EnrichedContent::error`] next to whatever was fetched before the failure.
//! GraphQL errors returned by the Storefront API are logged and handed back
//! alongside the data; errors and data are not mutually exclusive.

pub mod transport;

pub use transport::{CommerceResponse, CommerceTransport, ContentTransport};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::config::{ClientConfig, PartialClientConfig};
use crate::core::SanityShopifyError;
use crate::products::{ConsolidatedReference, extract};
use crate::query::{
    BatchQuery, FragmentSelection, PRODUCT_PROVIDER_FRAGMENT, StorefrontVariables, remap_by_alias,
};
use crate::sanity::ContentRequest;

/// Outcome of one enrichment run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedContent {
    /// The content document, if it was fetched.
    pub content: Option<Value>,
    /// Fetched products keyed by content id (`shopifyProduct-...`).
    ///
    /// `None` when no commerce call was made or it failed.
    pub products: Option<Map<String, Value>>,
    /// GraphQL errors reported by the Storefront API.
    pub commerce_errors: Vec<Value>,
    /// Transport failure, if any.
    #[serde(skip)]
    pub error: Option<SanityShopifyError>,
}

/// Products fetched for one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFetch {
    pub products: Option<Map<String, Value>>,
    pub errors: Vec<Value>,
    pub error: Option<SanityShopifyError>,
}

/// Runs the pipeline with a validated configuration and two transports.
pub struct Enricher<C, S> {
    config: ClientConfig,
    content: C,
    commerce: S,
    variables: StorefrontVariables,
    product_fragment: String,
}

impl<C, S> Enricher<C, S>
where
    C: ContentTransport,
    S: CommerceTransport,
{
    /// Validate `config` and set up the pipeline.
    ///
    /// # Errors
    ///
    /// [`SanityShopifyError::MissingConfigField`] if `projectId`, `dataset`
    /// or `apiVersion` is missing. No transport is touched in that case.
    pub fn new(config: &PartialClientConfig, content: C, commerce: S) -> Result<Self, SanityShopifyError> {
        Ok(Self {
            config: config.validate()?,
            content,
            commerce,
            variables: StorefrontVariables::default(),
            product_fragment: PRODUCT_PROVIDER_FRAGMENT.to_string(),
        })
    }

    #[must_use]
    pub fn with_variables(mut self, variables: StorefrontVariables) -> Self {
        self.variables = variables;
        self
    }

    /// Replace the fragment definitions appended to every batch query.
    #[must_use]
    pub fn with_product_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.product_fragment = fragment.into();
        self
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run a GROQ query and enrich its result.
    pub async fn groq<F>(&self, query: &str, params: Map<String, Value>, selector: F) -> EnrichedContent
    where
        F: Fn(&ConsolidatedReference<'_>) -> FragmentSelection,
    {
        self.enrich(ContentRequest::groq(&self.config, query, params), selector).await
    }

    /// Run a GraphQL query against the content platform and enrich its data.
    pub async fn graphql<F>(&self, query: &str, variables: Map<String, Value>, selector: F) -> EnrichedContent
    where
        F: Fn(&ConsolidatedReference<'_>) -> FragmentSelection,
    {
        self.enrich(ContentRequest::graphql(&self.config, query, variables), selector).await
    }

    /// Fetch `request` and the products referenced by its result.
    pub async fn enrich<F>(&self, request: ContentRequest, selector: F) -> EnrichedContent
    where
        F: Fn(&ConsolidatedReference<'_>) -> FragmentSelection,
    {
        let response = match self.content.fetch(&request).await {
            Ok(response) => response,
            Err(err) => {
                error!("Content request to {} failed: {}", request.url, err);
                return EnrichedContent {
                    error: Some(err),
                    ..Default::default()
                };
            }
        };

        let Some(content) = request.unwrap_response(response) else {
            debug!("Content response carried no data");
            return EnrichedContent::default();
        };

        let fetched = self.products_for(&content, selector).await;
        EnrichedContent {
            content: Some(content),
            products: fetched.products,
            commerce_errors: fetched.errors,
            error: fetched.error,
        }
    }

    /// Fetch every product referenced in `document`.
    ///
    /// The commerce transport is not called when the document references no
    /// product or the selector excludes all of them.
    pub async fn products_for<F>(&self, document: &Value, selector: F) -> ProductFetch
    where
        F: Fn(&ConsolidatedReference<'_>) -> FragmentSelection,
    {
        let batch = {
            let references = extract(document);
            BatchQuery::from_references(&references, selector, &self.variables, &self.product_fragment)
        };
        let Some(batch) = batch else {
            debug!("No products to fetch, skipping Storefront request");
            return ProductFetch::default();
        };

        match self.commerce.execute(&batch).await {
            Ok(response) => {
                log_graphql_errors(&response.errors);
                ProductFetch {
                    products: response.data.as_ref().map(|data| remap_by_alias(data, &batch.requests)),
                    errors: response.errors,
                    error: None,
                }
            }
            Err(err) => {
                error!("Storefront request failed: {}", err);
                ProductFetch {
                    error: Some(err),
                    ..Default::default()
                }
            }
        }
    }
}

fn log_graphql_errors(errors: &[Value]) {
    if errors.is_empty() {
        return;
    }
    for err in errors {
        error!("GraphQL Error: {}", err);
    }
    error!("GraphQL errors: {}", errors.len());
}
