//! Enrichment pipeline driven through the public API.

use sanity_shopify::config::Settings;
use sanity_shopify::core::SanityShopifyError;
use sanity_shopify::enrich::{CommerceResponse, CommerceTransport, Enricher};
use sanity_shopify::query::{BatchQuery, FragmentSelection, default_selector};
use sanity_shopify::test_utils::{MockCommerce, MockContent, init_test_logging, test_client_config};
use serde_json::{Map, json};

use crate::common::landing_page;

/// Answers each aliased field with the product id the query asked for, the
/// way the Storefront API echoes `id` back.
struct EchoCommerce;

impl CommerceTransport for EchoCommerce {
    async fn execute(&self, batch: &BatchQuery) -> Result<CommerceResponse, SanityShopifyError> {
        let mut data = Map::new();
        for (index, request) in batch.requests.iter().enumerate() {
            data.insert(
                format!("product{index}"),
                json!({ "id": format!("gid://shopify/Product/{}", request.external_id) }),
            );
        }
        Ok(CommerceResponse {
            data: Some(data),
            errors: Vec::new(),
        })
    }
}

#[tokio::test]
async fn test_groq_page_is_enriched() {
    init_test_logging(None);
    let content = MockContent::ok(json!({ "ms": 12, "result": landing_page() }));
    let enricher = Enricher::new(&test_client_config(), content, EchoCommerce).unwrap();

    let result = enricher.groq("*[_type == 'page'][0]", Map::new(), default_selector).await;

    assert!(result.error.is_none());
    assert_eq!(result.content, Some(landing_page()));
    let products = result.products.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(
        products["shopifyProduct-7342335787245"]["id"],
        json!("gid://shopify/Product/7342335787245")
    );
    assert_eq!(products["shopifyProduct-1001"]["id"], json!("gid://shopify/Product/1001"));
}

#[tokio::test]
async fn test_excluded_products_shift_aliases() {
    init_test_logging(None);
    let content = MockContent::ok(json!({ "result": landing_page() }));
    let enricher = Enricher::new(&test_client_config(), content, EchoCommerce).unwrap();

    let result = enricher
        .groq("*", Map::new(), |reference| {
            if reference.external_id == "7342335787245" {
                FragmentSelection::Exclude
            } else {
                FragmentSelection::Default
            }
        })
        .await;

    let products = result.products.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products["shopifyProduct-1001"]["id"], json!("gid://shopify/Product/1001"));
}

#[tokio::test]
async fn test_graphql_content_without_products() {
    init_test_logging(None);
    let content = MockContent::ok(json!({ "data": { "page": null } }));
    let enricher = Enricher::new(&test_client_config(), content, MockCommerce::empty()).unwrap();

    let mut variables = Map::new();
    variables.insert("slug".to_string(), json!("home"));
    let result = enricher
        .graphql("query Page($slug: String) { page(slug: $slug) { title } }", variables, default_selector)
        .await;

    assert_eq!(result.content, Some(json!({ "page": null })));
    assert!(result.products.is_none());
    assert!(result.commerce_errors.is_empty());
}

#[test]
fn test_settings_drive_enricher() {
    let settings: Settings = toml::from_str(
        r#"
[sanity]
projectId = "abc123"
dataset = "production"
apiVersion = "2021-10-24"
useCdn = true
"#,
    )
    .unwrap();

    let enricher = Enricher::new(&settings.sanity, MockContent::ok(json!({})), MockCommerce::empty()).unwrap();
    assert_eq!(enricher.config().project_id(), "abc123");
    assert!(enricher.config().use_cdn());
}

#[test]
fn test_missing_project_id_stops_before_any_request() {
    let mut config = test_client_config();
    config.project_id = Some("   ".to_string());

    let result = Enricher::new(&config, MockContent::ok(json!({})), MockCommerce::empty());
    assert!(matches!(
        result,
        Err(SanityShopifyError::MissingConfigField { field: "projectId" })
    ));
}
