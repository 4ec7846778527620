//! Tests for the `extract`, `query`, `merge` and `request` commands.

use predicates::prelude::*;
use serde_json::json;

use crate::common::{TestProject, landing_page};

#[test]
fn test_extract_json_reports_consolidated_products() {
    let project = TestProject::new();
    project.write_json("page.json", &landing_page());

    let report = project.run_json(&["--quiet", "extract", "page.json", "--format", "json"]);
    let products = report.as_array().unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["externalId"], json!("7342335787245"));
    assert_eq!(products[0]["contentId"], json!("shopifyProduct-7342335787245"));
    assert_eq!(products[0]["gid"], json!("gid://shopify/Product/7342335787245"));
    assert_eq!(products[1]["externalId"], json!("1001"));

    let occurrences = products[0]["occurrences"].as_array().unwrap();
    assert_eq!(occurrences.len(), 2);
    // Found as `_id` of the hero object, then as `_ref` inside the grid
    assert_eq!(occurrences[0]["depth"], json!(2));
    assert_eq!(occurrences[0]["parent"]["store"]["handle"], json!("special-product"));
    assert_eq!(occurrences[1]["depth"], json!(3));
    assert_eq!(occurrences[1]["parent"], json!({"_ref": "shopifyProduct-7342335787245"}));
}

#[test]
fn test_extract_text_lists_products() {
    let project = TestProject::new();
    project.write_json("page.json", &landing_page());

    project
        .command()
        .args(["extract", "page.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7342335787245"))
        .stdout(predicate::str::contains("(2 occurrence(s))"))
        .stdout(predicate::str::contains("2 product(s) referenced"));
}

#[test]
fn test_extract_reads_stdin() {
    let project = TestProject::new();

    project
        .command()
        .args(["extract", "-"])
        .write_stdin(r#"["shopifyProduct-1", "shopifyProduct-1"]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 product(s) referenced"));
}

#[test]
fn test_extract_without_references() {
    let project = TestProject::new();
    project.write("plain.json", r#"{"title": "No products", "count": 42}"#);

    project
        .command()
        .args(["extract", "plain.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No product references found"));
}

#[test]
fn test_extract_invalid_json_fails() {
    let project = TestProject::new();
    project.write("broken.json", "{ not json");

    project
        .command()
        .args(["extract", "broken.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid document"))
        .stderr(predicate::str::contains("broken.json"));
}

#[test]
fn test_extract_missing_file_fails() {
    let project = TestProject::new();

    project
        .command()
        .args(["extract", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.json"));
}

#[test]
fn test_query_builds_aliased_batch() {
    let project = TestProject::new();
    project.write_json("page.json", &landing_page());

    let body = project.run_json(&["--quiet", "query", "page.json"]);
    let query = body["query"].as_str().unwrap();

    assert!(query.starts_with("\n  query getProducts(\n    \n    $numProductMetafields: Int!"));
    assert!(query.contains("product0: product(id: \"gid://shopify/Product/7342335787245\")"));
    assert!(query.contains("product1: product(id: \"gid://shopify/Product/1001\")"));
    assert!(!query.contains("product2"));
    assert!(query.contains("...ProductProviderFragment"));
    assert!(query.contains("fragment ProductProviderFragment on Product"));
    assert!(!query.contains("@inContext"));

    assert_eq!(
        body["variables"],
        json!({
            "numProductMetafields": 0,
            "numProductVariants": 250,
            "numProductMedia": 1,
            "numProductVariantMetafields": 0,
            "numProductVariantSellingPlanAllocations": 0,
            "numProductSellingPlanGroups": 0,
            "numProductSellingPlans": 0
        })
    );
}

#[test]
fn test_query_with_country() {
    let project = TestProject::new();
    project.write_json("page.json", &landing_page());

    let body = project.run_json(&["--quiet", "query", "page.json", "--country", "CA"]);
    let query = body["query"].as_str().unwrap();

    assert!(query.contains("$country: CountryCode"));
    assert!(query.contains("\n  ) @inContext(country: $country) {"));
    assert_eq!(body["variables"]["country"], json!("CA"));
}

#[test]
fn test_query_raw_prints_graphql() {
    let project = TestProject::new();
    project.write_json("page.json", &json!(["shopifyProduct-5"]));

    project
        .command()
        .args(["--quiet", "query", "page.json", "--raw"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\n  query getProducts("))
        .stdout(predicate::str::contains("product0: product(id: \"gid://shopify/Product/5\")"));
}

#[test]
fn test_query_with_nothing_to_fetch() {
    let project = TestProject::new();
    project.write_json("page.json", &json!({"title": "Plain"}));

    let body = project.run_json(&["--quiet", "query", "page.json"]);
    assert_eq!(body, serde_json::Value::Null);
}

#[test]
fn test_query_applies_fragment_rules() {
    let project = TestProject::new();
    project.write_json("page.json", &landing_page());
    project.write(
        "sanity-shopify.toml",
        r#"
[storefront]
country = "DE"
numProductVariants = 10

[fragments]
exclude = ["7342335787245"]
definitions = "fragment Slim on Product { id title }"

[fragments.overrides]
"1001" = "...Slim"
"#,
    );

    let body = project.run_json(&["--quiet", "query", "page.json"]);
    let query = body["query"].as_str().unwrap();

    // The excluded product takes no alias, so 1001 moves up to product0
    assert!(query.contains("product0: product(id: \"gid://shopify/Product/1001\") {\n        ...Slim\n      }"));
    assert!(!query.contains("7342335787245"));
    assert!(!query.contains("product1"));
    assert!(query.ends_with("fragment Slim on Product { id title }\n  "));
    assert_eq!(body["variables"]["country"], json!("DE"));
    assert_eq!(body["variables"]["numProductVariants"], json!(10));
}

#[test]
fn test_merge_keys_response_by_content_id() {
    let project = TestProject::new();
    project.write_json("page.json", &landing_page());
    project.write_json(
        "response.json",
        &json!({
            "data": {
                "product0": {"title": "Special Product"},
                "product1": null,
                "product9": {"title": "Stray"}
            }
        }),
    );

    let products = project.run_json(&["--quiet", "merge", "page.json", "response.json"]);

    assert_eq!(
        products,
        json!({
            "shopifyProduct-7342335787245": {"title": "Special Product"},
            "shopifyProduct-1001": null
        })
    );
}

#[test]
fn test_merge_logs_graphql_errors() {
    let project = TestProject::new();
    project.write_json("page.json", &json!(["shopifyProduct-1"]));
    project.write_json(
        "response.json",
        &json!({
            "data": {"product0": {"title": "One"}},
            "errors": [{"message": "Throttled"}]
        }),
    );

    let output = project
        .command()
        .args(["merge", "page.json", "response.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("GraphQL Error"))
        .stderr(predicate::str::contains("Throttled"));

    let products: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(products["shopifyProduct-1"]["title"], json!("One"));
}

#[test]
fn test_request_groq_descriptor() {
    let project = TestProject::new();

    let request = project.run_json(&[
        "--quiet",
        "request",
        "*[_type == $type]",
        "--params",
        r#"{"type": "page"}"#,
        "--project-id",
        "abc123",
        "--dataset",
        "production",
        "--api-version",
        "2021-10-24",
    ]);

    assert_eq!(request["kind"], json!("groq"));
    assert_eq!(request["url"], json!("https://abc123.api.sanity.io/v2021-10-24/data/query/production"));
    assert_eq!(request["body"], json!({"query": "*[_type == $type]", "params": {"type": "page"}}));
}

#[test]
fn test_request_graphql_uses_settings_file() {
    let project = TestProject::new();
    project.write(
        "sanity-shopify.toml",
        r#"
[sanity]
projectId = "abc123"
dataset = "staging"
apiVersion = "2023-01-01"
"#,
    );

    let request = project.run_json(&["--quiet", "request", "{ allPage { title } }", "--graphql"]);

    assert_eq!(request["kind"], json!("graphql"));
    assert_eq!(request["url"], json!("https://abc123.api.sanity.io/2023-01-01/graphql/staging/default"));
    assert_eq!(request["body"]["variables"], json!({}));
}

#[test]
fn test_request_without_project_id_fails() {
    let project = TestProject::new();

    project
        .command()
        .args(["request", "*", "--dataset", "production", "--api-version", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing project ID"))
        .stderr(predicate::str::contains("projectId"));
}

#[test]
fn test_request_reports_first_missing_field() {
    let project = TestProject::new();

    project
        .command()
        .args(["request", "*", "--project-id", "abc123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing dataset"));
}
