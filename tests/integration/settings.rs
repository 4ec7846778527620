//! Settings file discovery and error reporting.

use predicates::prelude::*;
use serde_json::json;

use crate::common::TestProject;

#[test]
fn test_explicit_settings_path() {
    let project = TestProject::new();
    project.write_json("page.json", &json!(["shopifyProduct-1"]));
    project.write("shop.toml", "[storefront]\ncountry = \"JP\"\n");

    let body = project.run_json(&["--quiet", "--config", "shop.toml", "query", "page.json"]);
    assert_eq!(body["variables"]["country"], json!("JP"));
}

#[test]
fn test_settings_path_from_environment() {
    let project = TestProject::new();
    project.write_json("page.json", &json!(["shopifyProduct-1"]));
    let settings = project.write("env.toml", "[storefront]\nnumProductMedia = 5\n");

    let output = project
        .command()
        .env("SANITY_SHOPIFY_CONFIG", &settings)
        .args(["--quiet", "query", "page.json"])
        .assert()
        .success();

    let body: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(body["variables"]["numProductMedia"], json!(5));
}

#[test]
fn test_missing_explicit_settings_fails() {
    let project = TestProject::new();
    project.write_json("page.json", &json!([]));

    project
        .command()
        .args(["--config", "nowhere.toml", "extract", "page.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings from nowhere.toml"));
}

#[test]
fn test_malformed_settings_fail_with_suggestion() {
    let project = TestProject::new();
    project.write_json("page.json", &json!([]));
    project.write("sanity-shopify.toml", "[storefront\ncountry = ");

    project
        .command()
        .args(["extract", "page.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"))
        .stderr(predicate::str::contains("TOML syntax"));
}
