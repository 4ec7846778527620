//! Common test utilities for sanity-shopify integration tests.

// Not every helper is used by every test module
#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test run.
const ISOLATED_ENV: &[&str] = &[
    "SANITY_SHOPIFY_CONFIG",
    "SANITY_PROJECT_ID",
    "SANITY_DATASET",
    "SANITY_API_VERSION",
    "RUST_LOG",
];

/// A scratch directory to run the CLI in.
pub struct TestProject {
    temp_dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `name` inside the project and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        self.write(name, &serde_json::to_string_pretty(value).unwrap())
    }

    /// A `sanity-shopify` command running inside the project directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("sanity-shopify").unwrap();
        cmd.current_dir(self.path());
        for var in ISOLATED_ENV {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Run the CLI with `args` and parse stdout as JSON, asserting success.
    pub fn run_json(&self, args: &[&str]) -> Value {
        let output = self.command().args(args).assert().success();
        serde_json::from_slice(&output.get_output().stdout).unwrap()
    }
}

/// A landing page that references two products, one of them twice.
pub fn landing_page() -> Value {
    serde_json::json!({
        "_type": "page",
        "title": "Summer",
        "hero": {
            "_id": "shopifyProduct-7342335787245",
            "store": { "handle": "special-product" }
        },
        "grid": [
            { "_ref": "shopifyProduct-1001" },
            { "_ref": "shopifyProduct-7342335787245" }
        ]
    })
}
