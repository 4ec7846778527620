//! Integration test suite for sanity-shopify
//!
//! End-to-end tests that drive the `sanity-shopify` binary on files in a
//! temporary directory, and the enrichment pipeline through its public API
//! with in-memory transports.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli**: `extract`, `query`, `merge` and `request` commands
//! - **enrich**: the enrichment pipeline over mock transports
//! - **settings**: settings file discovery and error reporting

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod cli;
mod enrich;
mod settings;
