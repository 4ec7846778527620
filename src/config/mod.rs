//! Configuration for sanity-shopify.
//!
//! - [`client`] - the Sanity client configuration (`projectId`, `dataset`,
//!   `apiVersion`, optional `token` and `useCdn`) and its fail-fast validation
//! - [`settings`] - the TOML settings file combining client configuration,
//!   storefront variables and fragment rules
//! - [`parser`] - generic TOML parsing with path context
//!
//! Validation happens before any request is built: a configuration missing a
//! required field never reaches a transport.

pub mod client;
pub mod parser;
pub mod settings;

pub use client::{ClientConfig, PartialClientConfig};
pub use parser::parse_config;
pub use settings::{FragmentRules, Settings};
