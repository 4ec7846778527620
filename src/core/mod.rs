//! Core types shared across sanity-shopify.
//!
//! Currently this is the error layer: [`SanityShopifyError`] for typed
//! failures, [`ErrorContext`] and [`user_friendly_error`] for presenting them
//! in the terminal.

pub mod error;

pub use error::{ErrorContext, SanityShopifyError, user_friendly_error};
