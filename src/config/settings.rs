//! Settings file loading.
//!
//! The settings file (`sanity-shopify.toml` by default) gathers everything
//! the pipeline needs besides the transports themselves:
//!
//! ```toml
//! [sanity]
//! projectId = "abc123"
//! dataset = "production"
//! apiVersion = "2021-10-24"
//! useCdn = true
//!
//! [storefront]
//! country = "US"
//! numProductVariants = 10
//!
//! [fragments]
//! exclude = ["7342335787245"]
//!
//! [fragments.overrides]
//! "7342335787246" = "id handle title"
//! ```
//!
//! The location is taken from, in order: an explicit path, the
//! `SANITY_SHOPIFY_CONFIG` environment variable, then `sanity-shopify.toml` in
//! the working directory. A missing default file yields default settings; a
//! missing explicitly named file is an error.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{DEFAULT_SETTINGS_FILE, SETTINGS_PATH_ENV};
use crate::core::SanityShopifyError;
use crate::products::ConsolidatedReference;
use crate::query::{FragmentSelection, PRODUCT_PROVIDER_FRAGMENT, StorefrontVariables};

use super::client::PartialClientConfig;
use super::parser::parse_config;

/// Declarative fragment selection.
///
/// Products listed in `exclude` are left out of the batch; products with an
/// entry in `overrides` get that selection set; every other product gets the
/// default spread. Keys are external (commerce) ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FragmentRules {
    pub exclude: BTreeSet<String>,
    pub overrides: BTreeMap<String, String>,
    /// Fragment definitions appended to the batch query instead of the
    /// built-in `ProductProviderFragment`.
    pub definitions: Option<String>,
}

impl FragmentRules {
    /// Selection for one consolidated product.
    #[must_use]
    pub fn select(&self, reference: &ConsolidatedReference<'_>) -> FragmentSelection {
        if self.exclude.contains(&reference.external_id) {
            return FragmentSelection::Exclude;
        }
        self.overrides.get(&reference.external_id).cloned().into()
    }

    /// Fragment definitions to append to the batch query.
    #[must_use]
    pub fn definitions(&self) -> &str {
        self.definitions.as_deref().unwrap_or(PRODUCT_PROVIDER_FRAGMENT)
    }
}

/// Contents of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sanity: PartialClientConfig,
    pub storefront: StorefrontVariables,
    pub fragments: FragmentRules,
}

impl Settings {
    /// Resolve which settings file to read.
    ///
    /// Returns the path and whether it was named explicitly (argument or
    /// environment variable).
    #[must_use]
    pub fn resolve_path(explicit: Option<&Path>) -> (PathBuf, bool) {
        if let Some(path) = explicit {
            return (path.to_path_buf(), true);
        }
        match std::env::var(SETTINGS_PATH_ENV) {
            Ok(path) if !path.is_empty() => (PathBuf::from(path), true),
            _ => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
        }
    }

    /// Load settings, falling back to defaults when no default file exists.
    ///
    /// # Errors
    ///
    /// [`SanityShopifyError::SettingsParseError`] if a file exists but cannot
    /// be parsed, or an explicitly named file cannot be read.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SanityShopifyError> {
        let (path, named) = Self::resolve_path(explicit);

        if !named && !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load settings from `path`.
    ///
    /// # Errors
    ///
    /// [`SanityShopifyError::SettingsParseError`] on read or parse failure.
    pub fn load_from(path: &Path) -> Result<Self, SanityShopifyError> {
        debug!("Loading settings from {}", path.display());
        parse_config(path).map_err(|e| SanityShopifyError::SettingsParseError {
            file: path.display().to_string(),
            reason: format!("{e:#}"),
        })
    }
}
