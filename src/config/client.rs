//! Sanity client configuration and its validation.

use serde::{Deserialize, Serialize};

use crate::core::SanityShopifyError;

/// Client configuration as supplied by the caller, possibly incomplete.
///
/// Deserializes from the `[sanity]` table of the settings file using the
/// same camelCase keys Sanity clients use elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialClientConfig {
    pub project_id: Option<String>,
    pub dataset: Option<String>,
    pub api_version: Option<String>,
    pub token: Option<String>,
    pub use_cdn: Option<bool>,
}

/// Validated client configuration.
///
/// Only obtainable through [`PartialClientConfig::validate`], so holders can
/// rely on the three required fields being non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    project_id: String,
    dataset: String,
    api_version: String,
    #[serde(skip_serializing)]
    token: Option<String>,
    use_cdn: bool,
}

fn required(value: Option<&String>, field: &'static str) -> Result<String, SanityShopifyError> {
    match value.map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(SanityShopifyError::MissingConfigField {
            field,
        }),
    }
}

impl PartialClientConfig {
    /// Check required fields, in the order `projectId`, `dataset`, `apiVersion`.
    ///
    /// The first missing or blank field is reported. This runs before any
    /// request is built, so a bad configuration never reaches a transport.
    ///
    /// # Errors
    ///
    /// [`SanityShopifyError::MissingConfigField`] naming the first missing field.
    pub fn validate(&self) -> Result<ClientConfig, SanityShopifyError> {
        let project_id = required(self.project_id.as_ref(), "projectId")?;
        let dataset = required(self.dataset.as_ref(), "dataset")?;
        let api_version = required(self.api_version.as_ref(), "apiVersion")?;

        Ok(ClientConfig {
            project_id,
            dataset,
            api_version,
            token: self.token.clone().filter(|t| !t.is_empty()),
            use_cdn: self.use_cdn.unwrap_or(false),
        })
    }

    /// Fill unset fields from `other`.
    #[must_use]
    pub fn or(self, other: PartialClientConfig) -> Self {
        Self {
            project_id: self.project_id.or(other.project_id),
            dataset: self.dataset.or(other.dataset),
            api_version: self.api_version.or(other.api_version),
            token: self.token.or(other.token),
            use_cdn: self.use_cdn.or(other.use_cdn),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    #[must_use]
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn use_cdn(&self) -> bool {
        self.use_cdn
    }
}
