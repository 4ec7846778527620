//! Error handling for sanity-shopify
//!
//! Two layers, following the same split throughout the crate:
//! - [`SanityShopifyError`] - strongly-typed failures raised by configuration
//!   checks, settings loading and the transport boundary
//! - [`ErrorContext`] - a wrapper adding details and an actionable suggestion
//!   for terminal display
//!
//! Extraction and query building never fail; malformed content simply yields
//! fewer product references. Errors only come from the outer layers.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sanity_shopify::core::{SanityShopifyError, user_friendly_error};
//!
//! let error = SanityShopifyError::MissingConfigField { field: "projectId" };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Colored error with a suggestion
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for sanity-shopify operations.
///
/// Variants carry owned strings only so the error stays `Clone` and can be
/// stored in [`EnrichedContent`](crate::enrich::EnrichedContent) next to
/// partially fetched data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SanityShopifyError {
    /// A required client configuration field is absent or empty.
    ///
    /// `field` is the configuration key as spelled in the settings file
    /// (`projectId`, `dataset` or `apiVersion`).
    #[error("Missing {}. Ensure `{field}` is defined in the Sanity client configuration", describe_field(.field))]
    MissingConfigField {
        /// Name of the missing key
        field: &'static str,
    },

    /// A configuration value is present but unusable.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Why the value was rejected
        reason: String,
    },

    /// The settings file could not be read or parsed.
    #[error("Failed to load settings from {file}: {reason}")]
    SettingsParseError {
        /// Path of the settings file
        file: String,
        /// Underlying read or parse error
        reason: String,
    },

    /// The content platform request failed.
    #[error("Sanity request failed: {reason}")]
    ContentTransport {
        /// Transport-provided failure description
        reason: String,
    },

    /// The Storefront API request failed.
    #[error("Shopify Storefront request failed: {reason}")]
    CommerceTransport {
        /// Transport-provided failure description
        reason: String,
    },

    /// An input document is not the JSON shape a command expects.
    #[error("Invalid document {file}: {reason}")]
    InvalidDocument {
        /// Where the document came from
        file: String,
        /// What is wrong with it
        reason: String,
    },

    /// Anything else.
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

fn describe_field(field: &str) -> &str {
    match field {
        "projectId" => "project ID",
        "apiVersion" => "API version",
        other => other,
    }
}

/// Error wrapper with user-facing details and a suggestion.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: SanityShopifyError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: SanityShopifyError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error. Displayed in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error. Displayed in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details and suggestion to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

fn create_error_context(error: SanityShopifyError) -> ErrorContext {
    match error {
        SanityShopifyError::MissingConfigField { field } => {
            ErrorContext::new(SanityShopifyError::MissingConfigField { field })
                .with_suggestion(format!(
                    "Add `{field} = \"...\"` to the [sanity] table of sanity-shopify.toml or pass it explicitly"
                ))
                .with_details("projectId, dataset and apiVersion are required before any request is made")
        }
        error @ SanityShopifyError::SettingsParseError { .. } => ErrorContext::new(error)
            .with_suggestion("Check the TOML syntax of your settings file. Verify quotes, brackets, and key names")
            .with_details("Settings keys use camelCase, e.g. projectId, apiVersion, numProductVariants"),
        error @ SanityShopifyError::InvalidDocument { .. } => {
            ErrorContext::new(error).with_suggestion("Make sure the file contains valid JSON")
        }
        error @ (SanityShopifyError::ContentTransport { .. }
        | SanityShopifyError::CommerceTransport { .. }) => ErrorContext::new(error)
            .with_suggestion("Check network connectivity and the access token of the failing service"),
        error => ErrorContext::new(error),
    }
}

/// Convert any error into an [`ErrorContext`] suitable for CLI display.
///
/// Known [`SanityShopifyError`] variants get tailored suggestions; JSON and
/// I/O errors are recognized; anything else keeps its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(known) = error.downcast_ref::<SanityShopifyError>() {
        return create_error_context(known.clone());
    }

    if let Some(json_error) = error.downcast_ref::<serde_json::Error>() {
        return ErrorContext::new(SanityShopifyError::InvalidDocument {
            file: "input".to_string(),
            reason: json_error.to_string(),
        })
        .with_suggestion("Make sure the file contains valid JSON");
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>()
        && io_error.kind() == std::io::ErrorKind::NotFound
    {
        return ErrorContext::new(SanityShopifyError::Other {
            message: error.to_string(),
        })
        .with_suggestion("Check that the file exists and the path is correct");
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(SanityShopifyError::Other {
        message,
    })
}
