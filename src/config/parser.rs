//! Generic TOML parsing with file path context.

use anyhow::{Context, Result};
use std::path::Path;

/// Parse a TOML file into `T`.
///
/// Read and parse failures carry the file path in their context:
///
/// ```text
/// Failed to parse config file: /path/to/sanity-shopify.toml
/// Caused by:
///     invalid type: integer `1`, expected a string
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not match `T`.
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}
