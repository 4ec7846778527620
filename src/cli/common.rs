//! Helpers shared by CLI commands.

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

use crate::core::SanityShopifyError;

/// Read a JSON document from `path`, or from stdin when `path` is `-`.
pub fn read_json(path: &Path) -> Result<Value> {
    let (content, label) = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).context("Failed to read document from stdin")?;
        (buffer, "stdin".to_string())
    } else {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        (content, path.display().to_string())
    };

    serde_json::from_str(&content).map_err(|e| {
        SanityShopifyError::InvalidDocument {
            file: label,
            reason: e.to_string(),
        }
        .into()
    })
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
