//! `extract` command: list the products referenced by a document.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

use crate::products::{ConsolidatedReference, extract};

use super::common::{print_json, read_json};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ExtractCommand {
    /// Content document (JSON), or `-` for stdin.
    file: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// One occurrence as shown to users: how deep it sits and what holds it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OccurrenceReport<'a> {
    depth: usize,
    parent: Option<&'a Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductReport<'a> {
    external_id: &'a str,
    content_id: &'a str,
    gid: String,
    occurrences: Vec<OccurrenceReport<'a>>,
}

impl<'a> From<&'a ConsolidatedReference<'_>> for ProductReport<'a> {
    fn from(reference: &'a ConsolidatedReference<'_>) -> Self {
        Self {
            external_id: &reference.external_id,
            content_id: &reference.content_id,
            gid: reference.gid(),
            occurrences: reference
                .occurrences
                .iter()
                .map(|chain| OccurrenceReport {
                    depth: chain.len(),
                    parent: chain.parent(),
                })
                .collect(),
        }
    }
}

impl ExtractCommand {
    pub fn execute(self) -> Result<()> {
        let document = read_json(&self.file)?;
        let products = extract(&document);

        match self.format {
            OutputFormat::Json => {
                let reports: Vec<ProductReport<'_>> = products.iter().map(ProductReport::from).collect();
                print_json(&reports)
            }
            OutputFormat::Text => {
                if products.is_empty() {
                    println!("No product references found");
                    return Ok(());
                }
                for (index, product) in products.iter().enumerate() {
                    println!(
                        "{} {} {}",
                        format!("{index:>3}.").dimmed(),
                        product.external_id.bold(),
                        format!("({} occurrence(s))", product.occurrence_count()).cyan()
                    );
                }
                println!("{} product(s) referenced", products.len());
                Ok(())
            }
        }
    }
}
