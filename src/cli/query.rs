//! `query` command: print the batch query for a document.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::config::Settings;
use crate::products::extract;
use crate::query::BatchQuery;

use super::common::{print_json, read_json};

#[derive(Args)]
pub struct QueryCommand {
    /// Content document (JSON), or `-` for stdin.
    file: PathBuf,

    /// Buyer country for `@inContext`, overriding the settings file.
    #[arg(long)]
    country: Option<String>,

    /// Print only the GraphQL text instead of the JSON request body.
    #[arg(long)]
    raw: bool,
}

impl QueryCommand {
    pub fn execute(self, settings: &Settings) -> Result<()> {
        let document = read_json(&self.file)?;

        let mut variables = settings.storefront.clone();
        if let Some(country) = self.country {
            variables = variables.with_country(country);
        }

        let references = extract(&document);
        let batch = BatchQuery::from_references(
            &references,
            |reference| settings.fragments.select(reference),
            &variables,
            settings.fragments.definitions(),
        );

        let Some(batch) = batch else {
            info!("Nothing to fetch");
            println!("null");
            return Ok(());
        };

        if self.raw {
            println!("{}", batch.query);
            Ok(())
        } else {
            print_json(&batch.body())
        }
    }
}
