//! `request` command: print the Sanity request a query would make.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{Map, Value};

use crate::config::{PartialClientConfig, Settings};
use crate::sanity::ContentRequest;

use super::common::print_json;

#[derive(Args)]
pub struct RequestCommand {
    /// GROQ query, or GraphQL query with `--graphql`.
    query: String,

    /// Build a GraphQL request instead of GROQ.
    #[arg(long)]
    graphql: bool,

    /// Query parameters / variables as a JSON object.
    #[arg(long, value_name = "JSON")]
    params: Option<String>,

    /// Sanity project id, overriding the settings file.
    #[arg(long, env = "SANITY_PROJECT_ID")]
    project_id: Option<String>,

    /// Sanity dataset, overriding the settings file.
    #[arg(long, env = "SANITY_DATASET")]
    dataset: Option<String>,

    /// Sanity API version, overriding the settings file.
    #[arg(long, env = "SANITY_API_VERSION")]
    api_version: Option<String>,
}

impl RequestCommand {
    pub fn execute(self, settings: &Settings) -> Result<()> {
        let overrides = PartialClientConfig {
            project_id: self.project_id,
            dataset: self.dataset,
            api_version: self.api_version,
            token: None,
            use_cdn: None,
        };
        let config = overrides.or(settings.sanity.clone()).validate()?;

        let params: Map<String, Value> = match self.params {
            Some(raw) => serde_json::from_str(&raw).context("--params must be a JSON object")?,
            None => Map::new(),
        };

        let request = if self.graphql {
            ContentRequest::graphql(&config, &self.query, params)
        } else {
            ContentRequest::groq(&config, &self.query, params)
        };

        print_json(&request)
    }
}
