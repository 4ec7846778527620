//! `merge` command: key a saved Storefront response by content id.

use anyhow::Result;
use clap::Args;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::{error, warn};

use crate::config::Settings;
use crate::enrich::CommerceResponse;
use crate::products::extract;
use crate::query::{remap_by_alias, select_fragments};

use super::common::{print_json, read_json};

#[derive(Args)]
pub struct MergeCommand {
    /// Content document the batch query was built from.
    content: PathBuf,

    /// Storefront API response body (JSON).
    response: PathBuf,
}

impl MergeCommand {
    /// Rebuild the request list with the same fragment rules as `query`, so
    /// alias indices line up, then remap the response.
    pub fn execute(self, settings: &Settings) -> Result<()> {
        let document = read_json(&self.content)?;
        let response = CommerceResponse::from_value(read_json(&self.response)?)?;

        for err in &response.errors {
            error!("GraphQL Error: {}", err);
        }
        if !response.errors.is_empty() {
            error!("GraphQL errors: {}", response.errors.len());
        }

        let requests = {
            let references = extract(&document);
            select_fragments(&references, |reference| settings.fragments.select(reference))
        };

        let products = match &response.data {
            Some(data) => remap_by_alias(data, &requests),
            None => {
                warn!("Response carried no data");
                Map::new()
            }
        };

        print_json(&Value::Object(products))
    }
}
