//! Command-line interface for sanity-shopify.
//!
//! The CLI works offline on JSON files: it inspects the product references
//! of a content document, renders the batch query that would fetch them, and
//! maps a saved Storefront response back onto content ids.
//!
//! # Commands
//!
//! - `extract` - list the products referenced by a document
//! - `query` - print the batch query body for a document
//! - `merge` - key a Storefront response by content id
//! - `request` - print the Sanity request a query would make
//!
//! # Global Options
//!
//! - `--verbose` - debug logging
//! - `--quiet` - no logging
//! - `--config <PATH>` - settings file (defaults to `sanity-shopify.toml`,
//!   or `SANITY_SHOPIFY_CONFIG`)
//!
//! ```bash
//! sanity-shopify extract page.json
//! sanity-shopify --config shop.toml query page.json --country CA
//! sanity-shopify merge page.json storefront-response.json
//! ```

mod common;
mod extract;
mod merge;
mod query;
mod request;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

pub use extract::ExtractCommand;
pub use merge::MergeCommand;
pub use query::QueryCommand;
pub use request::RequestCommand;

/// Top-level command-line interface.
#[derive(Parser)]
#[command(
    name = "sanity-shopify",
    about = "Find Shopify product references in Sanity content and build the queries to fetch them",
    version,
    long_about = "sanity-shopify scans Sanity content for shopifyProduct-<id> references, builds the \
                  aliased Storefront API batch query for them, and maps responses back onto content ids."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all logging.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the settings file.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the products referenced by a content document.
    Extract(ExtractCommand),
    /// Print the Storefront batch query for a content document.
    Query(QueryCommand),
    /// Map a saved Storefront response onto content ids.
    Merge(MergeCommand),
    /// Print the Sanity request descriptor for a query.
    Request(RequestCommand),
}

impl Cli {
    /// Log level implied by the verbosity flags; `None` disables logging.
    #[must_use]
    pub fn log_level(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            None
        } else {
            Some("info")
        }
    }

    /// Install the tracing subscriber. `RUST_LOG` takes precedence.
    pub fn init_logging(&self) {
        let Some(level) = self.log_level() else {
            return;
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// Run the selected command.
    ///
    /// # Errors
    ///
    /// Propagates settings, input and configuration errors for display by
    /// [`user_friendly_error`](crate::core::user_friendly_error).
    pub fn execute(self) -> Result<()> {
        self.init_logging();
        let settings = Settings::load(self.config.as_deref())?;

        match self.command {
            Commands::Extract(cmd) => cmd.execute(),
            Commands::Query(cmd) => cmd.execute(&settings),
            Commands::Merge(cmd) => cmd.execute(&settings),
            Commands::Request(cmd) => cmd.execute(&settings),
        }
    }
}
