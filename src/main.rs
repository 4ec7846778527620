//! sanity-shopify CLI entry point
//!
//! Parses arguments, runs the selected command and turns failures into a
//! user-facing message with suggestions.
//!
//! - `extract` - list the products referenced by a document
//! - `query` - print the Storefront batch query for a document
//! - `merge` - key a saved Storefront response by content id
//! - `request` - print the Sanity request for a query

use anyhow::Result;
use clap::Parser;
use sanity_shopify::cli;
use sanity_shopify::core::error::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
