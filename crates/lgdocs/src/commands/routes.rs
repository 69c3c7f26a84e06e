//! `lgdocs routes` command implementation.

use std::path::PathBuf;

use clap::Args;
use lgdocs_config::{CliSettings, join_base};
use lgdocs_site::{RouteKind, Site};

use super::load_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Path to configuration file (default: auto-discover lgdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the route table as JSON.
    #[arg(long)]
    json: bool,
}

impl RoutesArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = load_config(self.config.as_deref(), &CliSettings::default())?;
        let site = Site::load(config)?;

        let output = Output::new();
        if self.json {
            output.print(&serde_json::to_string_pretty(site.routes().routes())?);
            return Ok(());
        }

        output.highlight(&format!("Routes under {}", site.config().base_url));
        for route in site.routes().routes() {
            let path = join_base(&site.config().base_url, &route.path);
            match &route.kind {
                RouteKind::Page => output.print(&format!("{path:<50} page")),
                RouteKind::Document { id, sidebar } => {
                    output.print(&format!("{path:<50} doc {id} ({sidebar})"));
                }
            }
        }
        Ok(())
    }
}
