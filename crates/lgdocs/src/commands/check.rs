//! `lgdocs check` command implementation.

use std::path::PathBuf;

use clap::Args;
use lgdocs_config::{BrokenLinkPolicy, CliSettings};
use lgdocs_site::{Site, find_broken_links};

use super::{content_source, load_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover lgdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = load_config(self.config.as_deref(), &CliSettings::default())?;
        let source = content_source(&config);
        let site = Site::load(config)?;
        let documents = site.resolve_documents(&source)?;

        // With `throw`, assembly has already failed on the first broken link.
        if site.config().on_broken_links != BrokenLinkPolicy::Throw {
            let broken = find_broken_links(site.config(), site.pages(), site.routes());
            for link in &broken {
                output.warning(&format!(
                    "Broken link: {} -> {}",
                    link.location, link.target
                ));
            }
        }

        output.success(&format!(
            "OK: {} sidebars, {} documents, {} routes",
            site.tree().sidebars().len(),
            documents.len(),
            site.routes().len()
        ));
        Ok(())
    }
}
