//! `lgdocs build` command implementation.

use std::path::PathBuf;
use chrono::Datelike;
use clap::Args;
use lgdocs_config::CliSettings;
use lgdocs_pages::BuildParams;
use lgdocs_site::Site;

use super::{ColorModeArg, LinkPolicyArg, content_source, load_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover lgdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (default: build/ next to the config file).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Copyright year (default: current year).
    #[arg(long, env = "LGDOCS_YEAR")]
    year: Option<u16>,

    /// Deployment URL (overrides config).
    #[arg(long)]
    url: Option<String>,

    /// Base URL (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Default color mode (overrides config).
    #[arg(long, value_enum)]
    default_mode: Option<ColorModeArg>,

    /// Broken link policy (overrides config).
    #[arg(long, value_enum)]
    on_broken_links: Option<LinkPolicyArg>,
}

impl BuildArgs {
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            url: self.url.clone(),
            base_url: self.base_url.clone(),
            default_mode: self.default_mode.map(Into::into),
            on_broken_links: self.on_broken_links.map(Into::into),
        }
    }

    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = load_config(self.config.as_deref(), &self.cli_settings())?;

        let output_dir = self.output_dir.unwrap_or_else(|| {
            config
                .config_path
                .as_deref()
                .and_then(|path| path.parent())
                .map_or_else(|| PathBuf::from("build"), |dir| dir.join("build"))
        });
        let params = BuildParams {
            year: self.year.unwrap_or_else(current_year),
        };

        let source = content_source(&config);
        output.info(&format!("Content: {}", source.root().display()));
        output.info(&format!("Output: {}", output_dir.display()));

        let site = Site::load(config)?;
        let report = site.build(&output_dir, params, &source)?;

        output.success(&format!(
            "Built {} pages and {} documents ({} routes) to {}",
            report.pages,
            report.documents,
            report.routes,
            report.output_dir.display()
        ));
        Ok(())
    }
}

/// Current UTC year from the system clock.
fn current_year() -> u16 {
    u16::try_from(chrono::Utc::now().year()).unwrap_or(u16::MAX)
}
