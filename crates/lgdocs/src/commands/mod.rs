//! CLI command implementations.

mod build;
mod check;
mod routes;

use std::path::Path;

use clap::ValueEnum;
use lgdocs_config::{BrokenLinkPolicy, CliSettings, ColorModeKind, SiteConfig};
use lgdocs_site::FsContentSource;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use routes::RoutesArgs;

use crate::error::CliError;

/// `--on-broken-links` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LinkPolicyArg {
    Throw,
    Warn,
    Ignore,
}

impl From<LinkPolicyArg> for BrokenLinkPolicy {
    fn from(arg: LinkPolicyArg) -> Self {
        match arg {
            LinkPolicyArg::Throw => Self::Throw,
            LinkPolicyArg::Warn => Self::Warn,
            LinkPolicyArg::Ignore => Self::Ignore,
        }
    }
}

/// `--default-mode` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ColorModeArg {
    Light,
    Dark,
}

impl From<ColorModeArg> for ColorModeKind {
    fn from(arg: ColorModeArg) -> Self {
        match arg {
            ColorModeArg::Light => Self::Light,
            ColorModeArg::Dark => Self::Dark,
        }
    }
}

/// Load the site configuration, applying CLI overrides.
fn load_config(path: Option<&Path>, settings: &CliSettings) -> Result<SiteConfig, CliError> {
    Ok(SiteConfig::load(path, Some(settings))?)
}

/// Content directory named by the configuration.
fn content_source(config: &SiteConfig) -> FsContentSource {
    FsContentSource::new(&config.docs.content_dir)
}
