//! Site assembly for lgdocs.
//!
//! Ties the configuration, navigation tree and static pages together:
//!
//! - [`RouteTable`]: every route the build emits, checked for collisions
//! - [`find_broken_links`]: navbar, footer and page links that do not resolve
//! - [`ContentSource`]: document id to source file lookup
//! - [`Site`]: the validated whole, able to write build output
//!
//! ```ignore
//! use lgdocs_config::SiteConfig;
//! use lgdocs_pages::BuildParams;
//! use lgdocs_site::{FsContentSource, Site};
//!
//! let config = SiteConfig::load(None, None)?;
//! let source = FsContentSource::new(&config.docs.content_dir);
//! let site = Site::load(config)?;
//! site.build("build".as_ref(), BuildParams { year: 2026 }, &source)?;
//! ```

mod content;
mod error;
mod links;
mod routes;
mod site;

pub use content::{ContentSource, FsContentSource};
pub use error::SiteError;
pub use links::{BrokenLink, find_broken_links};
pub use routes::{Route, RouteKind, RouteTable};
pub use site::{BuildReport, ROUTES_FILE, ResolvedDocument, SIDEBARS_FILE, Site};

#[cfg(test)]
pub(crate) mod tests {
    use lgdocs_config::SiteConfig;

    const BASE_TOML: &str = r#"
title = "Logos"
tagline = "Build on Logos"
url = "https://logos.example.com"
base_url = "/logos-core-poc/"

[i18n]
default_locale = "en"
"#;

    pub(crate) fn test_config() -> SiteConfig {
        test_config_with("")
    }

    /// Minimal configuration with extra TOML appended.
    pub(crate) fn test_config_with(extra: &str) -> SiteConfig {
        SiteConfig::from_toml_str(&format!("{BASE_TOML}{extra}")).unwrap()
    }
}
