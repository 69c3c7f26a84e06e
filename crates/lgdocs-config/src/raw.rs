//! Raw configuration as parsed from `lgdocs.toml`.
//!
//! Every field is optional here. Required fields and defaults are enforced
//! when the raw value is turned into a [`SiteConfig`](crate::SiteConfig) by
//! [`load_config`](crate::load_config).

use serde::Deserialize;

use crate::theme::{BrokenLinkPolicy, ColorModeKind, FooterStyle};
use crate::links::NavbarPosition;

/// Raw site declaration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawSiteConfig {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub url: Option<String>,
    pub base_url: Option<String>,
    pub organization_name: Option<String>,
    pub project_name: Option<String>,
    pub deployment_branch: Option<String>,
    pub favicon: Option<String>,
    pub trailing_slash: Option<bool>,
    pub on_broken_links: Option<BrokenLinkPolicy>,
    pub on_broken_markdown_links: Option<BrokenLinkPolicy>,
    pub i18n: RawI18n,
    pub docs: RawDocs,
    pub theme: RawTheme,
    pub search: Option<RawSearch>,
    pub navbar: RawNavbar,
    pub footer: RawFooter,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawI18n {
    pub default_locale: Option<String>,
    pub locales: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawDocs {
    pub sidebar_path: Option<String>,
    pub route_base_path: Option<String>,
    pub content_dir: Option<String>,
    pub edit_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawTheme {
    pub image: Option<String>,
    pub color_mode: RawColorMode,
    pub prism: RawPrism,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawColorMode {
    pub default_mode: Option<ColorModeKind>,
    pub respect_prefers_color_scheme: Option<bool>,
    pub disable_switch: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawPrism {
    pub additional_languages: Vec<String>,
}

/// Search section. All fields are required when the section is present.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSearch {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
    #[serde(default = "default_true")]
    pub contextual_search: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawNavbar {
    pub title: Option<String>,
    pub logo: Option<RawLogo>,
    pub items: Vec<RawNavbarItem>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawLogo {
    pub alt: String,
    pub src: String,
    pub src_dark: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawNavbarItem {
    pub label: String,
    pub to: Option<String>,
    pub href: Option<String>,
    #[serde(default)]
    pub position: NavbarPosition,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawFooter {
    pub style: Option<FooterStyle>,
    pub links: Vec<RawFooterGroup>,
    pub copyright: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawFooterGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<RawFooterLink>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawFooterLink {
    pub label: String,
    pub to: Option<String>,
    pub href: Option<String>,
}

fn default_true() -> bool {
    true
}
