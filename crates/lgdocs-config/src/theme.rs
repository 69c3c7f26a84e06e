//! Theme, search and link-policy options.

use serde::{Deserialize, Serialize};

/// What the build does when an internal link does not resolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    /// Fail the build.
    #[default]
    Throw,
    /// Log a warning and continue.
    Warn,
    /// Continue silently.
    Ignore,
}

/// Light or dark color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModeKind {
    #[default]
    Light,
    Dark,
}

impl ColorModeKind {
    /// Value used for the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Footer color style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

impl FooterStyle {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Color mode options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColorMode {
    /// Mode used on first visit.
    pub default_mode: ColorModeKind,
    /// Follow the `prefers-color-scheme` media query instead of `default_mode`.
    pub respect_prefers_color_scheme: bool,
    /// Hide the light/dark toggle.
    pub disable_switch: bool,
}

impl Default for ColorMode {
    fn default() -> Self {
        Self {
            default_mode: ColorModeKind::Light,
            respect_prefers_color_scheme: false,
            disable_switch: false,
        }
    }
}

/// Theme options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    /// Social card image, relative to the static directory.
    pub image: Option<String>,
    pub color_mode: ColorMode,
    /// Extra languages for syntax highlighting, in declaration order.
    pub additional_languages: Vec<String>,
}

/// Hosted search options.
///
/// Indexing itself is done by the search provider; the site only carries
/// the credentials the client-side widget needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchConfig {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
    pub contextual_search: bool,
}
