//! Navbar and footer link sets.
//!
//! Links are declared with either `to` (an internal route such as
//! `/docs/getting-started`) or `href` (an absolute external URL). Exactly one
//! of the two must be present.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Destination of a navbar or footer link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "lowercase")]
pub enum LinkTarget {
    /// Route inside the site, always starting with `/`. Excludes the base URL.
    Internal(String),
    /// Absolute URL outside the site.
    External(String),
}

impl LinkTarget {
    /// Build a target from the `to`/`href` pair of a declaration.
    ///
    /// `field` names the declaration in error messages (e.g. `navbar.items[2]`).
    pub(crate) fn from_declaration(
        field: &str,
        to: Option<String>,
        href: Option<String>,
    ) -> Result<Self, ConfigError> {
        match (to, href) {
            (Some(to), None) => {
                if !to.starts_with('/') {
                    return Err(ConfigError::Validation(format!(
                        "{field}.to must start with '/', got '{to}'"
                    )));
                }
                Ok(Self::Internal(to))
            }
            (None, Some(href)) => {
                if !is_external_url(&href) {
                    return Err(ConfigError::Validation(format!(
                        "{field}.href must be an absolute http(s) or mailto URL, got '{href}'"
                    )));
                }
                Ok(Self::External(href))
            }
            (Some(_), Some(_)) => Err(ConfigError::Validation(format!(
                "{field} cannot set both 'to' and 'href'"
            ))),
            (None, None) => Err(ConfigError::Validation(format!(
                "{field} requires either 'to' or 'href'"
            ))),
        }
    }

    /// Internal route, if this is an internal link.
    #[must_use]
    pub fn internal_route(&self) -> Option<&str> {
        match self {
            Self::Internal(route) => Some(route),
            Self::External(_) => None,
        }
    }

    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }

    /// Value for an `href` attribute, with the base URL applied to internal routes.
    #[must_use]
    pub fn href(&self, base_url: &str) -> String {
        match self {
            Self::Internal(route) => join_base(base_url, route),
            Self::External(url) => url.clone(),
        }
    }
}

/// Prefix an internal route with the site base URL.
///
/// ```
/// use lgdocs_config::join_base;
///
/// assert_eq!(join_base("/logos-core-poc/", "/docs/intro"), "/logos-core-poc/docs/intro");
/// assert_eq!(join_base("/logos-core-poc/", "/"), "/logos-core-poc/");
/// assert_eq!(join_base("/", "/privacy"), "/privacy");
/// ```
#[must_use]
pub fn join_base(base_url: &str, route: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let route = route.trim_start_matches('/');
    format!("{base}/{route}")
}

pub(crate) fn is_external_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) => !host.is_empty() && !host.starts_with('/'),
        None => url.starts_with("mailto:") && url.len() > "mailto:".len(),
    }
}

/// Navbar side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    #[default]
    Left,
    Right,
}

/// One navbar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavbarItem {
    pub label: String,
    pub target: LinkTarget,
    pub position: NavbarPosition,
}

/// Navbar logo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Logo {
    pub alt: String,
    pub src: String,
    /// Variant shown in dark mode. Falls back to `src`.
    pub src_dark: Option<String>,
}

/// Navbar declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Navbar {
    /// Brand text next to the logo. Falls back to the site title.
    pub title: Option<String>,
    pub logo: Option<Logo>,
    /// Entries in declaration order.
    pub items: Vec<NavbarItem>,
}

impl Navbar {
    /// Entries on one side, preserving declaration order.
    pub fn items_at(&self, position: NavbarPosition) -> impl Iterator<Item = &NavbarItem> {
        self.items.iter().filter(move |item| item.position == position)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: String,
    pub target: LinkTarget,
}

/// Titled column of footer links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterGroup {
    pub title: String,
    pub items: Vec<FooterLink>,
}

/// Footer declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub style: crate::FooterStyle,
    pub links: Vec<FooterGroup>,
    /// Copyright line. `{year}` is replaced with the build year at render time.
    pub copyright: Option<String>,
}

impl Footer {
    /// Copyright line for a given build year.
    #[must_use]
    pub fn copyright_for(&self, year: u16) -> Option<String> {
        self.copyright
            .as_deref()
            .map(|template| template.replace("{year}", &year.to_string()))
    }
}
