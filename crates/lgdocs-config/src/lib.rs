//! Site configuration for lgdocs.
//!
//! Parses `lgdocs.toml` with serde, validates it, and produces an immutable
//! [`SiteConfig`] that is passed by reference to every consumer (tree
//! builder, page renderer, site assembly). There is no global configuration
//! state.
//!
//! Configuration files are discovered in the current directory and its
//! parents when no explicit path is given. CLI settings can be applied during
//! load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `url`
//! - `base_url`
//! - `docs.edit_url`
//! - `search.app_id`
//! - `search.api_key`

mod expand;
mod links;
mod raw;
mod theme;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub use links::{
    Footer, FooterGroup, FooterLink, LinkTarget, Logo, Navbar, NavbarItem, NavbarPosition,
    join_base,
};
pub use raw::{
    RawColorMode, RawDocs, RawFooter, RawFooterGroup, RawFooterLink, RawI18n, RawLogo, RawNavbar,
    RawNavbarItem, RawPrism, RawSearch, RawSiteConfig, RawTheme,
};
pub use theme::{
    BrokenLinkPolicy, ColorMode, ColorModeKind, FooterStyle, SearchConfig, ThemeConfig,
};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lgdocs.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the deployment URL.
    pub url: Option<String>,
    /// Override the base URL (e.g. for preview deployments).
    pub base_url: Option<String>,
    /// Override the default color mode.
    pub default_mode: Option<ColorModeKind>,
    /// Override the broken link policy.
    pub on_broken_links: Option<BrokenLinkPolicy>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// A required field is absent.
    #[error("Configuration error: {0} is required")]
    MissingField(&'static str),
    /// The locale list does not contain the default locale.
    #[error(
        "Configuration error: i18n.locales {locales:?} does not contain default locale '{default_locale}'"
    )]
    MissingDefaultLocale {
        /// Declared default locale.
        default_locale: String,
        /// Declared locale list.
        locales: Vec<String>,
    },
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`search.api_key`").
        field: String,
        /// Error message (e.g., "${`ALGOLIA_KEY`} not set").
        message: String,
    },
}

/// Locale settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct I18nConfig {
    pub default_locale: String,
    /// Non-empty, contains `default_locale`, no duplicates.
    pub locales: Vec<String>,
}

/// Documentation content options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocsConfig {
    /// Path to the sidebars declaration.
    pub sidebar_path: PathBuf,
    /// URL segment under which documents are served (without slashes).
    pub route_base_path: String,
    /// Directory holding the content documents.
    pub content_dir: PathBuf,
    /// Prefix for "edit this page" links.
    pub edit_url: Option<String>,
}

impl DocsConfig {
    /// Route of a document, e.g. `/docs/sdks/nim-sdk`.
    #[must_use]
    pub fn document_route(&self, document_id: &str) -> String {
        if self.route_base_path.is_empty() {
            format!("/{document_id}")
        } else {
            format!("/{}/{document_id}", self.route_base_path)
        }
    }

    /// Edit link for a document, if an edit URL is configured.
    #[must_use]
    pub fn edit_link(&self, source: &str) -> Option<String> {
        self.edit_url
            .as_deref()
            .map(|prefix| format!("{}/{}", prefix.trim_end_matches('/'), source))
    }
}

/// Immutable site configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    /// Deployment origin, e.g. `https://logos.example.com`.
    pub url: String,
    /// Path prefix of every route, starting and ending with `/`.
    pub base_url: String,
    pub organization_name: Option<String>,
    pub project_name: Option<String>,
    pub deployment_branch: Option<String>,
    pub favicon: Option<String>,
    /// Emit `route/index.html` instead of `route.html`.
    pub trailing_slash: bool,
    pub on_broken_links: BrokenLinkPolicy,
    pub on_broken_markdown_links: BrokenLinkPolicy,
    pub i18n: I18nConfig,
    pub docs: DocsConfig,
    pub theme: ThemeConfig,
    pub search: Option<SearchConfig>,
    pub navbar: Navbar,
    pub footer: Footer,
    /// Path to the config file (set when loaded from disk).
    pub config_path: Option<PathBuf>,
}

/// Assemble a [`SiteConfig`] from a raw declaration.
///
/// Applies defaults and shape validation. Relative paths stay relative; use
/// [`SiteConfig::load`] to resolve them against the config file directory.
///
/// # Errors
///
/// Returns `ConfigError::MissingField` when title, URL, base URL or default
/// locale are absent, `ConfigError::MissingDefaultLocale` when the locale
/// list does not contain the default locale, and `ConfigError::Validation`
/// for malformed values.
pub fn load_config(raw: RawSiteConfig) -> Result<SiteConfig, ConfigError> {
    let title = required(raw.title, "title")?;
    let url = required(raw.url, "url")?;
    let base_url = required(raw.base_url, "base_url")?;
    let i18n = resolve_i18n(raw.i18n)?;

    let docs = DocsConfig {
        sidebar_path: PathBuf::from(
            raw.docs.sidebar_path.as_deref().unwrap_or("sidebars.toml"),
        ),
        route_base_path: raw
            .docs
            .route_base_path
            .as_deref()
            .unwrap_or("docs")
            .trim_matches('/')
            .to_owned(),
        content_dir: PathBuf::from(raw.docs.content_dir.as_deref().unwrap_or("docs")),
        edit_url: raw.docs.edit_url,
    };

    let theme = ThemeConfig {
        image: raw.theme.image,
        color_mode: ColorMode {
            default_mode: raw.theme.color_mode.default_mode.unwrap_or_default(),
            respect_prefers_color_scheme: raw
                .theme
                .color_mode
                .respect_prefers_color_scheme
                .unwrap_or(false),
            disable_switch: raw.theme.color_mode.disable_switch.unwrap_or(false),
        },
        additional_languages: raw.theme.prism.additional_languages,
    };

    let search = raw.search.map(|s| SearchConfig {
        app_id: s.app_id,
        api_key: s.api_key,
        index_name: s.index_name,
        contextual_search: s.contextual_search,
    });

    let navbar = resolve_navbar(raw.navbar)?;
    let footer = resolve_footer(raw.footer)?;

    let config = SiteConfig {
        title,
        tagline: raw.tagline.unwrap_or_default(),
        url,
        base_url,
        organization_name: raw.organization_name,
        project_name: raw.project_name,
        deployment_branch: raw.deployment_branch,
        favicon: raw.favicon,
        trailing_slash: raw.trailing_slash.unwrap_or(false),
        on_broken_links: raw.on_broken_links.unwrap_or_default(),
        on_broken_markdown_links: raw.on_broken_markdown_links.unwrap_or(BrokenLinkPolicy::Warn),
        i18n,
        docs,
        theme,
        search,
        navbar,
        footer,
        config_path: None,
    };
    config.validate()?;
    Ok(config)
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingField(field)),
    }
}

fn resolve_i18n(raw: RawI18n) -> Result<I18nConfig, ConfigError> {
    let default_locale = required(raw.default_locale, "i18n.default_locale")?;
    let locales = raw
        .locales
        .unwrap_or_else(|| vec![default_locale.clone()]);

    if !locales.contains(&default_locale) {
        return Err(ConfigError::MissingDefaultLocale {
            default_locale,
            locales,
        });
    }

    let mut seen = HashSet::new();
    for locale in &locales {
        if !seen.insert(locale.as_str()) {
            return Err(ConfigError::Validation(format!(
                "i18n.locales contains '{locale}' more than once"
            )));
        }
    }

    Ok(I18nConfig {
        default_locale,
        locales,
    })
}

fn resolve_navbar(raw: RawNavbar) -> Result<Navbar, ConfigError> {
    let items = raw
        .items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let field = format!("navbar.items[{i}]");
            require_non_empty(&item.label, &format!("{field}.label"))?;
            Ok(NavbarItem {
                target: LinkTarget::from_declaration(&field, item.to, item.href)?,
                label: item.label,
                position: item.position,
            })
        })
        .collect::<Result<_, ConfigError>>()?;

    Ok(Navbar {
        title: raw.title,
        logo: raw.logo.map(|logo| Logo {
            alt: logo.alt,
            src: logo.src,
            src_dark: logo.src_dark,
        }),
        items,
    })
}

fn resolve_footer(raw: RawFooter) -> Result<Footer, ConfigError> {
    let mut links = Vec::with_capacity(raw.links.len());
    for (g, group) in raw.links.into_iter().enumerate() {
        let group_field = format!("footer.links[{g}]");
        require_non_empty(&group.title, &format!("{group_field}.title"))?;
        if group.items.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{group_field} ('{}') has no items",
                group.title
            )));
        }
        let items = group
            .items
            .into_iter()
            .enumerate()
            .map(|(i, link)| {
                let field = format!("{group_field}.items[{i}]");
                require_non_empty(&link.label, &format!("{field}.label"))?;
                Ok(FooterLink {
                    target: LinkTarget::from_declaration(&field, link.to, link.href)?,
                    label: link.label,
                })
            })
            .collect::<Result<_, ConfigError>>()?;
        links.push(FooterGroup {
            title: group.title,
            items,
        });
    }

    Ok(Footer {
        style: raw.style.unwrap_or_default(),
        links,
        copyright: raw.copyright,
    })
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme and name a host.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    if !links::is_external_url(url) {
        return Err(ConfigError::Validation(format!(
            "{field} '{url}' has no host"
        )));
    }
    Ok(())
}

impl SiteConfig {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise, searches
    /// for `lgdocs.toml` in the current directory and parents. Unlike server
    /// tools there is no meaningful default site, so a missing file is an
    /// error either way.
    ///
    /// CLI settings are applied after loading and path resolution, then the
    /// result is validated again.
    ///
    /// # Errors
    ///
    /// Returns error if no config file is found, parsing fails, or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) => path.to_path_buf(),
            None => Self::discover_config()
                .ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)))?,
        };
        if !path.exists() {
            return Err(ConfigError::NotFound(path));
        }

        let mut config = Self::load_from_file(&path)?;

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from TOML text without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion, or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut raw: RawSiteConfig = toml::from_str(content)?;
        expand_env_vars(&mut raw)?;
        load_config(raw)
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading site configuration");
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Resolve relative paths against the config file directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs.sidebar_path = config_dir.join(&self.docs.sidebar_path);
        self.docs.content_dir = config_dir.join(&self.docs.content_dir);
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(url) = &settings.url {
            self.url.clone_from(url);
        }
        if let Some(base_url) = &settings.base_url {
            self.base_url.clone_from(base_url);
        }
        if let Some(mode) = settings.default_mode {
            self.theme.color_mode.default_mode = mode;
        }
        if let Some(policy) = settings.on_broken_links {
            self.on_broken_links = policy;
        }
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`load_config`]. Link shape is validated while
    /// resolving the raw declaration; whether internal links resolve is
    /// checked later against the route table.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        require_http_url(&self.url, "url")?;
        if self.url.ends_with('/') {
            return Err(ConfigError::Validation(
                "url must not end with '/'; put path prefixes in base_url".to_owned(),
            ));
        }
        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "base_url must start and end with '/', got '{}'",
                self.base_url
            )));
        }
        if !self.i18n.locales.contains(&self.i18n.default_locale) {
            return Err(ConfigError::MissingDefaultLocale {
                default_locale: self.i18n.default_locale.clone(),
                locales: self.i18n.locales.clone(),
            });
        }
        if let Some(edit_url) = &self.docs.edit_url {
            require_http_url(edit_url, "docs.edit_url")?;
        }
        if self.docs.route_base_path.contains("..") {
            return Err(ConfigError::Validation(
                "docs.route_base_path cannot contain '..'".to_owned(),
            ));
        }
        if let Some(search) = &self.search {
            require_non_empty(&search.app_id, "search.app_id")?;
            require_non_empty(&search.api_key, "search.api_key")?;
            require_non_empty(&search.index_name, "search.index_name")?;
        }
        Ok(())
    }

    /// Absolute URL of a route, e.g. `https://logos.example.com/logos-core-poc/privacy`.
    #[must_use]
    pub fn absolute_url(&self, route: &str) -> String {
        format!("{}{}", self.url, join_base(&self.base_url, route))
    }

    /// Brand text shown in the navbar.
    #[must_use]
    pub fn navbar_title(&self) -> &str {
        self.navbar.title.as_deref().unwrap_or(&self.title)
    }

    /// All link targets declared in navbar and footer, with a location label.
    pub fn declared_links(&self) -> impl Iterator<Item = (String, &LinkTarget)> {
        let navbar = self
            .navbar
            .items
            .iter()
            .map(|item| (format!("navbar item '{}'", item.label), &item.target));
        let footer = self.footer.links.iter().flat_map(|group| {
            group.items.iter().map(move |link| {
                (
                    format!("footer link '{}' in '{}'", link.label, group.title),
                    &link.target,
                )
            })
        });
        navbar.chain(footer)
    }
}

/// Expand environment variable references in configuration strings.
fn expand_env_vars(raw: &mut RawSiteConfig) -> Result<(), ConfigError> {
    expand::expand_opt(&mut raw.url, "url")?;
    expand::expand_opt(&mut raw.base_url, "base_url")?;
    expand::expand_opt(&mut raw.docs.edit_url, "docs.edit_url")?;
    if let Some(search) = raw.search.as_mut() {
        search.app_id = expand::expand_env(&search.app_id, "search.app_id")?;
        search.api_key = expand::expand_env(&search.api_key, "search.api_key")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const MINIMAL: &str = r#"
title = "Logos SDK"
url = "https://logos.example.com"
base_url = "/logos-core-poc/"

[i18n]
default_locale = "en"
locales = ["en"]
"#;

    fn minimal_raw() -> RawSiteConfig {
        toml::from_str(MINIMAL).unwrap()
    }

    fn assert_validation_error(result: Result<SiteConfig, ConfigError>, expected: &[&str]) {
        let err = result.expect_err("expected validation to fail");
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected {
            assert!(msg.contains(s), "Expected error to contain '{s}', got: {msg}");
        }
    }

    #[test]
    fn test_load_config_minimal_applies_defaults() {
        let config = load_config(minimal_raw()).unwrap();
        assert_eq!(config.title, "Logos SDK");
        assert_eq!(config.tagline, "");
        assert_eq!(config.docs.route_base_path, "docs");
        assert_eq!(config.docs.sidebar_path, PathBuf::from("sidebars.toml"));
        assert_eq!(config.docs.content_dir, PathBuf::from("docs"));
        assert_eq!(config.on_broken_links, BrokenLinkPolicy::Throw);
        assert_eq!(config.on_broken_markdown_links, BrokenLinkPolicy::Warn);
        assert_eq!(config.theme.color_mode.default_mode, ColorModeKind::Light);
        assert!(!config.trailing_slash);
        assert!(config.navbar.items.is_empty());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_load_config_locale_en_default_en_succeeds() {
        let config = load_config(minimal_raw()).unwrap();
        assert_eq!(config.i18n.default_locale, "en");
        assert_eq!(config.i18n.locales, vec!["en".to_owned()]);
    }

    #[test]
    fn test_load_config_default_locale_not_in_locales_fails() {
        let mut raw = minimal_raw();
        raw.i18n.default_locale = Some("fr".to_owned());
        let err = load_config(raw).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingDefaultLocale { ref default_locale, .. } if default_locale == "fr"
        ));
        assert!(err.to_string().contains("'fr'"));
    }

    #[test]
    fn test_load_config_locales_default_to_default_locale() {
        let mut raw = minimal_raw();
        raw.i18n.locales = None;
        let config = load_config(raw).unwrap();
        assert_eq!(config.i18n.locales, vec!["en".to_owned()]);
    }

    #[test]
    fn test_load_config_duplicate_locale_fails() {
        let mut raw = minimal_raw();
        raw.i18n.locales = Some(vec!["en".to_owned(), "en".to_owned()]);
        assert_validation_error(load_config(raw), &["i18n.locales", "'en'"]);
    }

    #[test]
    fn test_load_config_missing_title() {
        let mut raw = minimal_raw();
        raw.title = None;
        let err = load_config(raw).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("title")));
    }

    #[test]
    fn test_load_config_blank_title_counts_as_missing() {
        let mut raw = minimal_raw();
        raw.title = Some("   ".to_owned());
        assert!(matches!(
            load_config(raw).unwrap_err(),
            ConfigError::MissingField("title")
        ));
    }

    #[test]
    fn test_load_config_missing_base_url() {
        let mut raw = minimal_raw();
        raw.base_url = None;
        assert!(matches!(
            load_config(raw).unwrap_err(),
            ConfigError::MissingField("base_url")
        ));
    }

    #[test]
    fn test_load_config_missing_default_locale() {
        let mut raw = minimal_raw();
        raw.i18n.default_locale = None;
        assert!(matches!(
            load_config(raw).unwrap_err(),
            ConfigError::MissingField("i18n.default_locale")
        ));
    }

    #[test]
    fn test_validate_url_scheme() {
        let mut raw = minimal_raw();
        raw.url = Some("logos.example.com".to_owned());
        assert_validation_error(load_config(raw), &["url", "http"]);
    }

    #[test]
    fn test_validate_url_trailing_slash() {
        let mut raw = minimal_raw();
        raw.url = Some("https://logos.example.com/".to_owned());
        assert_validation_error(load_config(raw), &["url", "base_url"]);
    }

    #[test]
    fn test_validate_base_url_slashes() {
        let mut raw = minimal_raw();
        raw.base_url = Some("/logos-core-poc".to_owned());
        assert_validation_error(load_config(raw), &["base_url", "'/logos-core-poc'"]);
    }

    #[test]
    fn test_validate_url_without_host() {
        for url in ["https://", "http:///docs"] {
            let mut raw = minimal_raw();
            raw.url = Some(url.to_owned());
            assert_validation_error(load_config(raw), &["url", "no host"]);
        }
    }

    #[test]
    fn test_validate_edit_url_without_host() {
        let mut raw = minimal_raw();
        raw.docs.edit_url = Some("https://".to_owned());
        assert_validation_error(load_config(raw), &["docs.edit_url", "no host"]);
    }

    #[test]
    fn test_validate_edit_url_scheme() {
        let mut raw = minimal_raw();
        raw.docs.edit_url = Some("github.com/logos-co".to_owned());
        assert_validation_error(load_config(raw), &["docs.edit_url"]);
    }

    #[test]
    fn test_validate_empty_search_key() {
        let config = SiteConfig::from_toml_str(&format!(
            "{MINIMAL}\n[search]\napp_id = \"app\"\napi_key = \"\"\nindex_name = \"logos\"\n"
        ));
        assert_validation_error(config, &["search.api_key"]);
    }

    #[test]
    fn test_navbar_items_resolved_in_order() {
        let config = SiteConfig::from_toml_str(&format!(
            r#"{MINIMAL}
[navbar]
title = "Logos"

[[navbar.items]]
label = "Docs"
to = "/docs/getting-started"

[[navbar.items]]
label = "GitHub"
href = "https://github.com/logos-co"
position = "right"
"#
        ))
        .unwrap();

        assert_eq!(config.navbar_title(), "Logos");
        assert_eq!(
            config.navbar.items,
            vec![
                NavbarItem {
                    label: "Docs".to_owned(),
                    target: LinkTarget::Internal("/docs/getting-started".to_owned()),
                    position: NavbarPosition::Left,
                },
                NavbarItem {
                    label: "GitHub".to_owned(),
                    target: LinkTarget::External("https://github.com/logos-co".to_owned()),
                    position: NavbarPosition::Right,
                },
            ]
        );
    }

    #[test]
    fn test_navbar_title_falls_back_to_site_title() {
        let config = load_config(minimal_raw()).unwrap();
        assert_eq!(config.navbar_title(), "Logos SDK");
    }

    #[test]
    fn test_navbar_empty_label_rejected() {
        let result = SiteConfig::from_toml_str(&format!(
            "{MINIMAL}\n[[navbar.items]]\nlabel = \"\"\nto = \"/\"\n"
        ));
        assert_validation_error(result, &["navbar.items[0].label"]);
    }

    #[test]
    fn test_footer_group_without_items_rejected() {
        let result = SiteConfig::from_toml_str(&format!(
            "{MINIMAL}\n[[footer.links]]\ntitle = \"More\"\n"
        ));
        assert_validation_error(result, &["footer.links[0]", "no items"]);
    }

    #[test]
    fn test_footer_link_target_reports_location() {
        let result = SiteConfig::from_toml_str(&format!(
            r#"{MINIMAL}
[[footer.links]]
title = "Community"
items = [
  {{ label = "Discord", href = "https://discord.gg/logosnetwork" }},
  {{ label = "Broken" }},
]
"#
        ));
        assert_validation_error(result, &["footer.links[0].items[1]"]);
    }

    #[test]
    fn test_declared_links_cover_navbar_and_footer() {
        let config = SiteConfig::from_toml_str(&format!(
            r#"{MINIMAL}
[[navbar.items]]
label = "Docs"
to = "/docs/getting-started"

[[footer.links]]
title = "Documentation"
items = [{{ label = "SDKs", to = "/docs/sdks/javascript-sdk" }}]
"#
        ))
        .unwrap();

        let links: Vec<_> = config
            .declared_links()
            .map(|(location, target)| (location, target.internal_route().map(str::to_owned)))
            .collect();
        assert_eq!(
            links,
            vec![
                (
                    "navbar item 'Docs'".to_owned(),
                    Some("/docs/getting-started".to_owned())
                ),
                (
                    "footer link 'SDKs' in 'Documentation'".to_owned(),
                    Some("/docs/sdks/javascript-sdk".to_owned())
                ),
            ]
        );
    }

    #[test]
    fn test_document_route_and_edit_link() {
        let mut raw = minimal_raw();
        raw.docs.route_base_path = Some("/docs/".to_owned());
        raw.docs.edit_url =
            Some("https://github.com/logos-co/logos-core-poc/edit/main/website/".to_owned());
        let config = load_config(raw).unwrap();
        assert_eq!(config.docs.document_route("sdks/nim-sdk"), "/docs/sdks/nim-sdk");
        assert_eq!(
            config.docs.edit_link("docs/sdks/nim-sdk.md").as_deref(),
            Some("https://github.com/logos-co/logos-core-poc/edit/main/website/docs/sdks/nim-sdk.md")
        );
    }

    #[test]
    fn test_document_route_without_base_path() {
        let mut raw = minimal_raw();
        raw.docs.route_base_path = Some(String::new());
        let config = load_config(raw).unwrap();
        assert_eq!(config.docs.document_route("intro"), "/intro");
    }

    #[test]
    fn test_absolute_url() {
        let config = load_config(minimal_raw()).unwrap();
        assert_eq!(
            config.absolute_url("/privacy"),
            "https://logos.example.com/logos-core-poc/privacy"
        );
    }

    #[test]
    fn test_expand_env_vars_search() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LGDOCS_TEST_ALGOLIA_KEY", "search-key");
            std::env::remove_var("LGDOCS_TEST_ALGOLIA_APP");
        }

        let config = SiteConfig::from_toml_str(&format!(
            r#"{MINIMAL}
[search]
app_id = "${{LGDOCS_TEST_ALGOLIA_APP:-YOUR_APP_ID}}"
api_key = "${{LGDOCS_TEST_ALGOLIA_KEY}}"
index_name = "logos"
"#
        ))
        .unwrap();

        let search = config.search.unwrap();
        assert_eq!(search.app_id, "YOUR_APP_ID");
        assert_eq!(search.api_key, "search-key");

        unsafe {
            std::env::remove_var("LGDOCS_TEST_ALGOLIA_KEY");
        }
    }

    #[test]
    fn test_load_resolves_paths_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lgdocs.toml");
        std::fs::write(&path, MINIMAL).unwrap();

        let config = SiteConfig::load(Some(&path), None).unwrap();

        assert_eq!(config.docs.sidebar_path, dir.path().join("sidebars.toml"));
        assert_eq!(config.docs.content_dir, dir.path().join("docs"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = SiteConfig::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_applies_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lgdocs.toml");
        std::fs::write(&path, MINIMAL).unwrap();

        let settings = CliSettings {
            base_url: Some("/preview/".to_owned()),
            default_mode: Some(ColorModeKind::Dark),
            ..CliSettings::default()
        };
        let config = SiteConfig::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.base_url, "/preview/");
        assert_eq!(config.theme.color_mode.default_mode, ColorModeKind::Dark);
        assert_eq!(config.url, "https://logos.example.com");
    }

    #[test]
    fn test_load_revalidates_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lgdocs.toml");
        std::fs::write(&path, MINIMAL).unwrap();

        let settings = CliSettings {
            base_url: Some("preview".to_owned()),
            ..CliSettings::default()
        };
        let err = SiteConfig::load(Some(&path), Some(&settings)).unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_load_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lgdocs.toml");
        std::fs::write(&path, "title = ").unwrap();
        let err = SiteConfig::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_bundled_logos_site() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../site/lgdocs.toml");
        let config = SiteConfig::load(Some(path.as_path()), None).unwrap();

        assert_eq!(
            config.theme.additional_languages,
            vec!["rust", "python", "cpp", "nim"]
        );
        assert_eq!(config.theme.color_mode.default_mode, ColorModeKind::Dark);
        assert_eq!(config.i18n.locales, vec!["en"]);
        assert_eq!(config.docs.route_base_path, "docs");
        assert_eq!(config.on_broken_markdown_links, BrokenLinkPolicy::Warn);
        assert!(config.docs.sidebar_path.ends_with("sidebars.toml"));
    }
}
