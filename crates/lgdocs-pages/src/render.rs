//! Template rendering for static pages.
//!
//! Rendering is a pure function of the page, the site configuration and the
//! [`BuildParams`]. Nothing reads the clock, the environment or the
//! filesystem, so repeated renders produce byte-identical output.

use minijinja::Environment;
use serde::Serialize;

use lgdocs_config::{LinkTarget, NavbarPosition, SiteConfig, join_base};

use crate::RenderError;
use crate::html::format_value;
use crate::page::{CallToAction, Feature, Image, Landing, PageBody, PrivacyNotice, StaticPage};

const LAYOUT_TEMPLATE: &str = include_str!("../templates/layout.html");
const HOME_TEMPLATE: &str = include_str!("../templates/home.html");
const PRIVACY_TEMPLATE: &str = include_str!("../templates/privacy.html");

/// Explicit inputs of a build that are not part of the site declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildParams {
    /// Year shown in the footer copyright line.
    pub year: u16,
}

/// Render a static page with a fresh renderer.
///
/// # Errors
///
/// Returns `RenderError::Template` if a template fails to render.
pub fn render(
    page: &StaticPage,
    config: &SiteConfig,
    params: BuildParams,
) -> Result<String, RenderError> {
    PageRenderer::new()?.render(page, config, params)
}

/// Static page renderer with the templates preloaded.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Create a renderer with the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Template` if an embedded template does not parse.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_formatter(format_value);
        env.add_template("layout.html", LAYOUT_TEMPLATE)?;
        env.add_template("home.html", HOME_TEMPLATE)?;
        env.add_template("privacy.html", PRIVACY_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render a page to HTML.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Template` if the template fails to render.
    pub fn render(
        &self,
        page: &StaticPage,
        config: &SiteConfig,
        params: BuildParams,
    ) -> Result<String, RenderError> {
        let template_name = page.body().template_name();
        tracing::debug!(route = page.route(), template = template_name, "Rendering static page");

        let template = self.env.get_template(template_name)?;
        let base = config.base_url.as_str();
        let context = PageContext {
            site: SiteContext::new(config, params),
            page: PageMeta {
                full_title: match page.title() {
                    Some(title) => format!("{title} | {}", config.title),
                    None => config.title.clone(),
                },
                description: config.tagline.clone(),
                canonical: config.absolute_url(page.route()),
            },
            landing: match page.body() {
                PageBody::Landing(landing) => Some(LandingContext::new(landing, base)),
                PageBody::Privacy(_) => None,
            },
            privacy: match page.body() {
                PageBody::Privacy(notice) => Some(notice.into()),
                PageBody::Landing(_) => None,
            },
        };

        Ok(template.render(&context)?)
    }
}

#[derive(Serialize)]
struct PageContext {
    site: SiteContext,
    page: PageMeta,
    landing: Option<LandingContext>,
    privacy: Option<PrivacyContext>,
}

#[derive(Serialize)]
struct PageMeta {
    full_title: String,
    description: String,
    canonical: String,
}

#[derive(Serialize)]
struct LinkContext {
    label: String,
    href: String,
    external: bool,
}

impl LinkContext {
    fn new(label: &str, target: &LinkTarget, base: &str) -> Self {
        Self {
            label: label.to_owned(),
            href: target.href(base),
            external: target.is_external(),
        }
    }
}

#[derive(Serialize)]
struct FooterGroupContext {
    title: String,
    links: Vec<LinkContext>,
}

#[derive(Serialize)]
struct LogoContext {
    alt: String,
    src: String,
    src_dark: Option<String>,
}

#[derive(Serialize)]
struct SearchContext {
    app_id: String,
    api_key: String,
    index_name: String,
    contextual_search: bool,
}

/// Layout values derived from the site configuration.
#[derive(Serialize)]
struct SiteContext {
    lang: String,
    color_mode: &'static str,
    respect_prefers_color_scheme: bool,
    disable_switch: bool,
    home: String,
    brand: String,
    logo: Option<LogoContext>,
    favicon: Option<String>,
    image: Option<String>,
    search: Option<SearchContext>,
    navbar_left: Vec<LinkContext>,
    navbar_right: Vec<LinkContext>,
    footer_style: &'static str,
    footer_groups: Vec<FooterGroupContext>,
    copyright: Option<String>,
}

impl SiteContext {
    fn new(config: &SiteConfig, params: BuildParams) -> Self {
        let base = config.base_url.as_str();
        let asset = |path: &str| join_base(base, path);
        let navbar_links = |position: NavbarPosition| -> Vec<LinkContext> {
            config
                .navbar
                .items_at(position)
                .map(|item| LinkContext::new(&item.label, &item.target, base))
                .collect()
        };

        Self {
            lang: config.i18n.default_locale.clone(),
            color_mode: config.theme.color_mode.default_mode.as_str(),
            respect_prefers_color_scheme: config.theme.color_mode.respect_prefers_color_scheme,
            disable_switch: config.theme.color_mode.disable_switch,
            home: join_base(base, "/"),
            brand: config.navbar_title().to_owned(),
            logo: config.navbar.logo.as_ref().map(|logo| LogoContext {
                alt: logo.alt.clone(),
                src: asset(logo.src.as_str()),
                src_dark: logo.src_dark.as_deref().map(asset),
            }),
            favicon: config.favicon.as_deref().map(asset),
            image: config
                .theme
                .image
                .as_deref()
                .map(|image| config.absolute_url(image)),
            search: config.search.as_ref().map(|search| SearchContext {
                app_id: search.app_id.clone(),
                api_key: search.api_key.clone(),
                index_name: search.index_name.clone(),
                contextual_search: search.contextual_search,
            }),
            navbar_left: navbar_links(NavbarPosition::Left),
            navbar_right: navbar_links(NavbarPosition::Right),
            footer_style: config.footer.style.as_str(),
            footer_groups: config
                .footer
                .links
                .iter()
                .map(|group| FooterGroupContext {
                    title: group.title.clone(),
                    links: group
                        .items
                        .iter()
                        .map(|link| LinkContext::new(&link.label, &link.target, base))
                        .collect(),
                })
                .collect(),
            copyright: config.footer.copyright_for(params.year),
        }
    }
}

#[derive(Serialize)]
struct CallToActionContext {
    label: String,
    href: String,
    primary: bool,
}

impl CallToActionContext {
    fn new(cta: &CallToAction, base: &str) -> Self {
        Self {
            label: cta.label.clone(),
            href: cta.target.href(base),
            primary: cta.primary,
        }
    }
}

#[derive(Serialize)]
struct ImageContext {
    src: String,
    alt: String,
}

#[derive(Serialize)]
struct FeatureContext {
    title: String,
    description: String,
}

#[derive(Serialize)]
struct LandingContext {
    eyebrow: String,
    headline: String,
    lead: String,
    actions: Vec<CallToActionContext>,
    hero_image: Option<ImageContext>,
    intro_heading: String,
    intro_text: String,
    features: Vec<FeatureContext>,
    closing_heading: String,
    closing_text: String,
    closing_actions: Vec<CallToActionContext>,
}

impl LandingContext {
    fn new(landing: &Landing, base: &str) -> Self {
        let ctas = |actions: &[CallToAction]| -> Vec<CallToActionContext> {
            actions
                .iter()
                .map(|cta| CallToActionContext::new(cta, base))
                .collect()
        };
        Self {
            eyebrow: landing.eyebrow.clone(),
            headline: landing.headline.clone(),
            lead: landing.lead.clone(),
            actions: ctas(&landing.actions),
            hero_image: landing.hero_image.as_ref().map(|Image { src, alt }| ImageContext {
                src: join_base(base, src),
                alt: alt.clone(),
            }),
            intro_heading: landing.intro_heading.clone(),
            intro_text: landing.intro_text.clone(),
            features: landing
                .features
                .iter()
                .map(|Feature { title, description }| FeatureContext {
                    title: title.clone(),
                    description: description.clone(),
                })
                .collect(),
            closing_heading: landing.closing_heading.clone(),
            closing_text: landing.closing_text.clone(),
            closing_actions: ctas(&landing.closing_actions),
        }
    }
}

#[derive(Serialize)]
struct PrivacyContext {
    heading: String,
    paragraphs: Vec<String>,
}

impl From<&PrivacyNotice> for PrivacyContext {
    fn from(notice: &PrivacyNotice) -> Self {
        Self {
            heading: notice.heading.clone(),
            paragraphs: notice.paragraphs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::page::{Landing, PrivacyNotice};

    const CONFIG: &str = r#"
title = "Logos SDK"
tagline = "Compose secure, modular messaging apps with the Logos Core SDK."
url = "https://logos.example.com"
base_url = "/logos-core-poc/"
favicon = "img/favicon.ico"

[i18n]
default_locale = "en"

[theme]
image = "img/social-card.png"

[theme.color_mode]
default_mode = "dark"

[navbar]
title = "Logos"

[navbar.logo]
alt = "Logos Core"
src = "img/logos.png"

[[navbar.items]]
label = "Docs"
to = "/docs/getting-started"

[[navbar.items]]
label = "GitHub"
href = "https://github.com/logos-co"
position = "right"

[footer]
style = "dark"
copyright = "Copyright © {year} Logos."

[[footer.links]]
title = "Community"
items = [{ label = "Discord", href = "https://discord.gg/logosnetwork" }]
"#;

    fn config() -> SiteConfig {
        SiteConfig::from_toml_str(CONFIG).unwrap()
    }

    const PARAMS: BuildParams = BuildParams { year: 2026 };

    #[test]
    fn test_render_is_deterministic() {
        let config = config();
        let page = StaticPage::home(Landing::default());

        let first = render(&page, &config, PARAMS).unwrap();
        let second = render(&page, &config, PARAMS).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_render_year_is_explicit() {
        let config = config();
        let page = StaticPage::privacy(PrivacyNotice::default());

        let html_2025 = render(&page, &config, BuildParams { year: 2025 }).unwrap();
        let html_2026 = render(&page, &config, PARAMS).unwrap();

        assert!(html_2025.contains("Copyright © 2025 Logos."));
        assert!(html_2026.contains("Copyright © 2026 Logos."));
        assert_eq!(html_2025.replace("2025", "2026"), html_2026);
    }

    #[test]
    fn test_render_home_injects_tagline() {
        let html = render(&StaticPage::home(Landing::default()), &config(), PARAMS).unwrap();

        assert!(html.contains("<title>Logos SDK</title>"));
        assert!(html.contains(
            r#"<meta name="description" content="Compose secure, modular messaging apps with the Logos Core SDK.">"#
        ));
        assert!(html.contains("<h1>Build truly decentralized apps.</h1>"));
    }

    #[test]
    fn test_render_home_prefixes_internal_links() {
        let html = render(&StaticPage::home(Landing::default()), &config(), PARAMS).unwrap();

        assert!(html.contains(r#"href="/logos-core-poc/docs/getting-started""#));
        assert!(html.contains(r#"href="https://github.com/logos-co""#));
        assert!(html.contains(r#"src="/logos-core-poc/img/hero-illustration.svg""#));
        assert!(html.contains(r#"<link rel="icon" href="/logos-core-poc/img/favicon.ico">"#));
    }

    #[test]
    fn test_render_home_omits_empty_features() {
        let html = render(&StaticPage::home(Landing::default()), &config(), PARAMS).unwrap();
        assert!(!html.contains("landing__features"));

        let landing = Landing {
            features: vec![Feature {
                title: "Messaging".to_owned(),
                description: "Private by default.".to_owned(),
            }],
            ..Landing::default()
        };
        let html = render(&StaticPage::home(landing), &config(), PARAMS).unwrap();
        assert!(html.contains("<h3>Messaging</h3>"));
    }

    #[test]
    fn test_render_privacy_title_suffix() {
        let html = render(&StaticPage::privacy(PrivacyNotice::default()), &config(), PARAMS).unwrap();

        assert!(html.contains("<title>Privacy Policy | Logos SDK</title>"));
        assert!(html.contains("<h1>Privacy Policy</h1>"));
        assert!(html.contains(
            r#"<link rel="canonical" href="https://logos.example.com/logos-core-poc/privacy">"#
        ));
    }

    #[test]
    fn test_render_layout_uses_theme_and_navbar() {
        let html = render(&StaticPage::privacy(PrivacyNotice::default()), &config(), PARAMS).unwrap();

        assert!(html.contains(r#"<html lang="en" data-theme="dark">"#));
        assert!(html.contains(r#"<b class="navbar__title">Logos</b>"#));
        assert!(html.contains(r#"src="/logos-core-poc/img/logos.png""#));
        assert!(html.contains(
            r#"content="https://logos.example.com/logos-core-poc/img/social-card.png""#
        ));
        assert!(html.contains(r#"class="footer footer--dark""#));
        assert!(html.contains(">Discord</a>"));
    }

    #[test]
    fn test_render_escapes_content() {
        let notice = PrivacyNotice {
            heading: "Terms & <Conditions>".to_owned(),
            paragraphs: vec![],
        };
        let html = render(&StaticPage::privacy(notice), &config(), PARAMS).unwrap();
        assert!(html.contains("<h1>Terms &amp; &lt;Conditions&gt;</h1>"));
    }

    #[test]
    fn test_renderer_reusable_across_pages() {
        let renderer = PageRenderer::new().unwrap();
        let config = config();
        for page in crate::default_pages() {
            let html = renderer.render(&page, &config, PARAMS).unwrap();
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.trim_end().ends_with("</html>"));
        }
    }
}
