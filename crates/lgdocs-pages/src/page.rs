//! Static page definitions.
//!
//! A [`StaticPage`] is a standalone page outside the navigation tree. Its
//! content is fixed when the page value is built; rendering only combines it
//! with the site configuration.

use std::path::PathBuf;

use lgdocs_config::LinkTarget;

/// Link rendered as a button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub label: String,
    pub target: LinkTarget,
    /// Primary buttons are filled, others outlined.
    pub primary: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    /// Path relative to the site root, e.g. `/img/hero.svg`.
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// Landing page copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Landing {
    pub eyebrow: String,
    pub headline: String,
    pub lead: String,
    pub actions: Vec<CallToAction>,
    pub hero_image: Option<Image>,
    pub intro_heading: String,
    pub intro_text: String,
    /// Feature cards. The section is omitted when empty.
    pub features: Vec<Feature>,
    pub closing_heading: String,
    pub closing_text: String,
    pub closing_actions: Vec<CallToAction>,
}

impl Default for Landing {
    fn default() -> Self {
        Self {
            eyebrow: "LOGOS SDK".to_owned(),
            headline: "Build truly decentralized apps.".to_owned(),
            lead: "Logos gives you a modular ecosystem to build and run truly decentralized \
                   applications."
                .to_owned(),
            actions: vec![
                CallToAction {
                    label: "Start Building".to_owned(),
                    target: LinkTarget::Internal("/docs/getting-started".to_owned()),
                    primary: true,
                },
                CallToAction {
                    label: "View on GitHub".to_owned(),
                    target: LinkTarget::External("https://github.com/logos-co".to_owned()),
                    primary: false,
                },
            ],
            hero_image: Some(Image {
                src: "/img/hero-illustration.svg".to_owned(),
                alt: "Logos SDK illustration".to_owned(),
            }),
            intro_heading: "Why Logos".to_owned(),
            intro_text: "From secure identity to storage, the Logos SDK ecosystem gives you the \
                         tools to build truly decentralized applications."
                .to_owned(),
            features: Vec::new(),
            closing_heading: "Bring Logos into your app".to_owned(),
            closing_text: "Explore the SDK reference and tutorials on how to integrate Logos \
                           into your application."
                .to_owned(),
            closing_actions: vec![CallToAction {
                label: "Explore the SDK".to_owned(),
                target: LinkTarget::Internal("/".to_owned()),
                primary: true,
            }],
        }
    }
}

/// Privacy page copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivacyNotice {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

impl Default for PrivacyNotice {
    fn default() -> Self {
        Self {
            heading: "Privacy Policy".to_owned(),
            paragraphs: vec![
                "This is a placeholder privacy policy for the Logos SDK documentation site. \
                 Replace this text with the appropriate policy before going live."
                    .to_owned(),
            ],
        }
    }
}

/// Page content, one variant per template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageBody {
    Landing(Landing),
    Privacy(PrivacyNotice),
}

impl PageBody {
    pub(crate) fn template_name(&self) -> &'static str {
        match self {
            Self::Landing(_) => "home.html",
            Self::Privacy(_) => "privacy.html",
        }
    }
}

/// Standalone page rendered once at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticPage {
    route: String,
    title: Option<String>,
    body: PageBody,
}

impl StaticPage {
    /// Landing page at `/`.
    #[must_use]
    pub fn home(landing: Landing) -> Self {
        Self {
            route: "/".to_owned(),
            title: None,
            body: PageBody::Landing(landing),
        }
    }

    /// Privacy page at `/privacy`.
    #[must_use]
    pub fn privacy(notice: PrivacyNotice) -> Self {
        Self {
            route: "/privacy".to_owned(),
            title: Some(notice.heading.clone()),
            body: PageBody::Privacy(notice),
        }
    }

    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn body(&self) -> &PageBody {
        &self.body
    }

    /// File the page is written to, relative to the output directory.
    ///
    /// `/` is always `index.html`. Other routes become `route.html`, or
    /// `route/index.html` when `trailing_slash` is set.
    #[must_use]
    pub fn output_path(&self, trailing_slash: bool) -> PathBuf {
        let route = self.route.trim_matches('/');
        if route.is_empty() {
            PathBuf::from("index.html")
        } else if trailing_slash {
            PathBuf::from(route).join("index.html")
        } else {
            PathBuf::from(format!("{route}.html"))
        }
    }

    /// Internal routes linked from the page content, with the button label.
    #[must_use]
    pub fn internal_links(&self) -> Vec<(&str, &str)> {
        match &self.body {
            PageBody::Landing(landing) => landing
                .actions
                .iter()
                .chain(&landing.closing_actions)
                .filter_map(|cta| cta.target.internal_route().map(|r| (cta.label.as_str(), r)))
                .collect(),
            PageBody::Privacy(_) => Vec::new(),
        }
    }
}

/// The landing page and the privacy page with their default copy.
#[must_use]
pub fn default_pages() -> Vec<StaticPage> {
    vec![
        StaticPage::home(Landing::default()),
        StaticPage::privacy(PrivacyNotice::default()),
    ]
}
