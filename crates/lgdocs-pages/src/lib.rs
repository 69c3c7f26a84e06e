//! Static page rendering for lgdocs.
//!
//! Static pages (the landing page, the privacy page) live outside the
//! navigation tree. Each one is rendered from an embedded template plus the
//! [`SiteConfig`](lgdocs_config::SiteConfig):
//!
//! ```
//! use lgdocs_config::SiteConfig;
//! use lgdocs_pages::{BuildParams, PrivacyNotice, StaticPage, render};
//!
//! let config = SiteConfig::from_toml_str(
//!     r#"
//! title = "Logos SDK"
//! url = "https://logos.example.com"
//! base_url = "/"
//! [i18n]
//! default_locale = "en"
//! "#,
//! )?;
//! let page = StaticPage::privacy(PrivacyNotice::default());
//! let html = render(&page, &config, BuildParams { year: 2026 })?;
//! assert!(html.contains("<h1>Privacy Policy</h1>"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod html;
mod page;
mod render;

pub use error::RenderError;
pub use html::escape_html;
pub use page::{
    CallToAction, Feature, Image, Landing, PageBody, PrivacyNotice, StaticPage, default_pages,
};
pub use render::{BuildParams, PageRenderer, render};
