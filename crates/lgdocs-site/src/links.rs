//! Internal link validation.

use lgdocs_config::{BrokenLinkPolicy, SiteConfig};
use lgdocs_nav::NavigationError;
use lgdocs_pages::StaticPage;

use crate::routes::RouteTable;

/// An internal link whose target is not an emitted route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrokenLink {
    /// Where the link is declared.
    pub location: String,
    /// Route it points to.
    pub target: String,
}

/// Find every navbar, footer and page link that does not resolve.
#[must_use]
pub fn find_broken_links(
    config: &SiteConfig,
    pages: &[StaticPage],
    routes: &RouteTable,
) -> Vec<BrokenLink> {
    let declared = config
        .declared_links()
        .filter_map(|(location, target)| {
            target
                .internal_route()
                .map(|route| (location, route.to_owned()))
        });
    let in_pages = pages.iter().flat_map(|page| {
        page.internal_links()
            .into_iter()
            .map(move |(label, route)| {
                (
                    format!("button '{label}' on page '{}'", page.route()),
                    route.to_owned(),
                )
            })
    });

    declared
        .chain(in_pages)
        .filter(|(_, route)| routes.resolve(route).is_none())
        .map(|(location, target)| BrokenLink { location, target })
        .collect()
}

/// Apply the configured policy to broken links.
///
/// # Errors
///
/// With [`BrokenLinkPolicy::Throw`], returns `NavigationError::UnresolvedLink`
/// for the first broken link.
pub(crate) fn enforce(policy: BrokenLinkPolicy, broken: Vec<BrokenLink>) -> Result<(), NavigationError> {
    match policy {
        BrokenLinkPolicy::Throw => match broken.into_iter().next() {
            Some(link) => Err(NavigationError::UnresolvedLink {
                location: link.location,
                target: link.target,
            }),
            None => Ok(()),
        },
        BrokenLinkPolicy::Warn => {
            for link in &broken {
                tracing::warn!(location = %link.location, target = %link.target, "Broken link");
            }
            Ok(())
        }
        BrokenLinkPolicy::Ignore => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use lgdocs_nav::{SidebarItem, SidebarsDeclaration};
    use lgdocs_pages::default_pages;

    use super::*;
    use crate::tests::test_config_with;

    fn routes(config: &SiteConfig) -> RouteTable {
        let tree = SidebarsDeclaration::new()
            .with_sidebar(
                "docs",
                vec![SidebarItem::category(
                    "Intro",
                    vec![SidebarItem::doc("getting-started")],
                )],
            )
            .build()
            .unwrap();
        RouteTable::build(config, &tree, &default_pages()).unwrap()
    }

    #[test]
    fn test_all_links_resolve() {
        let config = test_config_with(
            r#"
[[navbar.items]]
label = "Docs"
to = "/docs/getting-started"

[[navbar.items]]
label = "GitHub"
href = "https://github.com/logos-co"

[[footer.links]]
title = "More"
items = [{ label = "Privacy", to = "/privacy/" }]
"#,
        );
        let broken = find_broken_links(&config, &default_pages(), &routes(&config));
        assert!(broken.is_empty(), "{broken:?}");
    }

    #[test]
    fn test_unresolved_navbar_and_footer_links_reported() {
        let config = test_config_with(
            r#"
[[navbar.items]]
label = "Modules"
to = "/docs/modules/overview"

[[footer.links]]
title = "Documentation"
items = [{ label = "Logos Library", to = "/docs/liblogos/interacting-with-the-library" }]
"#,
        );
        let broken = find_broken_links(&config, &default_pages(), &routes(&config));
        assert_eq!(
            broken,
            vec![
                BrokenLink {
                    location: "navbar item 'Modules'".to_owned(),
                    target: "/docs/modules/overview".to_owned(),
                },
                BrokenLink {
                    location: "footer link 'Logos Library' in 'Documentation'".to_owned(),
                    target: "/docs/liblogos/interacting-with-the-library".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_page_buttons_checked() {
        let config = test_config_with("");
        let tree = SidebarsDeclaration::new()
            .with_sidebar("docs", vec![SidebarItem::doc("intro")])
            .build()
            .unwrap();
        let routes = RouteTable::build(&config, &tree, &default_pages()).unwrap();

        let broken = find_broken_links(&config, &default_pages(), &routes);
        assert_eq!(
            broken,
            vec![BrokenLink {
                location: "button 'Start Building' on page '/'".to_owned(),
                target: "/docs/getting-started".to_owned(),
            }]
        );
    }

    fn one_broken() -> Vec<BrokenLink> {
        vec![BrokenLink {
            location: "navbar item 'Docs'".to_owned(),
            target: "/docs/missing".to_owned(),
        }]
    }

    #[test]
    fn test_enforce_throw_fails() {
        let err = enforce(BrokenLinkPolicy::Throw, one_broken()).unwrap_err();
        assert!(matches!(err, NavigationError::UnresolvedLink { ref target, .. } if target == "/docs/missing"));
        assert!(err.to_string().contains("navbar item 'Docs'"));
    }

    #[test]
    fn test_enforce_warn_and_ignore_pass() {
        assert!(enforce(BrokenLinkPolicy::Warn, one_broken()).is_ok());
        assert!(enforce(BrokenLinkPolicy::Ignore, one_broken()).is_ok());
        assert!(enforce(BrokenLinkPolicy::Throw, Vec::new()).is_ok());
    }
}
