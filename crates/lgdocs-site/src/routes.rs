//! Route table of everything the build emits.
//!
//! Routes are stored without the base URL (`/docs/getting-started`, `/privacy`).

use std::collections::HashMap;

use serde::Serialize;

use lgdocs_config::SiteConfig;
use lgdocs_nav::{NavigationError, NavigationTree};
use lgdocs_pages::StaticPage;

/// What produces a route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RouteKind {
    /// Static page rendered by this crate.
    Page,
    /// Content document rendered by the external renderer.
    #[serde(rename = "doc")]
    Document {
        /// Document identifier.
        id: String,
        /// Sidebar that lists the document.
        sidebar: String,
    },
}

/// One emitted route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: String,
    #[serde(flatten)]
    pub kind: RouteKind,
}

impl Route {
    fn owner(&self) -> String {
        match &self.kind {
            RouteKind::Page => format!("static page '{}'", self.path),
            RouteKind::Document { id, .. } => format!("document '{id}'"),
        }
    }
}

/// Ordered set of routes: static pages first, then documents in sidebar order.
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    index: HashMap<String, usize>,
}

impl RouteTable {
    /// Collect the routes of every static page and every document.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::DuplicateRoute` when two sources emit the
    /// same route.
    pub fn build(
        config: &SiteConfig,
        tree: &NavigationTree,
        pages: &[StaticPage],
    ) -> Result<Self, NavigationError> {
        let mut table = Self::default();
        for page in pages {
            table.insert(Route {
                path: page.route().to_owned(),
                kind: RouteKind::Page,
            })?;
        }
        for sidebar in tree.sidebars() {
            for id in sidebar.document_ids() {
                table.insert(Route {
                    path: config.docs.document_route(id),
                    kind: RouteKind::Document {
                        id: id.to_owned(),
                        sidebar: sidebar.name().to_owned(),
                    },
                })?;
            }
        }
        Ok(table)
    }

    fn insert(&mut self, route: Route) -> Result<(), NavigationError> {
        if let Some(&existing) = self.index.get(&route.path) {
            return Err(NavigationError::DuplicateRoute {
                route: route.path.clone(),
                first: self.routes[existing].owner(),
                second: route.owner(),
            });
        }
        self.index.insert(route.path.clone(), self.routes.len());
        self.routes.push(route);
        Ok(())
    }

    /// Route an internal link target points to.
    ///
    /// Query strings, fragments and a trailing slash are ignored.
    #[must_use]
    pub fn resolve(&self, target: &str) -> Option<&Route> {
        self.index
            .get(normalize_route(target))
            .map(|&i| &self.routes[i])
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Strip query, fragment and trailing slash from a route.
fn normalize_route(target: &str) -> &str {
    let end = target.find(['?', '#']).unwrap_or(target.len());
    let path = &target[..end];
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
