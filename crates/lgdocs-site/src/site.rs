//! Site assembly and build.
//!
//! A [`Site`] is the validated combination of configuration, navigation tree
//! and static pages. Assembly fails fast: if any route collides or any
//! internal link is broken (under the `throw` policy), no `Site` exists and
//! nothing can be written.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use lgdocs_config::{BrokenLinkPolicy, SiteConfig, ThemeConfig, join_base};
use lgdocs_nav::{NavigationNode, NavigationTree, SidebarsDeclaration};
use lgdocs_pages::{BuildParams, PageRenderer, RenderError, StaticPage, default_pages};

use crate::SiteError;
use crate::content::ContentSource;
use crate::links::{enforce, find_broken_links};
use crate::routes::{RouteKind, RouteTable};

/// Filename of the sidebar data consumed by the external renderer.
pub const SIDEBARS_FILE: &str = "sidebars.json";
/// Filename of the route manifest.
pub const ROUTES_FILE: &str = "routes.json";

/// A document id mapped to its route and source file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedDocument {
    pub id: String,
    pub route: String,
    pub sidebar: String,
    /// Source file relative to the content directory.
    pub source: PathBuf,
    pub edit_url: Option<String>,
    pub breadcrumbs: Vec<String>,
}

/// Summary of a completed build.
#[derive(Debug, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: usize,
    pub documents: usize,
    pub routes: usize,
    pub output_dir: PathBuf,
}

/// Validated site.
#[derive(Debug)]
pub struct Site {
    config: SiteConfig,
    tree: NavigationTree,
    pages: Vec<StaticPage>,
    routes: RouteTable,
}

impl Site {
    /// Combine configuration, navigation tree and static pages.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::DuplicateRoute` on route collisions and
    /// `NavigationError::UnresolvedLink` for broken links when the policy is
    /// `throw`.
    pub fn assemble(
        config: SiteConfig,
        tree: NavigationTree,
        pages: Vec<StaticPage>,
    ) -> Result<Self, SiteError> {
        let routes = RouteTable::build(&config, &tree, &pages)?;
        let broken = find_broken_links(&config, &pages, &routes);
        enforce(config.on_broken_links, broken)?;

        tracing::info!(
            documents = tree.len(),
            pages = pages.len(),
            routes = routes.len(),
            "Site assembled"
        );

        Ok(Self {
            config,
            tree,
            pages,
            routes,
        })
    }

    /// Load the sidebars named by the configuration and assemble the site
    /// with the default static pages.
    ///
    /// # Errors
    ///
    /// Returns error if the sidebars file cannot be loaded or validated, or
    /// if assembly fails.
    pub fn load(config: SiteConfig) -> Result<Self, SiteError> {
        let tree = SidebarsDeclaration::load(&config.docs.sidebar_path)?.build()?;
        Self::assemble(config, tree, default_pages())
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn tree(&self) -> &NavigationTree {
        &self.tree
    }

    #[must_use]
    pub fn pages(&self) -> &[StaticPage] {
        &self.pages
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Map every document to its source file.
    ///
    /// # Errors
    ///
    /// Returns the first `RenderError` from the content source.
    pub fn resolve_documents(
        &self,
        source: &dyn ContentSource,
    ) -> Result<Vec<ResolvedDocument>, RenderError> {
        let content_dir_name = self
            .config
            .docs
            .content_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        self.routes
            .routes()
            .iter()
            .filter_map(|route| match &route.kind {
                RouteKind::Document { id, sidebar } => Some((route, id, sidebar)),
                RouteKind::Page => None,
            })
            .map(|(route, id, sidebar)| -> Result<ResolvedDocument, RenderError> {
                let file = source.resolve(id)?;
                let relative = file.to_string_lossy().replace('\\', "/");
                let edit_path = match &content_dir_name {
                    Some(dir) => format!("{dir}/{relative}"),
                    None => relative,
                };
                tracing::debug!(id = %id, source = %file.display(), "Resolved document");
                Ok(ResolvedDocument {
                    id: id.clone(),
                    route: route.path.clone(),
                    sidebar: sidebar.clone(),
                    edit_url: self.config.docs.edit_link(&edit_path),
                    source: file,
                    breadcrumbs: self.tree.breadcrumbs(id).map(<[String]>::to_vec).unwrap_or_default(),
                })
            })
            .collect()
    }

    /// Resolve documents, render static pages and write build output.
    ///
    /// Every document is resolved before anything is written, so a failed
    /// build leaves no partial output behind for missing content.
    ///
    /// # Errors
    ///
    /// Returns error if a document cannot be resolved, a page fails to
    /// render, or output cannot be written.
    pub fn build(
        &self,
        output_dir: &Path,
        params: BuildParams,
        source: &dyn ContentSource,
    ) -> Result<BuildReport, SiteError> {
        let documents = self.resolve_documents(source)?;

        let renderer = PageRenderer::new()?;
        let rendered = self
            .pages
            .iter()
            .map(|page| -> Result<(PathBuf, String), RenderError> {
                let html = renderer.render(page, &self.config, params)?;
                Ok((page.output_path(self.config.trailing_slash), html))
            })
            .collect::<Result<Vec<_>, RenderError>>()?;

        for (relative, html) in &rendered {
            write_file(&output_dir.join(relative), html)?;
        }

        let sidebars: IndexMap<&str, &[NavigationNode]> = self
            .tree
            .sidebars()
            .iter()
            .map(|sidebar| (sidebar.name(), sidebar.items()))
            .collect();
        write_json(&output_dir.join(SIDEBARS_FILE), &sidebars)?;

        let manifest = RouteManifest::new(self, &documents);
        write_json(&output_dir.join(ROUTES_FILE), &manifest)?;

        tracing::info!(
            output = %output_dir.display(),
            pages = rendered.len(),
            documents = documents.len(),
            "Build complete"
        );

        Ok(BuildReport {
            pages: rendered.len(),
            documents: documents.len(),
            routes: self.routes.len(),
            output_dir: output_dir.to_path_buf(),
        })
    }
}

/// Route manifest written to `routes.json`.
#[derive(Serialize)]
struct RouteManifest<'a> {
    title: &'a str,
    url: &'a str,
    base_url: &'a str,
    default_locale: &'a str,
    locales: &'a [String],
    trailing_slash: bool,
    on_broken_markdown_links: BrokenLinkPolicy,
    theme: &'a ThemeConfig,
    routes: Vec<ManifestRoute<'a>>,
}

#[derive(Serialize)]
struct ManifestRoute<'a> {
    /// Route with the base URL applied.
    path: String,
    #[serde(flatten)]
    kind: &'a RouteKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    edit_url: Option<&'a str>,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    breadcrumbs: &'a [String],
}

impl<'a> RouteManifest<'a> {
    fn new(site: &'a Site, documents: &'a [ResolvedDocument]) -> Self {
        let config = &site.config;
        let routes = site
            .routes
            .routes()
            .iter()
            .map(|route| {
                let document = match &route.kind {
                    RouteKind::Document { id, .. } => documents.iter().find(|d| &d.id == id),
                    RouteKind::Page => None,
                };
                let output = site
                    .pages
                    .iter()
                    .find(|page| page.route() == route.path)
                    .map(|page| {
                        page.output_path(config.trailing_slash)
                            .to_string_lossy()
                            .replace('\\', "/")
                    });
                ManifestRoute {
                    path: join_base(&config.base_url, &route.path),
                    kind: &route.kind,
                    output,
                    source: document.map(|d| d.source.to_string_lossy().replace('\\', "/")),
                    edit_url: document.and_then(|d| d.edit_url.as_deref()),
                    breadcrumbs: document
                        .map(|d| d.breadcrumbs.as_slice())
                        .unwrap_or_default(),
                }
            })
            .collect();

        Self {
            title: &config.title,
            url: &config.url,
            base_url: &config.base_url,
            default_locale: &config.i18n.default_locale,
            locales: &config.i18n.locales,
            trailing_slash: config.trailing_slash,
            on_broken_markdown_links: config.on_broken_markdown_links,
            theme: &config.theme,
            routes,
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), SiteError> {
    let to_error = |source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    std::fs::write(path, content).map_err(to_error)?;
    tracing::debug!(path = %path.display(), "Wrote output file");
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), SiteError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    write_file(path, &json)
}
