//! Built navigation tree with document lookups.

use std::collections::HashMap;

use serde::Serialize;

use crate::node::{NavigationNode, collect_document_ids};

/// A named, validated navigation forest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    name: String,
    items: Vec<NavigationNode>,
}

impl Sidebar {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn items(&self) -> &[NavigationNode] {
        &self.items
    }

    /// Document ids in render order.
    #[must_use]
    pub fn document_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        collect_document_ids(&self.items, &mut ids);
        ids
    }
}

/// Where a document sits in the tree.
#[derive(Clone, Debug)]
struct DocumentEntry {
    sidebar: usize,
    breadcrumbs: Vec<String>,
}

/// Every sidebar of one declaration, plus an index of documents.
///
/// Immutable once built. Document ids are unique across sidebars.
#[derive(Clone, Debug)]
pub struct NavigationTree {
    sidebars: Vec<Sidebar>,
    index: HashMap<String, DocumentEntry>,
}

impl NavigationTree {
    pub(crate) fn new(sidebars: Vec<(String, Vec<NavigationNode>)>) -> Self {
        let sidebars: Vec<Sidebar> = sidebars
            .into_iter()
            .map(|(name, items)| Sidebar { name, items })
            .collect();

        let mut index = HashMap::new();
        for (i, sidebar) in sidebars.iter().enumerate() {
            index_nodes(i, &sidebar.items, &mut Vec::new(), &mut index);
        }

        Self { sidebars, index }
    }

    /// Sidebars in name order.
    #[must_use]
    pub fn sidebars(&self) -> &[Sidebar] {
        &self.sidebars
    }

    /// All document ids, sidebar by sidebar, in render order.
    #[must_use]
    pub fn document_ids(&self) -> Vec<&str> {
        self.sidebars.iter().flat_map(Sidebar::document_ids).collect()
    }

    #[must_use]
    pub fn contains(&self, document_id: &str) -> bool {
        self.index.contains_key(document_id)
    }

    /// Number of referenced documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Name of the sidebar that references a document.
    #[must_use]
    pub fn sidebar_of(&self, document_id: &str) -> Option<&str> {
        self.index
            .get(document_id)
            .map(|entry| self.sidebars[entry.sidebar].name())
    }

    /// Labels of the categories enclosing a document, outermost first.
    #[must_use]
    pub fn breadcrumbs(&self, document_id: &str) -> Option<&[String]> {
        self.index
            .get(document_id)
            .map(|entry| entry.breadcrumbs.as_slice())
    }
}

fn index_nodes(
    sidebar: usize,
    nodes: &[NavigationNode],
    trail: &mut Vec<String>,
    index: &mut HashMap<String, DocumentEntry>,
) {
    for node in nodes {
        match node {
            NavigationNode::Document(doc) => {
                index.insert(
                    doc.id().to_owned(),
                    DocumentEntry {
                        sidebar,
                        breadcrumbs: trail.clone(),
                    },
                );
            }
            NavigationNode::Category(category) => {
                trail.push(category.label().to_owned());
                index_nodes(sidebar, category.children(), trail, index);
                trail.pop();
            }
        }
    }
}
