//! Declarative sidebar input.
//!
//! A `sidebars.toml` file maps sidebar names to item lists. Items are either a
//! bare document id or a table tagged with `type`:
//!
//! ```toml
//! [[docs]]
//! type = "category"
//! label = "SDKs"
//! collapsible = false
//! items = ["sdks/javascript-sdk", "sdks/nim-sdk", "sdks/cpp-sdk"]
//! ```
//!
//! Shape errors that serde can express (wrong types, unknown `type`) fail at
//! parse time. Everything else (empty labels, empty categories, duplicate
//! documents) is left to the tree builder so it can report node locations.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::NavigationError;
use crate::builder::TreeBuilder;
use crate::tree::NavigationTree;

/// One declared sidebar item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SidebarItem {
    /// Bare document id shorthand.
    Doc(String),
    /// Tagged table.
    Entry(SidebarEntry),
}

/// Tagged sidebar table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
pub enum SidebarEntry {
    /// Explicit document reference.
    Doc {
        /// Document identifier.
        id: String,
    },
    /// Group of items.
    Category {
        #[serde(default)]
        label: String,
        #[serde(default = "default_true")]
        collapsible: bool,
        #[serde(default)]
        collapsed: bool,
        #[serde(default)]
        items: Vec<SidebarItem>,
    },
}

fn default_true() -> bool {
    true
}

impl SidebarItem {
    /// Shorthand for a document reference.
    #[must_use]
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Doc(id.into())
    }

    /// Shorthand for a non-collapsible category.
    #[must_use]
    pub fn category(label: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self::Entry(SidebarEntry::Category {
            label: label.into(),
            collapsible: false,
            collapsed: false,
            items,
        })
    }
}

/// Parsed `sidebars.toml`: sidebar name to item list, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SidebarsDeclaration {
    sidebars: IndexMap<String, Vec<SidebarItem>>,
}

impl SidebarsDeclaration {
    /// Create an empty declaration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a sidebar.
    #[must_use]
    pub fn with_sidebar(mut self, name: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        self.sidebars.insert(name.into(), items);
        self
    }

    /// Load a declaration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::NotFound` if the file is missing, or an
    /// I/O or parse error.
    pub fn load(path: &Path) -> Result<Self, NavigationError> {
        if !path.exists() {
            return Err(NavigationError::NotFound(path.to_path_buf()));
        }
        tracing::debug!(path = %path.display(), "Loading sidebars");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a declaration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::Parse` on malformed input.
    pub fn from_toml_str(content: &str) -> Result<Self, NavigationError> {
        Ok(toml::from_str(content)?)
    }

    /// Build and validate every sidebar.
    ///
    /// Document identifiers are unique across all sidebars, since each one
    /// becomes exactly one route.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    pub fn build(&self) -> Result<NavigationTree, NavigationError> {
        let mut builder = TreeBuilder::new();
        let mut sidebars = Vec::with_capacity(self.sidebars.len());
        for (name, items) in &self.sidebars {
            if items.is_empty() {
                return Err(NavigationError::EmptySidebar(name.clone()));
            }
            let nodes = builder.build_sidebar(name, items)?;
            sidebars.push((name.clone(), nodes));
        }
        Ok(NavigationTree::new(sidebars))
    }
}
