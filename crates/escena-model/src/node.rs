//! The recursive taxonomy tree.
//!
//! A node is identified by its id *within its sibling set*; the full reference
//! to a node is the id path from the domain root
//! (`["music", "strings", "session-musician"]`).
//!
//! ```text
//! artists (root)
//! └── music                 category
//!     └── strings           discipline
//!         └── session       role       suggested = [sound-engineering]
//!             └── studio    specialization
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::stat::StatFieldSpec;

/// One node of a domain taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyNode {
    /// Identifier, unique among siblings only.
    pub id: String,

    /// Display names keyed by lowercase locale tag.
    #[serde(default)]
    pub names: BTreeMap<String, String>,

    /// Structural children in presentation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TaxonomyNode>,

    /// Role annotation: disciplines/tags recommended alongside this node.
    /// These may live anywhere in the taxonomy; they are not children.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested: Vec<TaxonomyNode>,

    /// Role annotation: measurement fields recommended for this node.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stats: Vec<StatFieldSpec>,
}

impl TaxonomyNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            names: BTreeMap::new(),
            children: Vec::new(),
            suggested: Vec::new(),
            stats: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, locale: &str, name: impl Into<String>) -> Self {
        self.names.insert(locale.to_lowercase(), name.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: TaxonomyNode) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_suggested(mut self, node: TaxonomyNode) -> Self {
        self.suggested.push(node);
        self
    }

    #[must_use]
    pub fn with_stat(mut self, stat: StatFieldSpec) -> Self {
        self.stats.push(stat);
        self
    }

    /// Direct child with the given id.
    pub fn child(&self, id: &str) -> Option<&TaxonomyNode> {
        self.children.iter().find(|child| child.id == id)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Name stored for exactly this locale key, if any.
    pub fn name(&self, locale: &str) -> Option<&str> {
        self.names
            .get(locale)
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TaxonomyNode::subtree_len)
            .sum::<usize>()
    }
}
