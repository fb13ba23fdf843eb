//! Bidirectional parent/child membership index.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Records which nodes and subgraphs are direct children of which scopes.
///
/// Both directions are updated together, so a one-sided relation is never
/// observable. A child may have several parents.
///
/// # Example
///
/// ```rust
/// use dotgraph_core::graph::RelationSet;
///
/// let mut relations = RelationSet::new();
/// relations.add("G", "cluster_0");
/// relations.add("cluster_0", "a");
/// assert_eq!(relations.children("cluster_0"), vec!["a"]);
/// assert_eq!(relations.parents("cluster_0"), vec!["G"]);
///
/// relations.remove("cluster_0", "a");
/// assert!(relations.children("cluster_0").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationSet {
    parent_to_children: IndexMap<String, IndexSet<String>>,
    child_to_parents: IndexMap<String, IndexSet<String>>,
}

impl RelationSet {
    /// Creates an empty relation set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `child` as a direct member of `parent`.
    pub fn add(&mut self, parent: &str, child: &str) {
        self.parent_to_children
            .entry(parent.to_string())
            .or_default()
            .insert(child.to_string());
        self.child_to_parents
            .entry(child.to_string())
            .or_default()
            .insert(parent.to_string());
    }

    /// Removes the membership of `child` in `parent`, if present.
    ///
    /// Buckets left empty are dropped so that add-then-remove restores the
    /// previous state exactly.
    pub fn remove(&mut self, parent: &str, child: &str) {
        unlink(&mut self.parent_to_children, parent, child);
        unlink(&mut self.child_to_parents, child, parent);
    }

    /// Returns true if `child` is a direct member of `parent`.
    #[must_use]
    pub fn contains(&self, parent: &str, child: &str) -> bool {
        self.parent_to_children
            .get(parent)
            .is_some_and(|children| children.contains(child))
    }

    /// Returns the direct children of `parent` in insertion order.
    #[must_use]
    pub fn children(&self, parent: &str) -> Vec<&str> {
        self.parent_to_children
            .get(parent)
            .map(|children| children.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns the direct parents of `child` in insertion order.
    #[must_use]
    pub fn parents(&self, child: &str) -> Vec<&str> {
        self.child_to_parents
            .get(child)
            .map(|parents| parents.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns true if no relation is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent_to_children.is_empty()
    }

    /// Iterates over all `(parent, child)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.parent_to_children.iter().flat_map(|(parent, children)| {
            children
                .iter()
                .map(move |child| (parent.as_str(), child.as_str()))
        })
    }
}

fn unlink(index: &mut IndexMap<String, IndexSet<String>>, key: &str, value: &str) {
    if let Some(bucket) = index.get_mut(key) {
        bucket.shift_remove(value);
        if bucket.is_empty() {
            index.shift_remove(key);
        }
    }
}
