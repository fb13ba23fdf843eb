//! Subgraph records.
//!
//! A subgraph owns only its attributes. Which nodes and subgraphs it
//! contains is recorded in the [`RelationSet`](super::RelationSet).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::attrs::AttributeSet;

/// A named attribute scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subgraph {
    name: String,
    attrs: AttributeSet,
}

impl Subgraph {
    /// Creates a subgraph without attributes.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attrs: AttributeSet::new(),
        }
    }

    /// Returns the subgraph name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the subgraph attributes.
    #[must_use]
    pub fn attrs(&self) -> &AttributeSet {
        &self.attrs
    }

    /// Returns the subgraph attributes for modification.
    pub fn attrs_mut(&mut self) -> &mut AttributeSet {
        &mut self.attrs
    }
}

/// All subgraphs of a graph, keyed by name, in registration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubgraphSet {
    subgraphs: IndexMap<String, Subgraph>,
}

impl SubgraphSet {
    /// Creates an empty subgraph set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subgraph. Existing subgraphs are left untouched.
    pub fn add(&mut self, name: &str) {
        if !self.subgraphs.contains_key(name) {
            self.subgraphs.insert(name.to_string(), Subgraph::new(name));
        }
    }

    /// Returns true if a subgraph with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.subgraphs.contains_key(name)
    }

    /// Gets a subgraph by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Subgraph> {
        self.subgraphs.get(name)
    }

    /// Gets a mutable subgraph by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Subgraph> {
        self.subgraphs.get_mut(name)
    }

    /// Returns the number of subgraphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subgraphs.len()
    }

    /// Returns true if there are no subgraphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subgraphs.is_empty()
    }

    /// Iterates over subgraphs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Subgraph> + '_ {
        self.subgraphs.values()
    }

    /// Returns all subgraphs sorted by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Subgraph> {
        let mut subgraphs: Vec<&Subgraph> = self.subgraphs.values().collect();
        subgraphs.sort_by(|a, b| a.name.cmp(&b.name));
        subgraphs
    }
}
