// src/hierarchy/mod.rs
//! The reporting tree reconstructed from a [`RecordStore`].
//!
//! A [`Hierarchy`] borrows the store it was built from, so the store cannot
//! change while the tree is in use. Edges are slot indices into the store.

pub mod builder;
pub mod node;

use serde::{Deserialize, Serialize};

pub use self::builder::build;
pub use self::node::{Node, PreOrder};
use crate::store::RecordStore;

/// How the builder treats the set of employees without a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootPolicy {
    /// Exactly one top-level employee is required and every employee must be
    /// reachable from it.
    #[default]
    Strict,
    /// The last top-level employee in store order becomes the root. A store
    /// with none yields a hierarchy without a root.
    LastSeen,
}

/// The built tree.
#[derive(Debug, Clone)]
pub struct Hierarchy<'a> {
    store: &'a RecordStore,
    subordinates: Vec<Vec<usize>>,
    root: Option<usize>,
}

impl<'a> Hierarchy<'a> {
    pub(crate) fn new(
        store: &'a RecordStore,
        subordinates: Vec<Vec<usize>>,
        root: Option<usize>,
    ) -> Self {
        Self {
            store,
            subordinates,
            root,
        }
    }

    /// Returns the root, or `None` when no top-level employee exists.
    #[must_use]
    pub fn root(&self) -> Option<Node<'_>> {
        self.root.map(|slot| Node::new(self, slot))
    }

    /// Returns the node for `id`, if stored.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<Node<'_>> {
        self.store.slot_of(id).map(|slot| Node::new(self, slot))
    }

    #[must_use]
    pub fn store(&self) -> &'a RecordStore {
        self.store
    }

    /// Total number of reporting edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.subordinates.iter().map(Vec::len).sum()
    }

    pub(crate) fn children_of(&self, slot: usize) -> &[usize] {
        &self.subordinates[slot]
    }
}
