// src/hierarchy/node.rs
//! Node handles and pre-order traversal.

use std::fmt;

use super::Hierarchy;
use crate::types::Employee;

/// A position in a [`Hierarchy`].
#[derive(Clone, Copy)]
pub struct Node<'h> {
    hierarchy: &'h Hierarchy<'h>,
    slot: usize,
}

impl<'h> Node<'h> {
    pub(crate) fn new(hierarchy: &'h Hierarchy<'h>, slot: usize) -> Self {
        Self { hierarchy, slot }
    }

    pub(crate) fn slot(&self) -> usize {
        self.slot
    }

    #[must_use]
    pub fn employee(&self) -> &'h Employee {
        self.hierarchy.store().at(self.slot)
    }

    /// Direct reports, in subordinate-list order.
    pub fn subordinates(&self) -> impl ExactSizeIterator<Item = Node<'h>> + 'h {
        let hierarchy = self.hierarchy;
        hierarchy
            .children_of(self.slot)
            .iter()
            .map(move |&slot| Node::new(hierarchy, slot))
    }

    #[must_use]
    pub fn subordinate_count(&self) -> usize {
        self.hierarchy.children_of(self.slot).len()
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.subordinate_count() == 0
    }

    /// Walks this subtree in pre-order, yielding each node with its distance
    /// from `self`.
    #[must_use]
    pub fn pre_order(&self) -> PreOrder<'h> {
        PreOrder {
            hierarchy: self.hierarchy,
            stack: vec![(self.slot, 0)],
        }
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.hierarchy, other.hierarchy) && self.slot == other.slot
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.employee().id())
            .field("subordinates", &self.subordinate_count())
            .finish()
    }
}

/// Iterative pre-order walk. Children are visited in subordinate-list order.
pub struct PreOrder<'h> {
    hierarchy: &'h Hierarchy<'h>,
    stack: Vec<(usize, usize)>,
}

impl<'h> Iterator for PreOrder<'h> {
    type Item = (Node<'h>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (slot, depth) = self.stack.pop()?;
        // Reversed so the first subordinate is popped next.
        self.stack.extend(
            self.hierarchy
                .children_of(slot)
                .iter()
                .rev()
                .map(|&child| (child, depth + 1)),
        );
        Some((Node::new(self.hierarchy, slot), depth))
    }
}
