// src/store.rs
//! The record store: employees keyed by id.
//!
//! Entities live in a slot vector so the hierarchy can refer to them by index.
//! Iteration follows first-insertion order; re-adding an id overwrites the
//! entity in its existing slot.

use std::collections::HashMap;

use crate::types::Employee;

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    slots: Vec<Employee>,
    index: HashMap<String, usize>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `employee`, replacing any entity already stored under its id.
    pub fn add(&mut self, employee: Employee) {
        match self.index.get(employee.id()) {
            Some(&slot) => {
                tracing::debug!(id = employee.id(), "overwriting existing employee");
                self.slots[slot] = employee;
            }
            None => {
                self.index.insert(employee.id().to_string(), self.slots.len());
                self.slots.push(employee);
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.slot_of(id).map(|slot| &self.slots[slot])
    }

    /// Returns the full id → employee lookup.
    #[must_use]
    pub fn all(&self) -> HashMap<&str, &Employee> {
        self.slots.iter().map(|e| (e.id(), e)).collect()
    }

    /// Iterates employees in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.slots.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn slot_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn at(&self, slot: usize) -> &Employee {
        &self.slots[slot]
    }
}

impl Extend<Employee> for RecordStore {
    fn extend<I: IntoIterator<Item = Employee>>(&mut self, iter: I) {
        for employee in iter {
            self.add(employee);
        }
    }
}

impl FromIterator<Employee> for RecordStore {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
