//! Validation error container

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field-keyed validation messages.
///
/// A multi-map: a field key holds every message reported for it, in
/// insertion order per key and deterministic (sorted) order across keys.
/// Built fresh per save attempt and discarded after.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    entries: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field. Never overwrites earlier messages.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Union another result into this one, keeping both sides' messages.
    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, mut messages) in other.entries {
            self.entries.entry(field).or_default().append(&mut messages);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with at least one message
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// All messages recorded for a field, empty if the field is clean.
    pub fn messages(&self, field: &str) -> &[String] {
        self.entries.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.entries.iter()
    }
}
