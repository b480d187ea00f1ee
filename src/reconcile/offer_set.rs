//! Offer identifiers known to a marketplace.

use std::collections::HashMap;

/// Identifiers currently listed on a marketplace, in first-seen order.
///
/// The set never changes after construction. Reconciliation keeps its own
/// visited flags (see [`Visited`]) so the same set can back several passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferIdSet {
    ids: Vec<String>,
    index: HashMap<String, usize>,
}

impl OfferIdSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an identifier. Returns `false` if it was already present.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id.clone(), self.ids.len());
        self.ids.push(id);
        true
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.ids.get(position).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for OfferIdSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = OfferIdSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// Per-pass membership flags over an [`OfferIdSet`].
#[derive(Debug)]
pub(crate) struct Visited<'a> {
    set: &'a OfferIdSet,
    flags: Vec<bool>,
}

impl<'a> Visited<'a> {
    pub(crate) fn new(set: &'a OfferIdSet) -> Self {
        Self {
            set,
            flags: vec![false; set.len()],
        }
    }

    /// Marks `id` as visited. Returns the canonical identifier only the first
    /// time it is seen, and `None` for unknown or already visited ids.
    pub(crate) fn visit(&mut self, id: &str) -> Option<&'a str> {
        let position = self.set.position(id)?;
        if self.flags[position] {
            return None;
        }
        self.flags[position] = true;
        self.set.get(position)
    }

    /// Identifiers never visited, in set order.
    pub(crate) fn remaining(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.set
            .iter()
            .zip(self.flags.iter())
            .filter(|(_, visited)| !**visited)
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
#[path = "offer_set_tests.rs"]
mod tests;
