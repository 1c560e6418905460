//! Insertion-ordered collection of part definitions keyed by fingerprint.

use std::collections::HashMap;

use u_cutlist_core::{Error, Result};

use crate::order::PartOrderStrategy;
use crate::part_def::PartDef;

/// Part definitions discovered during one scan.
#[derive(Debug, Clone, Default)]
pub struct PartDefs {
    parts: Vec<PartDef>,
    index: HashMap<String, usize>,
}

impl PartDefs {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the part for `id`, creating it on first sight.
    pub fn get_or_create(&mut self, id: &str) -> &mut PartDef {
        let next = self.parts.len();
        let position = *self.index.entry(id.to_string()).or_insert(next);
        if position == next {
            log::trace!("New part definition {}", id);
            self.parts.push(PartDef::new(id));
        }
        &mut self.parts[position]
    }

    /// Returns the part for `id`.
    pub fn get(&self, id: &str) -> Option<&PartDef> {
        self.index.get(id).map(|&i| &self.parts[i])
    }

    /// Returns the part for `id` mutably.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut PartDef> {
        match self.index.get(id) {
            Some(&i) => Some(&mut self.parts[i]),
            None => None,
        }
    }

    /// Returns the part for `id` or [`Error::NotFound`].
    pub fn require(&self, id: &str) -> Result<&PartDef> {
        self.get(id)
            .ok_or_else(|| Error::NotFound(format!("part definition {}", id)))
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if no part was created.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Parts in current order.
    pub fn iter(&self) -> impl Iterator<Item = &PartDef> {
        self.parts.iter()
    }

    /// Stable-sorts the parts with a strategy string.
    pub fn sort_by_strategy(&mut self, strategy: &str) {
        PartOrderStrategy::parse(strategy).sort(&mut self.parts);
        self.index = self
            .parts
            .iter()
            .enumerate()
            .map(|(i, part)| (part.id().to_string(), i))
            .collect();
    }

    /// Consumes the collection, returning parts in current order.
    pub fn into_vec(self) -> Vec<PartDef> {
        self.parts
    }
}
