//! Land catalog lookup.
//!
//! A catalog answers one question: which lands satisfy a predicate, ordered by
//! land type. [`SqliteCatalog`](crate::database::SqliteCatalog) is the
//! persistent store; [`MemoryCatalog`] evaluates the predicate directly.

use crate::error::Result;
use crate::filter::FilterPredicate;
use crate::models::{CatalogEntry, LandRow};

/// Source of lands for a selection
pub trait LandCatalog {
    /// Lands matching the predicate, ordered by type ascending
    fn lookup(&self, predicate: &FilterPredicate) -> Result<Vec<LandRow>>;
}

/// Catalog held in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryCatalog {
    entries: Vec<CatalogEntry>,
}

impl MemoryCatalog {
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LandCatalog for MemoryCatalog {
    fn lookup(&self, predicate: &FilterPredicate) -> Result<Vec<LandRow>> {
        let mut rows: Vec<LandRow> = self
            .entries
            .iter()
            .filter(|entry| predicate.matches(entry))
            .map(LandRow::from)
            .collect();
        // stable: lands of the same type keep catalog order
        rows.sort_by(|a, b| a.land_type.cmp(&b.land_type));
        log::debug!("Memory catalog matched {} of {} lands", rows.len(), self.len());
        Ok(rows)
    }
}
