//! Quote service
//!
//! Provides the mutation and read operations over the per-variety quote
//! lists. Mutations act on the in-memory book; `persist` pushes the whole
//! book through the storage layer and returns the outcome explicitly, so
//! the caller decides whether a write failure is a warning or an error.

use crate::error::CotacaoResult;
use crate::models::Variety;
use crate::stats::{self, AggregateSnapshot};
use crate::storage::Storage;

/// Service for recording and aggregating quotes
pub struct QuoteService<'a> {
    storage: &'a Storage,
}

impl<'a> QuoteService<'a> {
    /// Create a new quote service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append a quote to the end of one variety's list.
    ///
    /// Returns the 0-based position of the new entry. List growth is
    /// unbounded by design.
    pub fn append(&self, variety: Variety, value: f64) -> CotacaoResult<usize> {
        self.storage.values.append(variety, value)
    }

    /// Remove the entry at a 0-based position, shifting later entries down.
    ///
    /// Returns the removed value; an out-of-range index is an error and the
    /// list is left untouched.
    pub fn remove_at(&self, variety: Variety, index: usize) -> CotacaoResult<f64> {
        self.storage.values.remove_at(variety, index)
    }

    /// Empty every variety's list
    pub fn reset_all(&self) -> CotacaoResult<()> {
        self.storage.values.reset()
    }

    /// Write the current book to disk.
    ///
    /// Called after every mutation; the in-memory book stays authoritative
    /// for this session even when the write fails.
    pub fn persist(&self) -> CotacaoResult<()> {
        self.storage.values.save()
    }

    /// One variety's entries, in insertion order
    pub fn entries(&self, variety: Variety) -> CotacaoResult<Vec<f64>> {
        self.storage.values.entries(variety)
    }

    /// Aggregate snapshot for one variety, recomputed from the live list
    pub fn snapshot(&self, variety: Variety) -> CotacaoResult<AggregateSnapshot> {
        Ok(stats::compute(&self.entries(variety)?))
    }

    /// Snapshots for every variety, in the fixed display order
    pub fn all_snapshots(&self) -> CotacaoResult<Vec<(Variety, AggregateSnapshot)>> {
        Variety::ALL
            .iter()
            .map(|&variety| Ok((variety, self.snapshot(variety)?)))
            .collect()
    }

    /// Overall average across the populated varieties ("média geral")
    pub fn overall_average(&self) -> CotacaoResult<f64> {
        let snapshots: Vec<AggregateSnapshot> = self
            .all_snapshots()?
            .into_iter()
            .map(|(_, snapshot)| snapshot)
            .collect();
        Ok(stats::overall_average(&snapshots))
    }
}
