//! Aggregate statistics over quote lists
//!
//! Derived values only; nothing here is persisted. Aggregates are
//! recomputed from the entry lists on every read.

use serde::{Deserialize, Serialize};

/// Derived aggregate for one variety's entry list at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateSnapshot {
    pub count: usize,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl AggregateSnapshot {
    /// The snapshot of an empty list. All fields are zero by policy,
    /// never NaN or infinity.
    pub const fn empty() -> Self {
        Self {
            count: 0,
            average: 0.0,
            min: 0.0,
            max: 0.0,
        }
    }
}

impl Default for AggregateSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Compute count, average, min, and max over one entry list.
///
/// The empty list yields the all-zero snapshot. Plain summation is fine at
/// the expected list sizes (a handful of quotes per day).
pub fn compute(entries: &[f64]) -> AggregateSnapshot {
    if entries.is_empty() {
        return AggregateSnapshot::empty();
    }

    let count = entries.len();
    let sum: f64 = entries.iter().sum();
    let min = entries.iter().fold(f64::INFINITY, |acc, &v| acc.min(v));
    let max = entries.iter().fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));

    AggregateSnapshot {
        count,
        average: sum / count as f64,
        min,
        max,
    }
}

/// Overall average across varieties ("média geral").
///
/// Defined as the mean of the per-variety averages that are strictly
/// greater than zero; varieties with no entries never dilute the result.
/// Returns 0.0 when no variety qualifies.
pub fn overall_average(snapshots: &[AggregateSnapshot]) -> f64 {
    let positive: Vec<f64> = snapshots
        .iter()
        .map(|s| s.average)
        .filter(|&avg| avg > 0.0)
        .collect();

    if positive.is_empty() {
        return 0.0;
    }

    positive.iter().sum::<f64>() / positive.len() as f64
}
