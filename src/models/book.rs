//! The full set of recorded quotes, one ordered list per variety
//!
//! This is the persisted state: a mapping from each of the three varieties
//! to its insertion-ordered list of quote values. Entries carry no identity
//! beyond their position; duplicates are allowed.

use serde::{Deserialize, Serialize};

use super::variety::Variety;

/// All recorded quote values, keyed by variety
///
/// Serializes to the storage schema: a JSON object with exactly the three
/// variety keys, each mapping to an array of numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteBook {
    #[serde(default)]
    pub conilon: Vec<f64>,
    #[serde(default, rename = "arabicaRio")]
    pub arabica_rio: Vec<f64>,
    #[serde(default, rename = "arabicaDuro")]
    pub arabica_duro: Vec<f64>,
}

impl QuoteBook {
    /// Borrow the entry list for one variety
    pub fn entries(&self, variety: Variety) -> &[f64] {
        match variety {
            Variety::Conilon => &self.conilon,
            Variety::ArabicaRio => &self.arabica_rio,
            Variety::ArabicaDuro => &self.arabica_duro,
        }
    }

    /// Mutably borrow the entry list for one variety
    pub fn entries_mut(&mut self, variety: Variety) -> &mut Vec<f64> {
        match variety {
            Variety::Conilon => &mut self.conilon,
            Variety::ArabicaRio => &mut self.arabica_rio,
            Variety::ArabicaDuro => &mut self.arabica_duro,
        }
    }

    /// Empty every variety's list
    pub fn clear(&mut self) {
        self.conilon.clear();
        self.arabica_rio.clear();
        self.arabica_duro.clear();
    }

    /// True when no variety has any entries
    pub fn is_empty(&self) -> bool {
        Variety::ALL.iter().all(|v| self.entries(*v).is_empty())
    }
}
