//! The closed set of tracked coffee varieties
//!
//! Exactly three varieties are quoted: Conilon, Arabica Rio, and Arabica
//! Duro. The set is fixed at compile time and never extended at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CotacaoError;

/// One of the three tracked coffee varieties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Variety {
    Conilon,
    ArabicaRio,
    ArabicaDuro,
}

impl Variety {
    /// All varieties, in the fixed display and export order
    pub const ALL: [Variety; 3] = [Variety::Conilon, Variety::ArabicaRio, Variety::ArabicaDuro];

    /// Storage key for this variety inside the persisted JSON blob
    pub const fn key(&self) -> &'static str {
        match self {
            Variety::Conilon => "conilon",
            Variety::ArabicaRio => "arabicaRio",
            Variety::ArabicaDuro => "arabicaDuro",
        }
    }

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Variety::Conilon => "Conilon",
            Variety::ArabicaRio => "Arabica Rio",
            Variety::ArabicaDuro => "Arabica Duro",
        }
    }

    /// Column prefix used in the CSV export schema
    pub const fn column_prefix(&self) -> &'static str {
        match self {
            Variety::Conilon => "conilon",
            Variety::ArabicaRio => "arabica_rio",
            Variety::ArabicaDuro => "arabica_duro",
        }
    }
}

impl fmt::Display for Variety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Variety {
    type Err = CotacaoError;

    /// Parse a user-supplied variety name.
    ///
    /// Case-insensitive; `-`, `_`, and spaces are ignored, so
    /// `arabica-rio`, `arabicaRio`, and `Arabica Rio` all resolve to the
    /// same variety.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "conilon" => Ok(Variety::Conilon),
            "arabicario" => Ok(Variety::ArabicaRio),
            "arabicaduro" => Ok(Variety::ArabicaDuro),
            _ => Err(CotacaoError::variety_not_found(s.trim())),
        }
    }
}
