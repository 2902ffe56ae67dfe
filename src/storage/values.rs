//! Quote values repository for JSON storage
//!
//! One repository per profile, backed by a single JSON blob. The read path
//! is deliberately lenient: a missing file, unparseable JSON, or a
//! wrong-shaped variety value all degrade to empty lists instead of
//! surfacing an error. The write path reports failures explicitly and
//! leaves the in-memory state authoritative for the session.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::Value;

use crate::error::CotacaoError;
use crate::models::{QuoteBook, Variety};

use super::file_io::write_json_atomic;

pub struct ValuesRepository {
    path: PathBuf,
    book: RwLock<QuoteBook>,
}

impl ValuesRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            book: RwLock::new(QuoteBook::default()),
        }
    }

    /// Path of the backing values file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted book from disk.
    ///
    /// Read failures never propagate: whatever cannot be read or does not
    /// match the expected shape is replaced with empty lists.
    pub fn load(&self) -> Result<(), CotacaoError> {
        let loaded = read_book_lenient(&self.path);

        let mut book = self
            .book
            .write()
            .map_err(|e| CotacaoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *book = loaded;
        Ok(())
    }

    /// Persist the current book as one blob, overwriting any prior value.
    ///
    /// Failures are returned, not swallowed; the caller decides whether to
    /// warn or ignore.
    pub fn save(&self) -> Result<(), CotacaoError> {
        let book = self
            .book
            .read()
            .map_err(|e| CotacaoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*book)
    }

    /// Get a copy of one variety's entry list, in insertion order
    pub fn entries(&self, variety: Variety) -> Result<Vec<f64>, CotacaoError> {
        let book = self
            .book
            .read()
            .map_err(|e| CotacaoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(book.entries(variety).to_vec())
    }

    /// Append a value to the end of one variety's list
    pub fn append(&self, variety: Variety, value: f64) -> Result<usize, CotacaoError> {
        let mut book = self
            .book
            .write()
            .map_err(|e| CotacaoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let entries = book.entries_mut(variety);
        entries.push(value);
        Ok(entries.len() - 1)
    }

    /// Remove the entry at a 0-based position; later entries shift down.
    ///
    /// Returns the removed value. An out-of-range index is an error and
    /// leaves the list untouched.
    pub fn remove_at(&self, variety: Variety, index: usize) -> Result<f64, CotacaoError> {
        let mut book = self
            .book
            .write()
            .map_err(|e| CotacaoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let entries = book.entries_mut(variety);
        if index >= entries.len() {
            return Err(CotacaoError::entry_not_found(variety.label(), index));
        }

        Ok(entries.remove(index))
    }

    /// Empty every variety's list
    pub fn reset(&self) -> Result<(), CotacaoError> {
        let mut book = self
            .book
            .write()
            .map_err(|e| CotacaoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        book.clear();
        Ok(())
    }
}

/// Read a book from disk, degrading anything unreadable to empty lists
fn read_book_lenient(path: &Path) -> QuoteBook {
    let Ok(contents) = fs::read_to_string(path) else {
        return QuoteBook::default();
    };

    match serde_json::from_str::<Value>(&contents) {
        Ok(value) => book_from_value(&value),
        Err(_) => QuoteBook::default(),
    }
}

/// Extract the three variety lists from an untrusted JSON value.
///
/// Each variety degrades independently: a missing key, a non-array value,
/// or an array with non-numeric elements yields an empty list for that
/// variety without affecting the others.
fn book_from_value(value: &Value) -> QuoteBook {
    QuoteBook {
        conilon: number_list(value.get(Variety::Conilon.key())),
        arabica_rio: number_list(value.get(Variety::ArabicaRio.key())),
        arabica_duro: number_list(value.get(Variety::ArabicaDuro.key())),
    }
}

fn number_list(value: Option<&Value>) -> Vec<f64> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item.as_f64() {
            Some(n) if n.is_finite() => out.push(n),
            _ => return Vec::new(),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo_in(temp_dir: &TempDir) -> ValuesRepository {
        ValuesRepository::new(temp_dir.path().join("values.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        repo.load().unwrap();
        for variety in Variety::ALL {
            assert!(repo.entries(variety).unwrap().is_empty());
        }
    }

    #[test]
    fn test_save_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        repo.append(Variety::Conilon, 5.0).unwrap();
        repo.save().unwrap();

        let reloaded = repo_in(&temp_dir);
        reloaded.load().unwrap();
        assert_eq!(reloaded.entries(Variety::Conilon).unwrap(), vec![5.0]);
        assert!(reloaded.entries(Variety::ArabicaRio).unwrap().is_empty());
        assert!(reloaded.entries(Variety::ArabicaDuro).unwrap().is_empty());
    }

    #[test]
    fn test_load_invalid_json_degrades_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        fs::write(repo.path(), "not json at all").unwrap();

        repo.load().unwrap();
        for variety in Variety::ALL {
            assert!(repo.entries(variety).unwrap().is_empty());
        }
    }

    #[test]
    fn test_load_wrong_shape_degrades_per_variety() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        fs::write(
            repo.path(),
            r#"{"conilon": "oops", "arabicaRio": [7.5], "arabicaDuro": [1, "x"]}"#,
        )
        .unwrap();

        repo.load().unwrap();
        assert!(repo.entries(Variety::Conilon).unwrap().is_empty());
        assert_eq!(repo.entries(Variety::ArabicaRio).unwrap(), vec![7.5]);
        assert!(repo.entries(Variety::ArabicaDuro).unwrap().is_empty());
    }

    #[test]
    fn test_remove_at_shifts_later_entries() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        for value in [10.0, 20.0, 30.0] {
            repo.append(Variety::ArabicaDuro, value).unwrap();
        }

        let removed = repo.remove_at(Variety::ArabicaDuro, 1).unwrap();
        assert_eq!(removed, 20.0);
        assert_eq!(repo.entries(Variety::ArabicaDuro).unwrap(), vec![10.0, 30.0]);
    }

    #[test]
    fn test_remove_at_out_of_range_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        repo.append(Variety::Conilon, 1.0).unwrap();

        let err = repo.remove_at(Variety::Conilon, 5).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(repo.entries(Variety::Conilon).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_reset_then_reload_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        repo.append(Variety::Conilon, 1.0).unwrap();
        repo.append(Variety::ArabicaRio, 2.0).unwrap();
        repo.save().unwrap();

        repo.reset().unwrap();
        repo.save().unwrap();

        let reloaded = repo_in(&temp_dir);
        reloaded.load().unwrap();
        for variety in Variety::ALL {
            assert!(reloaded.entries(variety).unwrap().is_empty());
        }
    }
}
