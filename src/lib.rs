//! cotacao-cafe - Command-line tracker for daily coffee price quotes
//!
//! Records daily price quotes (in Brazilian Reais) for three coffee
//! varieties — Conilon, Arabica Rio, and Arabica Duro — computes
//! per-variety aggregates (count, average, min, max) plus the overall
//! average, persists everything between invocations, and exports the
//! day's snapshot as a semicolon-delimited CSV.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management and the storage namespace
//! - `error`: Custom error types
//! - `models`: Varieties, the quote book, decimal parsing, BRL formatting
//! - `stats`: Aggregate statistics (derived, never stored)
//! - `storage`: JSON file storage layer with lenient reads
//! - `services`: Business logic layer
//! - `display`: Terminal output formatting
//! - `export`: Daily CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use cotacao_cafe::config::paths::AppPaths;
//! use cotacao_cafe::storage::Storage;
//!
//! let paths = AppPaths::new()?;
//! let storage = Storage::new(paths, "default")?;
//! storage.load()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod stats;
pub mod storage;

pub use error::CotacaoError;
