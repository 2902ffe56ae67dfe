//! Configuration and path management for cotacao-cafe

pub mod paths;

pub use paths::AppPaths;
