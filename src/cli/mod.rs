//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main` with the service layer.

pub mod quotes;

pub use quotes::{
    handle_add, handle_config, handle_export, handle_list, handle_remove, handle_reset,
    handle_stats,
};
