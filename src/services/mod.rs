//! Business logic layer

pub mod quotes;

pub use quotes::QuoteService;
