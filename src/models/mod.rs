//! Core data models for cotacao-cafe

pub mod book;
pub mod brl;
pub mod decimal;
pub mod variety;

pub use book::QuoteBook;
pub use brl::format_brl;
pub use decimal::{parse_br_decimal, DecimalParseError};
pub use variety::Variety;
