//! Parsing of user-typed Brazilian decimal notation
//!
//! Quote values are typed the way Brazilian users write them: `,` as the
//! decimal separator and `.` as an optional thousands separator
//! (e.g. `1.376,72`).

use std::fmt;

/// Parse a quote value in Brazilian decimal notation.
///
/// Every `.` is stripped unconditionally as a thousands separator, then the
/// first `,` becomes the decimal point. Only finite results are accepted.
///
/// Known limitation of the dot-stripping policy, kept deliberately: plain
/// English-decimal input such as `"1234.56"` parses as `123456`. The input
/// grammar is Brazilian notation only.
///
/// # Examples
///
/// ```
/// use cotacao_cafe::models::parse_br_decimal;
///
/// assert_eq!(parse_br_decimal("1.234,56").unwrap(), 1234.56);
/// assert_eq!(parse_br_decimal("1400,50").unwrap(), 1400.50);
/// assert!(parse_br_decimal("abc").is_err());
/// ```
pub fn parse_br_decimal(input: &str) -> Result<f64, DecimalParseError> {
    let cleaned = input.trim().replace('.', "").replacen(',', ".", 1);

    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(DecimalParseError::InvalidFormat(input.trim().to_string())),
    }
}

/// Error type for decimal parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalParseError {
    InvalidFormat(String),
}

impl fmt::Display for DecimalParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalParseError::InvalidFormat(s) => write!(f, "Invalid decimal value: '{}'", s),
        }
    }
}

impl std::error::Error for DecimalParseError {}

impl From<DecimalParseError> for crate::error::CotacaoError {
    fn from(err: DecimalParseError) -> Self {
        Self::Parse(err.to_string())
    }
}
