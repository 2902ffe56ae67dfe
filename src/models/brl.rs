//! Brazilian Real display formatting
//!
//! Renders amounts the way pt-BR locales do: `R$ ` prefix, `.` thousands
//! grouping, `,` decimal separator, always two decimal digits.

/// Format a value as a Brazilian Real currency string.
///
/// ```
/// use cotacao_cafe::models::format_brl;
///
/// assert_eq!(format_brl(1400.5), "R$ 1.400,50");
/// assert_eq!(format_brl(0.0), "R$ 0,00");
/// ```
pub fn format_brl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, group_thousands(whole), frac)
}

/// Insert `.` thousands separators into a whole-number amount
fn group_thousands(mut n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }

    let mut groups = Vec::new();
    while n >= 1000 {
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.push(n.to_string());
    groups.reverse();
    groups.join(".")
}
