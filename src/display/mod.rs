//! Terminal output formatting
//!
//! Formats quote lists and aggregate statistics for terminal display,
//! using the pt-BR currency form throughout.

use crate::models::{format_brl, Variety};
use crate::stats::AggregateSnapshot;

/// Format the per-variety statistics table plus the overall average line
pub fn format_stats_table(snapshots: &[(Variety, AggregateSnapshot)], overall: f64) -> String {
    let rows: Vec<[String; 5]> = snapshots
        .iter()
        .map(|(variety, s)| {
            [
                variety.label().to_string(),
                format_brl(s.average),
                format_brl(s.min),
                format_brl(s.max),
                s.count.to_string(),
            ]
        })
        .collect();

    let headers = ["Variety", "Average", "Min", "Max", "Count"];
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut output = String::new();
    output.push_str(&format_row(&headers.map(String::from), &widths));
    output.push_str(&format_row(&widths.map(|w| "-".repeat(w)), &widths));
    for row in &rows {
        output.push_str(&format_row(row, &widths));
    }

    output.push('\n');
    output.push_str(&format!("Média geral: {}\n", format_brl(overall)));
    output
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    // First column left-aligned, numeric columns right-aligned
    format!(
        "{:<w0$}  {:>w1$}  {:>w2$}  {:>w3$}  {:>w4$}\n",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        cells[4],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
        w4 = widths[4],
    )
}

/// Format one variety's entries with their 0-based positions
pub fn format_entry_list(variety: Variety, entries: &[f64]) -> String {
    if entries.is_empty() {
        return format!("No quotes recorded for {}.\n", variety.label());
    }

    let mut output = String::new();
    output.push_str(&format!("{} ({} quotes)\n", variety.label(), entries.len()));
    for (i, value) in entries.iter().enumerate() {
        output.push_str(&format!("  [{}] {}\n", i, format_brl(*value)));
    }
    output
}
