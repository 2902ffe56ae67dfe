//! CSV export of the day's aggregate snapshot
//!
//! Produces a machine-consumable record: one header line and one data line,
//! `;`-delimited, 14 columns — the date, then `{avg, min, max, count}` per
//! variety in the fixed order, then the overall average. Numbers use an
//! invariant `.` decimal point with two digits, not the display formatter's
//! pt-BR comma.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{CotacaoError, CotacaoResult};
use crate::models::Variety;
use crate::stats::AggregateSnapshot;

/// Write the daily snapshot record (header line + data line).
///
/// `snapshots` must hold one snapshot per variety; the column order follows
/// `Variety::ALL` regardless of the slice's order.
pub fn write_daily_csv<W: Write>(
    writer: &mut W,
    date: NaiveDate,
    snapshots: &[(Variety, AggregateSnapshot)],
    overall: f64,
) -> CotacaoResult<()> {
    let mut header = vec!["data".to_string()];
    let mut row = vec![date.format("%Y-%m-%d").to_string()];

    for variety in Variety::ALL {
        let snapshot = snapshots
            .iter()
            .find(|(v, _)| *v == variety)
            .map(|(_, s)| *s)
            .ok_or_else(|| {
                CotacaoError::Export(format!("Missing snapshot for variety: {}", variety))
            })?;

        let prefix = variety.column_prefix();
        header.push(format!("{}_avg", prefix));
        header.push(format!("{}_min", prefix));
        header.push(format!("{}_max", prefix));
        header.push(format!("{}_count", prefix));

        row.push(format!("{:.2}", snapshot.average));
        row.push(format!("{:.2}", snapshot.min));
        row.push(format!("{:.2}", snapshot.max));
        row.push(snapshot.count.to_string());
    }

    header.push("media_geral".to_string());
    row.push(format!("{:.2}", overall));

    writeln!(writer, "{}", header.join(";"))
        .map_err(|e| CotacaoError::Export(e.to_string()))?;
    writeln!(writer, "{}", row.join(";")).map_err(|e| CotacaoError::Export(e.to_string()))?;

    Ok(())
}

/// Conventional export filename for a given date (`medias_<ISO-date>.csv`)
pub fn default_export_filename(date: NaiveDate) -> String {
    format!("medias_{}.csv", date.format("%Y-%m-%d"))
}
