//! Quote CLI commands
//!
//! Each handler mutates and/or reads through the service layer, then
//! persists. A persistence write failure is a warning, never a hard error:
//! the in-memory state already reflects the change and the session
//! continues (old on-disk state simply wins next time).

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::display::{format_entry_list, format_stats_table};
use crate::error::CotacaoResult;
use crate::export::{default_export_filename, write_daily_csv};
use crate::models::{format_brl, parse_br_decimal, Variety};
use crate::services::QuoteService;
use crate::storage::Storage;

/// Persist after a mutation, demoting a write failure to a stderr warning
fn persist_or_warn(service: &QuoteService) {
    if let Err(err) = service.persist() {
        eprintln!("warning: could not persist quotes: {}", err);
        eprintln!("warning: the change applies to this session only");
    }
}

/// `add <variety> <value>` — parse a Brazilian-notation value and append it
pub fn handle_add(storage: &Storage, raw_variety: &str, raw_value: &str) -> CotacaoResult<()> {
    let variety: Variety = raw_variety.parse()?;
    let value = parse_br_decimal(raw_value)?;

    let service = QuoteService::new(storage);
    let position = service.append(variety, value)?;
    persist_or_warn(&service);

    println!(
        "Added {} to {} (entry [{}]).",
        format_brl(value),
        variety.label(),
        position
    );
    Ok(())
}

/// `list [variety]` — show recorded quotes with their positions
pub fn handle_list(storage: &Storage, raw_variety: Option<&str>) -> CotacaoResult<()> {
    let service = QuoteService::new(storage);

    let varieties: Vec<Variety> = match raw_variety {
        Some(raw) => vec![raw.parse()?],
        None => Variety::ALL.to_vec(),
    };

    for (i, variety) in varieties.iter().enumerate() {
        let entries = service.entries(*variety)?;
        print!("{}", format_entry_list(*variety, &entries));
        if i < varieties.len() - 1 {
            println!();
        }
    }
    Ok(())
}

/// `remove <variety> <index>` — remove one quote by its 0-based position
pub fn handle_remove(storage: &Storage, raw_variety: &str, index: usize) -> CotacaoResult<()> {
    let variety: Variety = raw_variety.parse()?;

    let service = QuoteService::new(storage);
    let removed = service.remove_at(variety, index)?;
    persist_or_warn(&service);

    println!(
        "Removed {} from {} (was entry [{}]).",
        format_brl(removed),
        variety.label(),
        index
    );
    Ok(())
}

/// `stats` — per-variety aggregates plus the overall average
pub fn handle_stats(storage: &Storage) -> CotacaoResult<()> {
    let service = QuoteService::new(storage);
    let snapshots = service.all_snapshots()?;
    let overall = service.overall_average()?;

    print!("{}", format_stats_table(&snapshots, overall));
    Ok(())
}

/// `export [--output <path>]` — write the day's snapshot as CSV
pub fn handle_export(storage: &Storage, output: Option<&Path>) -> CotacaoResult<()> {
    let service = QuoteService::new(storage);
    let snapshots = service.all_snapshots()?;
    let overall = service.overall_average()?;

    let today = Local::now().date_naive();
    let path: PathBuf = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_export_filename(today)),
    };

    let file = File::create(&path)
        .map_err(|e| crate::error::CotacaoError::Export(format!("{}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);
    write_daily_csv(&mut writer, today, &snapshots, overall)?;

    println!("Exported daily averages to {}", path.display());
    Ok(())
}

/// `reset [--yes]` — clear every recorded quote
pub fn handle_reset(storage: &Storage, yes: bool) -> CotacaoResult<()> {
    if !yes {
        println!("This clears every recorded quote for profile '{}'.", storage.profile());
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    let service = QuoteService::new(storage);
    service.reset_all()?;
    persist_or_warn(&service);

    println!("All quotes cleared.");
    Ok(())
}

/// `config` — show resolved paths and profile
pub fn handle_config(storage: &Storage) -> CotacaoResult<()> {
    let paths = storage.paths();
    println!("cotacao-cafe configuration");
    println!("==========================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data directory: {}", paths.data_dir().display());
    println!("Profile:        {}", storage.profile());
    println!("Values file:    {}", storage.values.path().display());
    Ok(())
}
