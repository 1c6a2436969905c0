//! Shared report and export helpers for the session commands.

use anyhow::{Context, Result};
use ecm_core::{CellReadings, CellRecord, Roster};
use ecm_io::exporters::{export_roster_to_csv, export_roster_to_json};
use ecm_viz::{flat_table, health_histogram, status_lines, FlatTable, TableRecord};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tabwriter::TabWriter;
use tracing::info;

/// Print a flat table with aligned columns.
pub fn print_table(table: &FlatTable) -> Result<()> {
    let mut writer = TabWriter::new(std::io::stdout());
    writeln!(writer, "{}", table.columns.join("\t"))?;
    for row in &table.rows {
        writeln!(writer, "{}", row.join("\t"))?;
    }
    writer.flush().context("flushing table output")?;
    Ok(())
}

/// Print the standard roster report: table, status lines, histogram, stats.
pub fn print_report<C>(roster: &Roster<C>) -> Result<()>
where
    C: CellRecord + CellReadings + TableRecord,
{
    print_table(&flat_table(roster))?;

    if !roster.is_empty() {
        println!();
        for line in status_lines(roster) {
            println!("{}", line);
        }
    }

    println!();
    println!("Health overview:");
    for bin in health_histogram(roster) {
        println!("  {}: {}", bin.health_status, bin.count);
    }
    println!("{}", roster.stats());
    Ok(())
}

/// Write the requested export files, if any.
pub fn export_outputs<C>(
    roster: &Roster<C>,
    csv: Option<&Path>,
    json: Option<&Path>,
) -> Result<()>
where
    C: CellRecord + Serialize,
{
    if let Some(path) = csv {
        export_roster_to_csv(roster, path)?;
        info!("Wrote delimited roster to {}", path.display());
    }
    if let Some(path) = json {
        export_roster_to_json(roster, path)?;
        info!("Wrote structured roster to {}", path.display());
    }
    Ok(())
}
