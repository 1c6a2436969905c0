//! Roster importers.
//!
//! Importers reverse the exporters: a file in, a roster plus diagnostics
//! out. Malformed and out-of-range rows are skipped with an error entry;
//! stale derived fields are recomputed with a warning; nothing panics on
//! bad input.

use anyhow::{bail, Context, Result};
use ecm_core::{
    classify_by_capacity, Cell, CellRecord, ImportDiagnostics, Roster, SimCell,
};
use std::path::Path;

pub mod csv;
pub mod json;

#[cfg(test)]
mod tests;

pub use self::csv::{parse_bench_csv, parse_pack_csv};
pub use self::json::{parse_bench_json, parse_pack_json};

/// Wire format of a roster file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    /// Detect the format from the file extension.
    pub fn detect(path: &Path) -> Option<Format> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(Format::Csv),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Which record shape a roster file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterKind {
    /// Simulated bench cells, identified by `cell_name`
    Bench,
    /// Manually entered cells, identified by `cell_id`
    Pack,
}

impl RosterKind {
    /// Sniff the record shape from the file's header row (CSV) or the keys
    /// of its first record (JSON).
    pub fn detect(path: &Path, format: Format) -> Result<RosterKind> {
        match format {
            Format::Csv => {
                let mut reader = ::csv::Reader::from_path(path)
                    .with_context(|| format!("opening '{}'", path.display()))?;
                let headers = reader
                    .headers()
                    .with_context(|| format!("reading header row of '{}'", path.display()))?;
                if headers.iter().any(|h| h == "cell_id") {
                    Ok(RosterKind::Pack)
                } else if headers.iter().any(|h| h == "cell_name") {
                    Ok(RosterKind::Bench)
                } else {
                    bail!(
                        "'{}' has neither a cell_id nor a cell_name column",
                        path.display()
                    );
                }
            }
            Format::Json => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("reading '{}'", path.display()))?;
                let value: serde_json::Value = serde_json::from_str(&contents)
                    .with_context(|| format!("parsing '{}'", path.display()))?;
                let first = match value.as_array().and_then(|a| a.first()) {
                    Some(first) => first,
                    None => bail!(
                        "'{}' holds no records, cannot determine its roster kind",
                        path.display()
                    ),
                };
                if first.get("cell_id").is_some() {
                    Ok(RosterKind::Pack)
                } else if first.get("cell_name").is_some() {
                    Ok(RosterKind::Bench)
                } else {
                    bail!(
                        "records in '{}' carry neither cell_id nor cell_name",
                        path.display()
                    );
                }
            }
        }
    }
}

/// Result type containing the imported roster and collected diagnostics.
#[derive(Debug, Clone)]
pub struct ImportResult<C> {
    pub roster: Roster<C>,
    pub diagnostics: ImportDiagnostics,
}

/// Run each (row, record) pair through the shape's normalization and build
/// the roster from the survivors.
fn assemble<C: CellRecord>(
    items: Vec<(usize, C)>,
    normalize: fn(C, usize, &Roster<C>, &mut ImportDiagnostics) -> Option<C>,
    diag: &mut ImportDiagnostics,
) -> Roster<C> {
    let mut roster = Roster::new();
    for (row, cell) in items {
        if let Some(cell) = normalize(cell, row, &roster, diag) {
            roster.push(cell);
            diag.stats.cells += 1;
        }
    }
    roster
}

pub(crate) fn assemble_bench(
    items: Vec<(usize, SimCell)>,
    diag: &mut ImportDiagnostics,
) -> Roster<SimCell> {
    assemble(items, normalize_bench, diag)
}

pub(crate) fn assemble_pack(
    items: Vec<(usize, Cell)>,
    diag: &mut ImportDiagnostics,
) -> Roster<Cell> {
    assemble(items, normalize_pack, diag)
}

fn normalize_bench(
    mut cell: SimCell,
    row: usize,
    roster: &Roster<SimCell>,
    diag: &mut ImportDiagnostics,
) -> Option<SimCell> {
    if cell.cell_name.trim().is_empty() {
        diag.add_skipped_row("identity", "Record has a blank identifier", row);
        return None;
    }
    if !cell.capacity_pct.in_bounds() {
        diag.add_skipped_row(
            "range",
            &format!("Capacity {} outside 0..=100", cell.capacity_pct),
            row,
        );
        return None;
    }
    if !cell.efficiency_pct.in_bounds() {
        diag.issues.add_warning_with_entity(
            "range",
            &format!("Efficiency {} outside 0..=100", cell.efficiency_pct),
            &cell.cell_name,
        );
    }
    if roster.contains(&cell.cell_name) {
        diag.issues.add_warning_with_entity(
            "identity",
            "Duplicate identifier; remove will delete all matches",
            &cell.cell_name,
        );
    }

    let derived = classify_by_capacity(cell.capacity_pct);
    if cell.health_status != derived {
        diag.add_recomputed(
            &format!(
                "Stored health {} disagrees with capacity ({} expected)",
                cell.health_status, derived
            ),
            &cell.cell_name,
        );
        cell.health_status = derived;
    }
    Some(cell)
}

fn normalize_pack(
    mut cell: Cell,
    row: usize,
    roster: &Roster<Cell>,
    diag: &mut ImportDiagnostics,
) -> Option<Cell> {
    if cell.cell_id.trim().is_empty() {
        diag.add_skipped_row("identity", "Record has a blank identifier", row);
        return None;
    }
    if !cell.capacity_pct.in_bounds() {
        diag.add_skipped_row(
            "range",
            &format!("Capacity {} outside 0..=100", cell.capacity_pct),
            row,
        );
        return None;
    }
    if cell.voltage_v.value() < 0.0
        || cell.current_a.value() < 0.0
        || cell.cooling_temp_c.value() < 0.0
    {
        diag.add_skipped_row("range", "Negative electrical or cooling reading", row);
        return None;
    }
    if roster.contains(&cell.cell_id) {
        diag.issues.add_warning_with_entity(
            "identity",
            "Duplicate identifier; remove will delete all matches",
            &cell.cell_id,
        );
    }

    let derived_efficiency = Cell::derived_efficiency(cell.voltage_v, cell.current_a);
    if cell.efficiency_pct != derived_efficiency {
        diag.add_recomputed(
            &format!(
                "Stored efficiency {} disagrees with readings ({} expected)",
                cell.efficiency_pct, derived_efficiency
            ),
            &cell.cell_id,
        );
        cell.efficiency_pct = derived_efficiency;
    }
    let derived_health = ecm_core::classify(cell.capacity_pct, cell.cooling_temp_c);
    if cell.health_status != derived_health {
        diag.add_recomputed(
            &format!(
                "Stored health {} disagrees with readings ({} expected)",
                cell.health_status, derived_health
            ),
            &cell.cell_id,
        );
        cell.health_status = derived_health;
    }
    Some(cell)
}
