//! Structured-records importer.

use super::{assemble_bench, assemble_pack, ImportResult};
use anyhow::{Context, Result};
use ecm_core::{Cell, ImportDiagnostics, SimCell};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read the whole record array. Unlike delimited text, a JSON file either
/// parses as a record array or not at all; per-record recovery happens in
/// normalization.
fn read_records<C: DeserializeOwned>(
    path: &Path,
    diag: &mut ImportDiagnostics,
) -> Result<Vec<(usize, C)>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading '{}'", path.display()))?;
    let records: Vec<C> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing records in '{}'", path.display()))?;
    diag.stats.rows = records.len();
    Ok(records
        .into_iter()
        .enumerate()
        .map(|(i, cell)| (i + 1, cell))
        .collect())
}

/// Import a simulated-bench roster from structured records.
pub fn parse_bench_json(path: impl AsRef<Path>) -> Result<ImportResult<SimCell>> {
    let mut diagnostics = ImportDiagnostics::new();
    let items = read_records(path.as_ref(), &mut diagnostics)?;
    let roster = assemble_bench(items, &mut diagnostics);
    Ok(ImportResult { roster, diagnostics })
}

/// Import a manually entered roster from structured records.
pub fn parse_pack_json(path: impl AsRef<Path>) -> Result<ImportResult<Cell>> {
    let mut diagnostics = ImportDiagnostics::new();
    let items = read_records(path.as_ref(), &mut diagnostics)?;
    let roster = assemble_pack(items, &mut diagnostics);
    Ok(ImportResult { roster, diagnostics })
}
