//! Delimited-text importer.

use super::{assemble_bench, assemble_pack, ImportResult};
use anyhow::{Context, Result};
use ecm_core::{Cell, ImportDiagnostics, SimCell};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read `(row, record)` pairs, skipping rows that fail to deserialize.
/// Row numbers are 1-based file lines; the header is row 1.
fn read_rows<C: DeserializeOwned>(
    path: &Path,
    diag: &mut ImportDiagnostics,
) -> Result<Vec<(usize, C)>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening '{}'", path.display()))?;

    let mut items = Vec::new();
    for (i, record) in reader.deserialize::<C>().enumerate() {
        let row = i + 2;
        diag.stats.rows += 1;
        match record {
            Ok(cell) => items.push((row, cell)),
            Err(err) => diag.add_skipped_row("parse", &err.to_string(), row),
        }
    }
    Ok(items)
}

/// Import a simulated-bench roster from delimited text.
pub fn parse_bench_csv(path: impl AsRef<Path>) -> Result<ImportResult<SimCell>> {
    let mut diagnostics = ImportDiagnostics::new();
    let items = read_rows(path.as_ref(), &mut diagnostics)?;
    let roster = assemble_bench(items, &mut diagnostics);
    Ok(ImportResult { roster, diagnostics })
}

/// Import a manually entered roster from delimited text.
pub fn parse_pack_csv(path: impl AsRef<Path>) -> Result<ImportResult<Cell>> {
    let mut diagnostics = ImportDiagnostics::new();
    let items = read_rows(path.as_ref(), &mut diagnostics)?;
    let roster = assemble_pack(items, &mut diagnostics);
    Ok(ImportResult { roster, diagnostics })
}
