//! Structured-records exporter.
//!
//! The roster becomes an ordered JSON array of field→value objects, field
//! names matching the record's declared fields, numeric fields as numbers.

use anyhow::{Context, Result};
use ecm_core::{CellRecord, Roster};
use serde::Serialize;
use std::path::Path;

/// Render the roster as a pretty-printed JSON array of records.
pub fn roster_to_json_string<C>(roster: &Roster<C>) -> Result<String>
where
    C: CellRecord + Serialize,
{
    serde_json::to_string_pretty(roster.all()).context("serializing roster records")
}

/// Write the roster as structured records to `output_path`.
pub fn export_roster_to_json<C>(roster: &Roster<C>, output_path: impl AsRef<Path>) -> Result<()>
where
    C: CellRecord + Serialize,
{
    let path = output_path.as_ref();
    let contents = roster_to_json_string(roster)?;
    std::fs::write(path, contents)
        .with_context(|| format!("writing roster to '{}'", path.display()))?;
    Ok(())
}
