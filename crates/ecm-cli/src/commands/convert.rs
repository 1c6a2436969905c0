//! Roster file conversion between the delimited and structured formats.

use anyhow::{anyhow, Result};
use ecm_core::CellRecord;
use ecm_io::exporters::{export_roster_to_csv, export_roster_to_json};
use ecm_io::importers::{
    parse_bench_csv, parse_bench_json, parse_pack_csv, parse_pack_json, Format, ImportResult,
    RosterKind,
};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

pub fn handle(input: &Path, output: &Path) -> Result<()> {
    let in_format = Format::detect(input)
        .ok_or_else(|| anyhow!("unsupported roster format for '{}'", input.display()))?;
    let out_format = Format::detect(output)
        .ok_or_else(|| anyhow!("unsupported roster format for '{}'", output.display()))?;
    let kind = RosterKind::detect(input, in_format)?;

    match kind {
        RosterKind::Bench => {
            let result = match in_format {
                Format::Csv => parse_bench_csv(input)?,
                Format::Json => parse_bench_json(input)?,
            };
            write_converted(result, output, out_format)?;
        }
        RosterKind::Pack => {
            let result = match in_format {
                Format::Csv => parse_pack_csv(input)?,
                Format::Json => parse_pack_json(input)?,
            };
            write_converted(result, output, out_format)?;
        }
    }

    info!("Converted {} -> {}", input.display(), output.display());
    Ok(())
}

fn write_converted<C>(result: ImportResult<C>, output: &Path, format: Format) -> Result<()>
where
    C: CellRecord + Serialize,
{
    if result.diagnostics.has_issues() {
        warn!("Import reported: {}", result.diagnostics.summary());
    }
    match format {
        Format::Csv => export_roster_to_csv(&result.roster, output),
        Format::Json => export_roster_to_json(&result.roster, output),
    }
}
