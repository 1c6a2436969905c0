//! Roster file inspection: import, summarize, surface diagnostics.

use super::util::print_report;
use anyhow::{anyhow, Result};
use ecm_core::{CellReadings, CellRecord, ImportDiagnostics, Roster};
use ecm_io::importers::{
    parse_bench_csv, parse_bench_json, parse_pack_csv, parse_pack_json, Format, ImportResult,
    RosterKind,
};
use ecm_viz::{health_histogram, TableRecord};
use serde::Serialize;
use std::path::Path;
use tracing::warn;

pub fn handle(input: &Path, as_json: bool) -> Result<()> {
    let format = Format::detect(input)
        .ok_or_else(|| anyhow!("unsupported roster format for '{}'", input.display()))?;
    let kind = RosterKind::detect(input, format)?;

    match (format, kind) {
        (Format::Csv, RosterKind::Bench) => report(parse_bench_csv(input)?, as_json),
        (Format::Json, RosterKind::Bench) => report(parse_bench_json(input)?, as_json),
        (Format::Csv, RosterKind::Pack) => report(parse_pack_csv(input)?, as_json),
        (Format::Json, RosterKind::Pack) => report(parse_pack_json(input)?, as_json),
    }
}

fn report<C>(result: ImportResult<C>, as_json: bool) -> Result<()>
where
    C: CellRecord + CellReadings + TableRecord + Serialize,
{
    let ImportResult {
        roster,
        diagnostics,
    } = result;

    if as_json {
        let summary = summarize(&roster, &diagnostics);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_report(&roster)?;
    if diagnostics.has_issues() {
        warn!("Import reported issues");
        print!("{}", diagnostics);
    }
    Ok(())
}

fn summarize<C>(roster: &Roster<C>, diagnostics: &ImportDiagnostics) -> serde_json::Value
where
    C: CellRecord + CellReadings,
{
    serde_json::json!({
        "cells": roster.len(),
        "stats": roster.stats().to_string(),
        "histogram": health_histogram(roster),
        "diagnostics": diagnostics,
    })
}
