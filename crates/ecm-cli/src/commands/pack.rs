//! Manual pack session: parse cell entries, validate, report, export.

use super::util::{export_outputs, print_report};
use anyhow::{bail, Context, Result};
use ecm_core::{Amperes, Celsius, Cell, CellSpec, CellType, Percent, Roster, Volts};
use ecm_viz::voltage_vs_current;
use std::path::Path;
use tracing::info;

pub fn handle(
    cells: &[String],
    remove: &[String],
    csv: Option<&Path>,
    json: Option<&Path>,
) -> Result<()> {
    let mut roster: Roster<Cell> = Roster::new();

    for entry in cells {
        let spec = parse_cell_entry(entry)?;
        let cell = roster
            .add_spec(spec)
            .with_context(|| format!("adding cell from '{}'", entry))?;
        info!(
            "{} added ({}, efficiency {}, health {})",
            cell.cell_id, cell.cell_type, cell.efficiency_pct, cell.health_status
        );
    }

    for ident in remove {
        let removed = roster.remove(ident);
        if removed > 0 {
            info!("{} removed", ident);
        } else {
            info!("{} not present, nothing removed", ident);
        }
    }

    print_report(&roster)?;

    if !roster.is_empty() {
        println!();
        println!("Voltage/current map:");
        for point in voltage_vs_current(&roster) {
            println!(
                "  {}: {} V × {} A ({}, efficiency {}%)",
                point.cell_id, point.voltage_v, point.current_a, point.cell_type,
                point.efficiency_pct
            );
        }
    }

    export_outputs(&roster, csv, json)?;
    Ok(())
}

/// Parse one `ID,TYPE,VOLTAGE,CURRENT,CAPACITY,COOLING` entry.
fn parse_cell_entry(entry: &str) -> Result<CellSpec> {
    let parts: Vec<&str> = entry.split(',').map(str::trim).collect();
    if parts.len() != 6 {
        bail!(
            "expected ID,TYPE,VOLTAGE,CURRENT,CAPACITY,COOLING, got '{}'",
            entry
        );
    }

    let cell_type: CellType = parts[1].parse()?;
    let voltage: f64 = parts[2]
        .parse()
        .with_context(|| format!("voltage '{}' is not a number", parts[2]))?;
    let current: f64 = parts[3]
        .parse()
        .with_context(|| format!("current '{}' is not a number", parts[3]))?;
    let capacity: f64 = parts[4]
        .parse()
        .with_context(|| format!("capacity '{}' is not a number", parts[4]))?;
    let cooling: f64 = parts[5]
        .parse()
        .with_context(|| format!("cooling temperature '{}' is not a number", parts[5]))?;

    Ok(CellSpec {
        cell_id: parts[0].to_string(),
        cell_type,
        voltage_v: Volts(voltage),
        current_a: Amperes(current),
        capacity_pct: Percent(capacity),
        cooling_temp_c: Celsius(cooling),
    })
}
