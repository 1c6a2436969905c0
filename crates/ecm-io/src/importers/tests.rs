//! Round-trip tests for the exporters and importers
//!
//! These verify that export → import reproduces the roster field-for-field
//! with order preserved, and that imports recover from bad rows instead of
//! aborting.

use crate::exporters::{export_roster_to_csv, export_roster_to_json};
use crate::importers::{
    parse_bench_csv, parse_bench_json, parse_pack_csv, parse_pack_json, Format, RosterKind,
};
use anyhow::Result;
use ecm_core::{
    Amperes, Celsius, Cell, CellSpec, CellType, HealthStatus, Percent, Roster, SimCell, Volts,
};
use std::fs;
use tempfile::TempDir;

fn bench_roster() -> Roster<SimCell> {
    let mut roster = Roster::new();
    roster.push(SimCell::new("Cell 1", Percent(91.0), Celsius(27.0), Percent(88.0)));
    roster.push(SimCell::new("Cell 2", Percent(83.0), Celsius(41.0), Percent(79.0)));
    roster.push(SimCell::new("Cell 3", Percent(72.0), Celsius(35.0), Percent(91.0)));
    roster
}

fn pack_roster() -> Roster<Cell> {
    let mut roster = Roster::new();
    roster
        .add_spec(CellSpec {
            cell_id: "Cell 01".into(),
            cell_type: CellType::Lfp,
            voltage_v: Volts(12.0),
            current_a: Amperes(5.0),
            capacity_pct: Percent(90.0),
            cooling_temp_c: Celsius(30.0),
        })
        .unwrap();
    roster
        .add_spec(CellSpec {
            cell_id: "Cell 02".into(),
            cell_type: CellType::Nmc,
            voltage_v: Volts(3.7),
            current_a: Amperes(1.5),
            capacity_pct: Percent(76.0),
            cooling_temp_c: Celsius(48.0),
        })
        .unwrap();
    roster
}

#[test]
fn test_bench_csv_roundtrip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bench.csv");

    let original = bench_roster();
    export_roster_to_csv(&original, &path)?;
    let result = parse_bench_csv(&path)?;

    assert_eq!(result.roster, original);
    assert!(!result.diagnostics.has_issues());
    assert_eq!(result.diagnostics.stats.rows, 3);
    assert_eq!(result.diagnostics.stats.cells, 3);
    Ok(())
}

#[test]
fn test_bench_json_roundtrip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bench.json");

    let original = bench_roster();
    export_roster_to_json(&original, &path)?;
    let result = parse_bench_json(&path)?;

    assert_eq!(result.roster, original);
    assert!(!result.diagnostics.has_issues());
    Ok(())
}

#[test]
fn test_pack_csv_roundtrip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("pack.csv");

    let original = pack_roster();
    export_roster_to_csv(&original, &path)?;
    let result = parse_pack_csv(&path)?;

    assert_eq!(result.roster, original);
    assert!(!result.diagnostics.has_issues());
    Ok(())
}

#[test]
fn test_pack_json_roundtrip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("pack.json");

    let original = pack_roster();
    export_roster_to_json(&original, &path)?;
    let result = parse_pack_json(&path)?;

    assert_eq!(result.roster, original);
    assert!(!result.diagnostics.has_issues());
    Ok(())
}

#[test]
fn test_csv_import_skips_bad_rows() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bench.csv");
    fs::write(
        &path,
        "cell_name,capacity_pct,temperature_c,efficiency_pct,health_status\n\
         Cell 1,91.0,27.0,88.0,Good\n\
         Cell 2,not-a-number,41.0,79.0,Average\n\
         Cell 3,140.0,35.0,91.0,Good\n\
         Cell 4,72.0,35.0,91.0,Poor\n",
    )?;

    let result = parse_bench_csv(&path)?;
    assert_eq!(result.roster.len(), 2);
    assert_eq!(result.roster.all()[0].cell_name, "Cell 1");
    assert_eq!(result.roster.all()[1].cell_name, "Cell 4");
    assert_eq!(result.diagnostics.stats.rows, 4);
    assert_eq!(result.diagnostics.stats.skipped_rows, 2);
    assert!(result.diagnostics.has_errors());
    Ok(())
}

#[test]
fn test_import_recomputes_stale_health() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bench.json");
    fs::write(
        &path,
        r#"[{"cell_name":"Cell 1","capacity_pct":60.0,"temperature_c":30.0,"efficiency_pct":80.0,"health_status":"Good"}]"#,
    )?;

    let result = parse_bench_json(&path)?;
    assert_eq!(result.roster.len(), 1);
    assert_eq!(result.roster.all()[0].health_status, HealthStatus::Poor);
    assert_eq!(result.diagnostics.stats.recomputed_values, 1);
    assert!(result.diagnostics.issues.has_warnings());
    Ok(())
}

#[test]
fn test_import_recomputes_stale_efficiency() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("pack.json");
    fs::write(
        &path,
        r#"[{"cell_id":"Cell 01","cell_type":"LFP","voltage_v":10.0,"current_a":2.0,"capacity_pct":90.0,"cooling_temp_c":30.0,"efficiency_pct":99.0,"health_status":"Good"}]"#,
    )?;

    let result = parse_pack_json(&path)?;
    let cell = &result.roster.all()[0];
    assert_eq!(cell.efficiency_pct, Percent(2.0));
    assert_eq!(cell.health_status, HealthStatus::Good);
    assert_eq!(result.diagnostics.stats.recomputed_values, 1);
    Ok(())
}

#[test]
fn test_import_flags_duplicates_but_keeps_them() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bench.csv");
    fs::write(
        &path,
        "cell_name,capacity_pct,temperature_c,efficiency_pct,health_status\n\
         Cell 1,91.0,27.0,88.0,Good\n\
         Cell 1,72.0,35.0,91.0,Poor\n",
    )?;

    let result = parse_bench_csv(&path)?;
    assert_eq!(result.roster.len(), 2);
    assert!(result.diagnostics.issues.has_warnings());
    assert!(!result.diagnostics.has_errors());
    Ok(())
}

#[test]
fn test_format_detection() {
    use std::path::Path;

    assert_eq!(Format::detect(Path::new("roster.csv")), Some(Format::Csv));
    assert_eq!(Format::detect(Path::new("ROSTER.JSON")), Some(Format::Json));
    assert_eq!(Format::detect(Path::new("roster.xml")), None);
    assert_eq!(Format::detect(Path::new("roster")), None);
}

#[test]
fn test_roster_kind_detection() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let bench_path = temp_dir.path().join("bench.csv");
    export_roster_to_csv(&bench_roster(), &bench_path)?;
    assert_eq!(
        RosterKind::detect(&bench_path, Format::Csv)?,
        RosterKind::Bench
    );

    let pack_path = temp_dir.path().join("pack.json");
    export_roster_to_json(&pack_roster(), &pack_path)?;
    assert_eq!(
        RosterKind::detect(&pack_path, Format::Json)?,
        RosterKind::Pack
    );

    let empty_path = temp_dir.path().join("empty.json");
    fs::write(&empty_path, "[]")?;
    assert!(RosterKind::detect(&empty_path, Format::Json).is_err());
    Ok(())
}
