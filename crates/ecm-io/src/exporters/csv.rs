//! Delimited-text exporter.
//!
//! One header row in the record's declared field order, then one row per
//! record in roster order. An empty roster still gets its header row.

use anyhow::{Context, Result};
use ecm_core::{CellRecord, Roster};
use serde::Serialize;
use std::path::Path;

/// Render the roster as delimited text.
pub fn roster_to_csv_string<C>(roster: &Roster<C>) -> Result<String>
where
    C: CellRecord + Serialize,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    if roster.is_empty() {
        // serialize() never runs, so the header has to be written by hand.
        writer.write_record(C::FIELDS)?;
    }
    for record in roster.iter() {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .context("flushing delimited-text writer")?;
    String::from_utf8(bytes).context("delimited output was not valid UTF-8")
}

/// Write the roster as delimited text to `output_path`.
pub fn export_roster_to_csv<C>(roster: &Roster<C>, output_path: impl AsRef<Path>) -> Result<()>
where
    C: CellRecord + Serialize,
{
    let path = output_path.as_ref();
    let contents = roster_to_csv_string(roster)?;
    std::fs::write(path, contents)
        .with_context(|| format!("writing roster to '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecm_core::{Celsius, Percent, Roster, SimCell};

    #[test]
    fn test_csv_header_and_rows() {
        let mut roster = Roster::new();
        roster.push(SimCell::new("Cell 1", Percent(90.0), Celsius(30.0), Percent(88.0)));
        roster.push(SimCell::new("Cell 2", Percent(74.0), Celsius(45.0), Percent(80.0)));

        let csv = roster_to_csv_string(&roster).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "cell_name,capacity_pct,temperature_c,efficiency_pct,health_status"
        );
        assert_eq!(lines[1], "Cell 1,90.0,30.0,88.0,Good");
        assert_eq!(lines[2], "Cell 2,74.0,45.0,80.0,Poor");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_empty_roster_keeps_header() {
        let roster: Roster<SimCell> = Roster::new();
        let csv = roster_to_csv_string(&roster).unwrap();
        assert_eq!(
            csv.trim_end(),
            "cell_name,capacity_pct,temperature_c,efficiency_pct,health_status"
        );
    }
}
