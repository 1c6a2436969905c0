//! Flat-table projection for tabular display.
//!
//! Columns follow each record shape's declared field order, so the table
//! lines up with what the exporters write.

use ecm_core::{Cell, CellRecord, Roster, SimCell};
use serde::Serialize;

/// A record shape that knows how to present itself as one table row.
///
/// Column headers come from [`CellRecord::FIELDS`]; this trait only adds
/// the display formatting of the values.
pub trait TableRecord: CellRecord {
    /// Display-formatted values for this record, matching `FIELDS`.
    fn row(&self) -> Vec<String>;
}

impl TableRecord for SimCell {
    fn row(&self) -> Vec<String> {
        vec![
            self.cell_name.clone(),
            self.capacity_pct.value().to_string(),
            self.temperature_c.value().to_string(),
            self.efficiency_pct.value().to_string(),
            self.health_status.label().to_string(),
        ]
    }
}

impl TableRecord for Cell {
    fn row(&self) -> Vec<String> {
        vec![
            self.cell_id.clone(),
            self.cell_type.label().to_string(),
            self.voltage_v.value().to_string(),
            self.current_a.value().to_string(),
            self.capacity_pct.value().to_string(),
            self.cooling_temp_c.value().to_string(),
            self.efficiency_pct.value().to_string(),
            self.health_status.label().to_string(),
        ]
    }
}

/// All fields of all records, in roster order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FlatTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Project the roster into a display table. An empty roster yields a table
/// with headers and no rows.
pub fn flat_table<C: TableRecord>(roster: &Roster<C>) -> FlatTable {
    FlatTable {
        columns: C::FIELDS.iter().map(|c| c.to_string()).collect(),
        rows: roster.iter().map(TableRecord::row).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecm_core::{Amperes, Celsius, CellSpec, CellType, Percent, Volts};

    #[test]
    fn test_flat_table_sim() {
        let mut roster = Roster::new();
        roster.push(SimCell::new("Cell 1", Percent(90.0), Celsius(30.0), Percent(88.0)));

        let table = flat_table(&roster);
        assert_eq!(table.columns[0], "cell_name");
        assert_eq!(table.columns.len(), 5);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0], vec!["Cell 1", "90", "30", "88", "Good"]);
    }

    #[test]
    fn test_flat_table_pack() {
        let mut roster: Roster<Cell> = Roster::new();
        roster
            .add_spec(CellSpec {
                cell_id: "Cell 01".into(),
                cell_type: CellType::SolidState,
                voltage_v: Volts(3.7),
                current_a: Amperes(1.5),
                capacity_pct: Percent(72.0),
                cooling_temp_c: Celsius(28.0),
            })
            .unwrap();

        let table = flat_table(&roster);
        assert_eq!(table.columns.len(), 8);
        assert_eq!(
            table.rows[0],
            vec!["Cell 01", "Solid State", "3.7", "1.5", "72", "28", "0.56", "Average"]
        );
    }

    #[test]
    fn test_flat_table_empty_roster() {
        let roster: Roster<SimCell> = Roster::new();
        let table = flat_table(&roster);
        assert_eq!(table.columns.len(), 5);
        assert!(table.rows.is_empty());
    }
}
