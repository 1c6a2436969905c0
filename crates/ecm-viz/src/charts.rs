//! Chart-shaped projections of the current roster.

use ecm_core::{Cell, CellReadings, CellRecord, HealthStatus, Roster};
use serde::Serialize;

/// One bar of the capacity chart. Carries the health status so a surface
/// can color bars by capacity value or by status.
#[derive(Debug, Clone, Serialize)]
pub struct CapacityPoint {
    pub name: String,
    pub capacity_pct: f64,
    pub health_status: HealthStatus,
}

/// One marker of the temperature trend line.
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub name: String,
    pub temperature_c: f64,
}

/// One slice of the efficiency proportion chart. `share` is this cell's
/// fraction of the summed efficiency, 0 when the sum is 0.
#[derive(Debug, Clone, Serialize)]
pub struct EfficiencySlice {
    pub name: String,
    pub efficiency_pct: f64,
    pub share: f64,
}

/// One bucket of the health histogram.
#[derive(Debug, Clone, Serialize)]
pub struct HealthBin {
    pub health_status: HealthStatus,
    pub count: usize,
}

/// One marker of the voltage-vs-current scatter chart. Efficiency drives
/// the marker size, the chemistry drives its color.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterPoint {
    pub cell_id: String,
    pub voltage_v: f64,
    pub current_a: f64,
    pub efficiency_pct: f64,
    pub cell_type: String,
}

/// One per-cell indicator line for the roster status panel.
#[derive(Debug, Clone, Serialize)]
pub struct StatusLine {
    pub name: String,
    pub indicator: String,
    pub health_status: HealthStatus,
    pub capacity_pct: f64,
    pub temperature_c: f64,
    pub efficiency_pct: f64,
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} | Capacity: {}% | Temp: {}°C | Efficiency: {}%",
            self.indicator, self.name, self.capacity_pct, self.temperature_c, self.efficiency_pct
        )
    }
}

/// (name, capacity) bars in roster order.
pub fn capacity_by_cell<C: CellRecord + CellReadings>(roster: &Roster<C>) -> Vec<CapacityPoint> {
    roster
        .iter()
        .map(|cell| CapacityPoint {
            name: cell.label().to_string(),
            capacity_pct: cell.capacity_pct().value(),
            health_status: cell.health_status(),
        })
        .collect()
}

/// (name, temperature) markers in roster order.
pub fn temperature_trend<C: CellRecord + CellReadings>(roster: &Roster<C>) -> Vec<TrendPoint> {
    roster
        .iter()
        .map(|cell| TrendPoint {
            name: cell.label().to_string(),
            temperature_c: cell.temperature_c().value(),
        })
        .collect()
}

/// (name, efficiency, share-of-total) slices in roster order.
pub fn efficiency_distribution<C: CellRecord + CellReadings>(
    roster: &Roster<C>,
) -> Vec<EfficiencySlice> {
    let total: f64 = roster.iter().map(|c| c.efficiency_pct().value()).sum();
    roster
        .iter()
        .map(|cell| {
            let efficiency_pct = cell.efficiency_pct().value();
            EfficiencySlice {
                name: cell.label().to_string(),
                efficiency_pct,
                share: if total > 0.0 { efficiency_pct / total } else { 0.0 },
            }
        })
        .collect()
}

/// Record count per health status. All three buckets are always present,
/// zero-filled, in Good/Average/Poor order.
pub fn health_histogram<C: CellRecord + CellReadings>(roster: &Roster<C>) -> Vec<HealthBin> {
    HealthStatus::all()
        .into_iter()
        .map(|status| HealthBin {
            health_status: status,
            count: roster
                .iter()
                .filter(|c| c.health_status() == status)
                .count(),
        })
        .collect()
}

/// Voltage-vs-current scatter markers for a manually entered roster.
pub fn voltage_vs_current(roster: &Roster<Cell>) -> Vec<ScatterPoint> {
    roster
        .iter()
        .map(|cell| ScatterPoint {
            cell_id: cell.cell_id.clone(),
            voltage_v: cell.voltage_v.value(),
            current_a: cell.current_a.value(),
            efficiency_pct: cell.efficiency_pct.value(),
            cell_type: cell.cell_type.label().to_string(),
        })
        .collect()
}

/// Per-cell indicator summaries in roster order.
pub fn status_lines<C: CellRecord + CellReadings>(roster: &Roster<C>) -> Vec<StatusLine> {
    roster
        .iter()
        .map(|cell| StatusLine {
            name: cell.label().to_string(),
            indicator: cell.health_status().indicator().to_string(),
            health_status: cell.health_status(),
            capacity_pct: cell.capacity_pct().value(),
            temperature_c: cell.temperature_c().value(),
            efficiency_pct: cell.efficiency_pct().value(),
        })
        .collect()
}
