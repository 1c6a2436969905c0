//! The ordered roster of cell records and its mutation surface.
//!
//! [`Roster`] is a plain owned value: every session or test owns its own
//! instance, and a roster lives exactly as long as the process that created
//! it. Records keep their insertion order; removal never renumbers or
//! reorders the remainder.

use crate::error::{EcmError, EcmResult};
use crate::health::HealthStatus;
use crate::diagnostics::Diagnostics;
use crate::{Cell, CellReadings, CellSpec, SimCell};
use rand::Rng;

/// Trait seam for anything a roster can hold: the record's identifier and
/// its declared field order.
///
/// Identifiers are what `remove` matches on and what the uniqueness
/// invariant is stated over. `FIELDS` fixes the column order tables and
/// delimited exports present the record in.
pub trait CellRecord {
    /// Field names in declared order.
    const FIELDS: &'static [&'static str];

    fn ident(&self) -> &str;
}

impl CellRecord for SimCell {
    const FIELDS: &'static [&'static str] = &[
        "cell_name",
        "capacity_pct",
        "temperature_c",
        "efficiency_pct",
        "health_status",
    ];

    fn ident(&self) -> &str {
        &self.cell_name
    }
}

impl CellRecord for Cell {
    const FIELDS: &'static [&'static str] = &[
        "cell_id",
        "cell_type",
        "voltage_v",
        "current_a",
        "capacity_pct",
        "cooling_temp_c",
        "efficiency_pct",
        "health_status",
    ];

    fn ident(&self) -> &str {
        &self.cell_id
    }
}

/// Ordered, process-lifetime collection of cell records.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster<C> {
    cells: Vec<C>,
}

impl<C> Default for Roster<C> {
    fn default() -> Self {
        Self { cells: Vec::new() }
    }
}

impl<C: CellRecord> Roster<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record as-is, without validation.
    ///
    /// Generators and importers use this; manual entry goes through
    /// [`Roster::add_spec`], which validates first.
    pub fn push(&mut self, cell: C) {
        self.cells.push(cell);
    }

    /// Delete every record whose identifier equals `ident`.
    ///
    /// Returns the number of records removed; removing an unknown
    /// identifier is a no-op, not an error. Remaining records keep their
    /// order and identifiers.
    pub fn remove(&mut self, ident: &str) -> usize {
        let before = self.cells.len();
        self.cells.retain(|c| c.ident() != ident);
        before - self.cells.len()
    }

    /// Read-only view of all records in roster order.
    pub fn all(&self) -> &[C] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&C> {
        self.cells.get(index)
    }

    pub fn contains(&self, ident: &str) -> bool {
        self.cells.iter().any(|c| c.ident() == ident)
    }
}

impl<C: CellRecord + CellReadings> Roster<C> {
    /// Compute basic statistics about the roster
    pub fn stats(&self) -> RosterStats {
        let mut stats = RosterStats::default();
        stats.num_cells = self.cells.len();

        for cell in &self.cells {
            match cell.health_status() {
                HealthStatus::Good => stats.num_good += 1,
                HealthStatus::Average => stats.num_average += 1,
                HealthStatus::Poor => stats.num_poor += 1,
            }
            stats.mean_capacity_pct += cell.capacity_pct().value();
            stats.mean_temperature_c += cell.temperature_c().value();
            stats.mean_efficiency_pct += cell.efficiency_pct().value();
        }

        if stats.num_cells > 0 {
            let n = stats.num_cells as f64;
            stats.mean_capacity_pct /= n;
            stats.mean_temperature_c /= n;
            stats.mean_efficiency_pct /= n;
        }
        stats
    }

    /// Validate roster data for issues a surface or importer may have let
    /// through.
    ///
    /// Populates the provided `Diagnostics` with any warnings/errors found.
    pub fn validate_into(&self, diag: &mut Diagnostics) {
        let mut seen: std::collections::HashSet<&str> = std::collections::HashSet::new();

        for cell in &self.cells {
            let ident = cell.ident();
            if ident.trim().is_empty() {
                diag.add_error("identity", "Record has a blank identifier");
            } else if !seen.insert(ident) {
                diag.add_warning_with_entity(
                    "identity",
                    "Duplicate identifier; remove will delete all matches",
                    ident,
                );
            }

            if !cell.capacity_pct().in_bounds() {
                diag.add_error_with_entity(
                    "range",
                    &format!("Capacity {} outside 0..=100", cell.capacity_pct()),
                    ident,
                );
            }
            if !cell.efficiency_pct().in_bounds() {
                diag.add_warning_with_entity(
                    "range",
                    &format!("Efficiency {} outside 0..=100", cell.efficiency_pct()),
                    ident,
                );
            }
            if cell.health_status() != cell.derived_health() {
                diag.add_warning_with_entity(
                    "derived",
                    &format!(
                        "Stored health {} disagrees with readings ({} expected)",
                        cell.health_status(),
                        cell.derived_health()
                    ),
                    ident,
                );
            }
        }
    }
}

/// Smallest and largest batch a single random-add may request.
pub const ADD_BATCH_MIN: usize = 1;
pub const ADD_BATCH_MAX: usize = 20;

impl Roster<SimCell> {
    /// Build the initial simulated bench: `count` random cells named
    /// "Cell 1".."Cell count".
    pub fn seeded(count: usize, rng: &mut impl Rng) -> Self {
        let mut roster = Self::new();
        for i in 0..count {
            roster.push(SimCell::random(format!("Cell {}", i + 1), rng));
        }
        roster
    }

    /// Append `count` freshly generated cells, continuing the "Cell N"
    /// numbering from the current roster size.
    ///
    /// Returns the number of cells added. The batch size is re-checked
    /// here even though the surface constrains it.
    pub fn add_random(&mut self, count: usize, rng: &mut impl Rng) -> EcmResult<usize> {
        if !(ADD_BATCH_MIN..=ADD_BATCH_MAX).contains(&count) {
            return Err(EcmError::Validation(format!(
                "batch size {} outside {}..={}",
                count, ADD_BATCH_MIN, ADD_BATCH_MAX
            )));
        }
        let start = self.len();
        for i in 0..count {
            self.push(SimCell::random(format!("Cell {}", start + i + 1), rng));
        }
        Ok(count)
    }
}

impl Roster<Cell> {
    /// Validate a manual entry and append it.
    ///
    /// Rejects blank and duplicate identifiers and out-of-range readings;
    /// derives efficiency and health before insertion. Returns the record
    /// as inserted, derived fields included.
    pub fn add_spec(&mut self, spec: CellSpec) -> EcmResult<Cell> {
        if self.contains(spec.cell_id.trim()) {
            return Err(EcmError::Validation(format!(
                "duplicate cell identifier '{}'",
                spec.cell_id
            )));
        }
        let cell = Cell::from_spec(spec)?;
        self.push(cell.clone());
        Ok(cell)
    }
}

/// Statistics about a roster's size and health mix
#[derive(Debug, Clone, Default)]
pub struct RosterStats {
    pub num_cells: usize,
    pub num_good: usize,
    pub num_average: usize,
    pub num_poor: usize,
    pub mean_capacity_pct: f64,
    pub mean_temperature_c: f64,
    pub mean_efficiency_pct: f64,
}

impl std::fmt::Display for RosterStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} cells ({} good, {} average, {} poor), mean capacity {:.1}%, mean efficiency {:.1}%",
            self.num_cells,
            self.num_good,
            self.num_average,
            self.num_poor,
            self.mean_capacity_pct,
            self.mean_efficiency_pct
        )
    }
}
