//! # ecm-core: EV Battery Cell Roster Core
//!
//! Provides the data model for a roster of simulated EV battery cells: the
//! cell records themselves, the rule that derives a categorical health
//! status from their readings, and the ordered store the surface mutates.
//!
//! ## Design Philosophy
//!
//! A roster is a flat, insertion-ordered collection. Two record shapes share
//! it through small trait seams:
//!
//! - **Bench cells** ([`SimCell`]): generated in bulk with random readings,
//!   named "Cell 1", "Cell 2", ... by position at creation time.
//! - **Manual cells** ([`Cell`]): entered one at a time from a validated
//!   [`CellSpec`], with efficiency and health derived before insertion.
//!
//! Derived fields are never written directly: every constructor runs the
//! derivation, and [`Roster::validate_into`] flags any stored value that
//! disagrees with its readings (which can only happen to imported data).
//!
//! ## Quick Start
//!
//! ```rust
//! use ecm_core::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! // A simulated bench of four cells, reproducible from a seed.
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut bench = Roster::seeded(4, &mut rng);
//! bench.add_random(2, &mut rng)?;
//! assert_eq!(bench.len(), 6);
//! assert_eq!(bench.all()[5].cell_name, "Cell 6");
//!
//! // A manually entered pack.
//! let mut pack: Roster<Cell> = Roster::new();
//! let cell = pack.add_spec(CellSpec {
//!     cell_id: "Cell 01".into(),
//!     cell_type: CellType::Lfp,
//!     voltage_v: Volts(12.0),
//!     current_a: Amperes(5.0),
//!     capacity_pct: Percent(90.0),
//!     cooling_temp_c: Celsius(30.0),
//! })?;
//! assert_eq!(cell.efficiency_pct, Percent(6.0));
//! assert_eq!(cell.health_status, HealthStatus::Good);
//!
//! pack.remove("Cell 01");
//! assert!(pack.is_empty());
//! # Ok::<(), EcmError>(())
//! ```
//!
//! ## Modules
//!
//! - [`health`] - Health status type and the two classifier rules
//! - [`roster`] - The ordered store, stats, and validation
//! - [`units`] - Newtype wrappers for percent/°C/V/A readings
//! - [`diagnostics`] - Issue collection for validation and imports
//!
//! ## Integration with ecm-io
//!
//! The ecm-io crate provides CSV and JSON exporters and importers that
//! round-trip [`Roster`] contents through files.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;

pub mod diagnostics;
pub mod error;
pub mod health;
pub mod roster;
pub mod units;

pub use diagnostics::{DiagnosticIssue, Diagnostics, ImportDiagnostics, ImportStats, Severity};
pub use error::{EcmError, EcmResult};
pub use health::{classify, classify_by_capacity, HealthStatus};
pub use roster::{CellRecord, Roster, RosterStats, ADD_BATCH_MAX, ADD_BATCH_MIN};
pub use units::{Amperes, Celsius, Percent, Volts};

/// Generation ranges for simulated bench cells (half-open, integer draws).
pub const SIM_CAPACITY_PCT: Range<u32> = 70..100;
pub const SIM_TEMPERATURE_C: Range<u32> = 25..50;
pub const SIM_EFFICIENCY_PCT: Range<u32> = 75..98;

/// Cell chemistry of a manually entered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    #[serde(rename = "Lithium-ion")]
    LithiumIon,
    #[serde(rename = "LFP")]
    Lfp,
    #[serde(rename = "NMC")]
    Nmc,
    #[serde(rename = "Solid State")]
    SolidState,
}

impl CellType {
    /// Returns the display label for the chemistry.
    pub fn label(&self) -> &'static str {
        match self {
            CellType::LithiumIon => "Lithium-ion",
            CellType::Lfp => "LFP",
            CellType::Nmc => "NMC",
            CellType::SolidState => "Solid State",
        }
    }

    /// All chemistries in display order.
    pub fn all() -> [CellType; 4] {
        [
            CellType::LithiumIon,
            CellType::Lfp,
            CellType::Nmc,
            CellType::SolidState,
        ]
    }
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for CellType {
    type Err = EcmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lithium-ion" | "li-ion" => Ok(CellType::LithiumIon),
            "lfp" => Ok(CellType::Lfp),
            "nmc" => Ok(CellType::Nmc),
            "solid state" | "solid-state" => Ok(CellType::SolidState),
            other => Err(EcmError::Parse(format!("unknown cell type '{}'", other))),
        }
    }
}

/// One simulated bench cell.
///
/// Readings are drawn at creation; `health_status` is derived from
/// capacity and refreshed by every constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimCell {
    pub cell_name: String,
    pub capacity_pct: Percent,
    pub temperature_c: Celsius,
    pub efficiency_pct: Percent,
    pub health_status: HealthStatus,
}

impl SimCell {
    /// Build a bench cell, deriving its health from the capacity.
    pub fn new(
        cell_name: impl Into<String>,
        capacity_pct: Percent,
        temperature_c: Celsius,
        efficiency_pct: Percent,
    ) -> Self {
        Self {
            cell_name: cell_name.into(),
            capacity_pct,
            temperature_c,
            efficiency_pct,
            health_status: classify_by_capacity(capacity_pct),
        }
    }

    /// Draw a fresh cell with readings from the generation ranges.
    pub fn random(cell_name: impl Into<String>, rng: &mut impl Rng) -> Self {
        Self::new(
            cell_name,
            Percent(rng.gen_range(SIM_CAPACITY_PCT) as f64),
            Celsius(rng.gen_range(SIM_TEMPERATURE_C) as f64),
            Percent(rng.gen_range(SIM_EFFICIENCY_PCT) as f64),
        )
    }
}

/// User-supplied fields for one manual cell entry.
///
/// The derived fields are deliberately absent; [`Cell::from_spec`] computes
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellSpec {
    pub cell_id: String,
    pub cell_type: CellType,
    pub voltage_v: Volts,
    pub current_a: Amperes,
    pub capacity_pct: Percent,
    pub cooling_temp_c: Celsius,
}

/// One manually entered cell, derived fields included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub cell_id: String,
    pub cell_type: CellType,
    pub voltage_v: Volts,
    pub current_a: Amperes,
    pub capacity_pct: Percent,
    pub cooling_temp_c: Celsius,
    pub efficiency_pct: Percent,
    pub health_status: HealthStatus,
}

impl Cell {
    /// Validate a spec and derive the efficiency and health fields.
    pub fn from_spec(spec: CellSpec) -> EcmResult<Self> {
        if spec.cell_id.trim().is_empty() {
            return Err(EcmError::Validation(
                "cell identifier must not be blank".into(),
            ));
        }
        if spec.voltage_v.value() < 0.0 {
            return Err(EcmError::Validation(format!(
                "voltage {} must be non-negative",
                spec.voltage_v
            )));
        }
        if spec.current_a.value() < 0.0 {
            return Err(EcmError::Validation(format!(
                "current {} must be non-negative",
                spec.current_a
            )));
        }
        if !spec.capacity_pct.in_bounds() {
            return Err(EcmError::Validation(format!(
                "capacity {} outside 0..=100",
                spec.capacity_pct
            )));
        }
        if spec.cooling_temp_c.value() < 0.0 {
            return Err(EcmError::Validation(format!(
                "cooling temperature {} must be non-negative",
                spec.cooling_temp_c
            )));
        }

        let efficiency_pct = Self::derived_efficiency(spec.voltage_v, spec.current_a);
        let health_status = classify(spec.capacity_pct, spec.cooling_temp_c);
        Ok(Self {
            cell_id: spec.cell_id,
            cell_type: spec.cell_type,
            voltage_v: spec.voltage_v,
            current_a: spec.current_a,
            capacity_pct: spec.capacity_pct,
            cooling_temp_c: spec.cooling_temp_c,
            efficiency_pct,
            health_status,
        })
    }

    /// Efficiency derived from electrical readings: V·A/10, rounded to two
    /// decimals, and 0 when the cell reports no voltage.
    pub fn derived_efficiency(voltage_v: Volts, current_a: Amperes) -> Percent {
        if voltage_v.value() > 0.0 {
            let raw = voltage_v.value() * current_a.value() / 10.0;
            Percent((raw * 100.0).round() / 100.0)
        } else {
            Percent(0.0)
        }
    }
}

/// Read surface shared by both record shapes, for projections and stats.
pub trait CellReadings {
    fn label(&self) -> &str;
    fn capacity_pct(&self) -> Percent;
    fn temperature_c(&self) -> Celsius;
    fn efficiency_pct(&self) -> Percent;
    fn health_status(&self) -> HealthStatus;

    /// Re-run the record's own derivation rule over its current readings.
    fn derived_health(&self) -> HealthStatus;
}

impl CellReadings for SimCell {
    fn label(&self) -> &str {
        &self.cell_name
    }
    fn capacity_pct(&self) -> Percent {
        self.capacity_pct
    }
    fn temperature_c(&self) -> Celsius {
        self.temperature_c
    }
    fn efficiency_pct(&self) -> Percent {
        self.efficiency_pct
    }
    fn health_status(&self) -> HealthStatus {
        self.health_status
    }
    fn derived_health(&self) -> HealthStatus {
        classify_by_capacity(self.capacity_pct)
    }
}

impl CellReadings for Cell {
    fn label(&self) -> &str {
        &self.cell_id
    }
    fn capacity_pct(&self) -> Percent {
        self.capacity_pct
    }
    fn temperature_c(&self) -> Celsius {
        self.cooling_temp_c
    }
    fn efficiency_pct(&self) -> Percent {
        self.efficiency_pct
    }
    fn health_status(&self) -> HealthStatus {
        self.health_status
    }
    fn derived_health(&self) -> HealthStatus {
        classify(self.capacity_pct, self.cooling_temp_c)
    }
}
