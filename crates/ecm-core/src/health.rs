//! Health status derivation from numeric cell readings.
//!
//! Both classifiers are pure and total; callers re-run them whenever the
//! readings they depend on change, so a stored status can never drift from
//! the readings it was derived from.

use crate::units::{Celsius, Percent};
use serde::{Deserialize, Serialize};

/// Categorical health label derived from a cell's numeric readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    Good,
    Average,
    Poor,
}

impl HealthStatus {
    /// Returns a human-readable label for the status.
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Good => "Good",
            HealthStatus::Average => "Average",
            HealthStatus::Poor => "Poor",
        }
    }

    /// Traffic-light marker used by per-cell status lines.
    pub fn indicator(&self) -> &'static str {
        match self {
            HealthStatus::Good => "🟢",
            HealthStatus::Average => "🟡",
            HealthStatus::Poor => "🔴",
        }
    }

    /// All statuses in display order.
    pub fn all() -> [HealthStatus; 3] {
        [HealthStatus::Good, HealthStatus::Average, HealthStatus::Poor]
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a simulated bench cell from its capacity alone.
pub fn classify_by_capacity(capacity: Percent) -> HealthStatus {
    if capacity.value() > 85.0 {
        HealthStatus::Good
    } else if capacity.value() > 75.0 {
        HealthStatus::Average
    } else {
        HealthStatus::Poor
    }
}

/// Classify a manually entered cell from capacity and cooling temperature.
///
/// Capacity dominates: a hot cell with capacity above 70 still lands in
/// `Average` because only the `Good` branch looks at temperature.
pub fn classify(capacity: Percent, cooling_temp: Celsius) -> HealthStatus {
    if capacity.value() > 85.0 && cooling_temp.value() < 45.0 {
        HealthStatus::Good
    } else if capacity.value() > 70.0 {
        HealthStatus::Average
    } else {
        HealthStatus::Poor
    }
}
