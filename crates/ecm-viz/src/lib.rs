//! # ecm-viz: Roster View Projections
//!
//! Read-only derived views over a cell roster, shaped for whatever renders
//! them: chart point series, a health histogram, per-cell status lines, and
//! a flat display table. Every projection is a pure function (roster in,
//! serializable view out), and every one degrades to an empty view on an
//! empty roster instead of erroring.

pub mod charts;
pub mod table;

pub use charts::{
    capacity_by_cell, efficiency_distribution, health_histogram, status_lines,
    temperature_trend, voltage_vs_current, CapacityPoint, EfficiencySlice, HealthBin,
    ScatterPoint, StatusLine, TrendPoint,
};
pub use table::{flat_table, FlatTable, TableRecord};
