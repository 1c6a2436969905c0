//! # ecm-io: Roster Export & Import
//!
//! Serializes cell rosters to files and reads them back, in the two wire
//! shapes the dashboard offers for download:
//!
//! | Format | Extension | Shape |
//! |--------|-----------|-------|
//! | CSV    | `.csv`    | header row + one delimited row per record |
//! | JSON   | `.json`   | ordered array of field→value objects |
//!
//! ## Design Philosophy
//!
//! **Deterministic exports**: output depends only on roster state, with a
//! fixed column order and roster order preserved.
//!
//! **Error recovery on import**: malformed or out-of-range rows are skipped
//! and reported through [`ImportDiagnostics`](ecm_core::ImportDiagnostics)
//! rather than aborting the whole file.
//!
//! **Derived fields are recomputed**: a stored health status or efficiency
//! that disagrees with its readings is replaced by the recomputation and
//! flagged with a warning, so an imported roster always satisfies the
//! derivation invariant.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ecm_io::importers::parse_bench_csv;
//!
//! fn main() -> anyhow::Result<()> {
//!     let result = parse_bench_csv("cells.csv")?;
//!     println!("{}", result.diagnostics.summary());
//!     println!("{} cells", result.roster.len());
//!     Ok(())
//! }
//! ```

pub mod exporters;
pub mod importers;

pub use exporters::{
    export_roster_to_csv, export_roster_to_json, roster_to_csv_string, roster_to_json_string,
};
pub use importers::{
    parse_bench_csv, parse_bench_json, parse_pack_csv, parse_pack_json, Format, ImportResult,
    RosterKind,
};
