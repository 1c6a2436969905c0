//! Roster exporters.
//!
//! Both exporters come in a to-path and a to-string form; the string forms
//! back the download/export surface, the path forms back the CLI.

pub mod csv;
pub mod json;

pub use csv::{export_roster_to_csv, roster_to_csv_string};
pub use json::{export_roster_to_json, roster_to_json_string};
