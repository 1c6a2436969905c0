//! Diagnostics infrastructure for roster validation and imports.
//!
//! Operations that can partially succeed, such as importing a roster file
//! or validating a hand-built roster, collect warnings and errors here
//! instead of aborting on the first problem.
//!
//! # Example
//!
//! ```
//! use ecm_core::diagnostics::{Diagnostics, Severity};
//!
//! let mut diag = Diagnostics::new();
//! diag.add_warning("identity", "Roster contains duplicate identifiers");
//! diag.add_error_with_entity("range", "Capacity outside 0..=100", "Cell 3");
//!
//! assert_eq!(diag.warning_count(), 1);
//! assert_eq!(diag.error_count(), 1);
//! ```

use serde::Serialize;

/// Severity level for diagnostic issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Unusual but the operation continued (e.g., recomputed value)
    Warning,
    /// Could not process the record/operation (e.g., malformed row)
    Error,
}

/// A single diagnostic issue encountered during an operation
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticIssue {
    pub severity: Severity,
    /// Category for grouping (e.g., "identity", "range", "parse")
    pub category: String,
    pub message: String,
    /// Optional row number (for file-based operations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    /// Optional entity reference (e.g., "Cell 3")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
}

impl DiagnosticIssue {
    pub fn new(severity: Severity, category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            category: category.into(),
            message: message.into(),
            row: None,
            entity: None,
        }
    }

    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }
}

impl std::fmt::Display for DiagnosticIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };

        write!(f, "[{}:{}] {}", severity, self.category, self.message)?;

        if let Some(entity) = &self.entity {
            write!(f, " ({})", entity)?;
        }
        if let Some(row) = self.row {
            write!(f, " at row {}", row)?;
        }

        Ok(())
    }
}

/// Collection of diagnostic issues for an operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<DiagnosticIssue>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, issue: DiagnosticIssue) {
        self.issues.push(issue);
    }

    pub fn add_warning(&mut self, category: &str, message: &str) {
        self.issues
            .push(DiagnosticIssue::new(Severity::Warning, category, message));
    }

    pub fn add_warning_with_entity(&mut self, category: &str, message: &str, entity: &str) {
        self.issues
            .push(DiagnosticIssue::new(Severity::Warning, category, message).with_entity(entity));
    }

    pub fn add_error(&mut self, category: &str, message: &str) {
        self.issues
            .push(DiagnosticIssue::new(Severity::Error, category, message));
    }

    pub fn add_error_with_entity(&mut self, category: &str, message: &str, entity: &str) {
        self.issues
            .push(DiagnosticIssue::new(Severity::Error, category, message).with_entity(entity));
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Warning)
    }

    /// Get only error issues
    pub fn errors(&self) -> impl Iterator<Item = &DiagnosticIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    /// Get only warning issues
    pub fn warnings(&self) -> impl Iterator<Item = &DiagnosticIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    /// Merge another diagnostics into this one
    pub fn merge(&mut self, other: Diagnostics) {
        self.issues.extend(other.issues);
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        let warnings = self.warning_count();
        let errors = self.error_count();

        match (warnings, errors) {
            (0, 0) => "No issues".to_string(),
            (w, 0) => format!("{} warning{}", w, if w == 1 { "" } else { "s" }),
            (0, e) => format!("{} error{}", e, if e == 1 { "" } else { "s" }),
            (w, e) => format!(
                "{} warning{}, {} error{}",
                w,
                if w == 1 { "" } else { "s" },
                e,
                if e == 1 { "" } else { "s" }
            ),
        }
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Diagnostics: {}", self.summary())?;
        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }
        Ok(())
    }
}

/// Statistics about an import operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportStats {
    /// Rows read from the source file
    pub rows: usize,
    /// Records that made it into the roster
    pub cells: usize,
    /// Rows dropped because they could not be processed
    pub skipped_rows: usize,
    /// Stored derived values replaced by their recomputation
    pub recomputed_values: usize,
}

/// Complete diagnostics for an import operation.
///
/// Combines import statistics with diagnostic issues. This is the
/// primary companion type for importer functions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportDiagnostics {
    pub stats: ImportStats,
    #[serde(flatten)]
    pub issues: Diagnostics,
}

impl ImportDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning with entity reference, counting a recomputed value
    pub fn add_recomputed(&mut self, message: &str, entity: &str) {
        self.issues.add_warning_with_entity("derived", message, entity);
        self.stats.recomputed_values += 1;
    }

    /// Add an error with row number, counting a skipped row
    pub fn add_skipped_row(&mut self, category: &str, message: &str, row: usize) {
        self.issues
            .add(DiagnosticIssue::new(Severity::Error, category, message).with_row(row));
        self.stats.skipped_rows += 1;
    }

    pub fn has_errors(&self) -> bool {
        self.issues.has_errors()
    }

    pub fn has_issues(&self) -> bool {
        self.issues.has_issues()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} rows, {} cells, {} skipped | {}",
            self.stats.rows,
            self.stats.cells,
            self.stats.skipped_rows,
            self.issues.summary()
        )
    }
}

impl std::fmt::Display for ImportDiagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Import: {}", self.summary())?;
        for issue in &self.issues.issues {
            writeln!(f, "  {}", issue)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_counts() {
        let mut diag = Diagnostics::new();
        diag.add_warning("identity", "test warning");
        diag.add_error("range", "test error");

        assert_eq!(diag.warning_count(), 1);
        assert_eq!(diag.error_count(), 1);
        assert!(diag.has_issues());
        assert!(diag.has_errors());
        assert!(diag.has_warnings());
    }

    #[test]
    fn test_diagnostics_serialization() {
        let mut diag = Diagnostics::new();
        diag.add(
            DiagnosticIssue::new(Severity::Error, "parse", "Malformed capacity").with_row(7),
        );
        diag.add_warning_with_entity("identity", "Duplicate identifier", "Cell 2");

        let json = serde_json::to_string_pretty(&diag).unwrap();
        assert!(json.contains("\"error\""));
        assert!(json.contains("\"row\": 7"));
        assert!(json.contains("\"entity\": \"Cell 2\""));
    }

    #[test]
    fn test_diagnostic_issue_display() {
        let issue = DiagnosticIssue::new(Severity::Error, "range", "Capacity out of range")
            .with_entity("Cell 14")
            .with_row(3);

        let display = format!("{}", issue);
        assert!(display.contains("error"));
        assert!(display.contains("range"));
        assert!(display.contains("Cell 14"));
        assert!(display.contains("row 3"));
    }

    #[test]
    fn test_diagnostics_summary() {
        let mut diag = Diagnostics::new();
        assert_eq!(diag.summary(), "No issues");

        diag.add_warning("identity", "warning");
        assert_eq!(diag.summary(), "1 warning");

        diag.add_error("range", "error");
        assert_eq!(diag.summary(), "1 warning, 1 error");

        diag.add_warning("identity", "another warning");
        assert_eq!(diag.summary(), "2 warnings, 1 error");
    }

    #[test]
    fn test_import_diagnostics_counters() {
        let mut diag = ImportDiagnostics::new();
        diag.stats.rows = 3;
        diag.add_recomputed("Stored health disagreed with capacity", "Cell 1");
        diag.add_skipped_row("range", "Capacity out of range", 2);
        diag.stats.cells = 2;

        assert_eq!(diag.stats.recomputed_values, 1);
        assert_eq!(diag.stats.skipped_rows, 1);
        assert!(diag.has_errors());
        assert!(diag.summary().contains("3 rows"));
        assert!(diag.summary().contains("1 skipped"));
    }

    #[test]
    fn test_diagnostics_merge() {
        let mut diag1 = Diagnostics::new();
        diag1.add_warning("identity", "warning 1");

        let mut diag2 = Diagnostics::new();
        diag2.add_error("range", "error 1");

        diag1.merge(diag2);
        assert_eq!(diag1.warning_count(), 1);
        assert_eq!(diag1.error_count(), 1);
    }
}
