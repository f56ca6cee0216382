//! Audit analysis result types

use serde::{Deserialize, Serialize};

/// Findings of a security analysis, grouped by severity.
///
/// Serialization order of the four lists (critical, high, medium, low) is
/// fixed by the struct definition and feeds proof-input derivation, so two
/// equal reports always serialize to identical bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityReport {
    /// Critical-severity findings
    pub critical: Vec<String>,

    /// High-severity findings
    pub high: Vec<String>,

    /// Medium-severity findings
    pub medium: Vec<String>,

    /// Low-severity findings
    pub low: Vec<String>,
}

impl VulnerabilityReport {
    /// Total number of findings across all severities
    pub fn total(&self) -> usize {
        self.critical.len() + self.high.len() + self.medium.len() + self.low.len()
    }

    /// True when no findings were recorded at any severity
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

/// Outcome of a smart-contract security analysis.
///
/// Immutable input to proof-input derivation; field order (stars, summary,
/// vulnerabilities) defines the canonical serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Star rating assigned by the audit (0-5)
    pub stars: u8,

    /// Free-text audit summary
    pub summary: String,

    /// Findings grouped by severity
    pub vulnerabilities: VulnerabilityReport,
}

impl AnalysisResult {
    pub fn new(stars: u8, summary: impl Into<String>, vulnerabilities: VulnerabilityReport) -> Self {
        Self {
            stars,
            summary: summary.into(),
            vulnerabilities,
        }
    }

    /// Total number of findings across all severities
    pub fn finding_count(&self) -> usize {
        self.vulnerabilities.total()
    }
}
