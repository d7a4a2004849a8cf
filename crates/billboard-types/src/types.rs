use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule severity, ordered from least to most serious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Size,
    Placement,
    Permit,
    Structural,
    Content,
}

impl RuleCategory {
    pub const ALL: [RuleCategory; 5] = [
        RuleCategory::Size,
        RuleCategory::Placement,
        RuleCategory::Permit,
        RuleCategory::Structural,
        RuleCategory::Content,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Size => "size",
            RuleCategory::Placement => "placement",
            RuleCategory::Permit => "permit",
            RuleCategory::Structural => "structural",
            RuleCategory::Content => "content",
        }
    }

    /// Parse a lowercase category name; unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Overall risk tier of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Descriptive half of a compliance rule, usable without running it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMetadata {
    pub id: String, // e.g., "PERMIT_001"
    pub category: RuleCategory,
    pub name: String,
    pub description: String,
    pub severity: Severity,
}

/// Details of a failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub message: String,
    pub recommended_action: String,
    /// Fine in whole currency units. Absent counts as zero.
    pub fine_amount: Option<u64>,
}

impl Finding {
    pub fn new(
        message: impl Into<String>,
        recommended_action: impl Into<String>,
        fine_amount: u64,
    ) -> Self {
        Self {
            message: message.into(),
            recommended_action: recommended_action.into(),
            fine_amount: Some(fine_amount),
        }
    }

    pub fn fine(&self) -> u64 {
        self.fine_amount.unwrap_or(0)
    }
}

/// Result of running one rule against one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComplianceOutcome {
    Compliant,
    Violation(Finding),
}

impl ComplianceOutcome {
    pub fn is_compliant(&self) -> bool {
        matches!(self, ComplianceOutcome::Compliant)
    }

    pub fn finding(&self) -> Option<&Finding> {
        match self {
            ComplianceOutcome::Compliant => None,
            ComplianceOutcome::Violation(finding) => Some(finding),
        }
    }

    pub fn into_finding(self) -> Option<Finding> {
        match self {
            ComplianceOutcome::Compliant => None,
            ComplianceOutcome::Violation(finding) => Some(finding),
        }
    }
}

/// A violated rule paired with what it found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleViolation {
    pub rule: RuleMetadata,
    pub finding: Finding,
}

/// Per-severity tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl SeverityCounts {
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Low => self.low += 1,
            Severity::Medium => self.medium += 1,
            Severity::High => self.high += 1,
            Severity::Critical => self.critical += 1,
        }
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
            Severity::Critical => self.critical,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.critical
    }
}

impl FromIterator<Severity> for SeverityCounts {
    fn from_iter<I: IntoIterator<Item = Severity>>(iter: I) -> Self {
        let mut counts = SeverityCounts::default();
        for severity in iter {
            counts.record(severity);
        }
        counts
    }
}

/// Headline verdict shown next to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Compliant,
    Warning,
    Violation,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Compliant => "compliant",
            ReportStatus::Warning => "warning",
            ReportStatus::Violation => "violation",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Aggregate result of evaluating one record against a catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub overall_compliance: bool,
    pub violations: Vec<RuleViolation>, // Catalogue order
    pub compliance_score: u8,
    pub total_fines: u64,
    pub risk_level: RiskLevel,
    pub rules_evaluated: usize,
    pub severity_counts: SeverityCounts,
}

impl ComplianceReport {
    /// Compliant when nothing fired, violation when risk is critical,
    /// warning for everything in between.
    pub fn status(&self) -> ReportStatus {
        if self.overall_compliance {
            ReportStatus::Compliant
        } else if self.risk_level == RiskLevel::Critical {
            ReportStatus::Violation
        } else {
            ReportStatus::Warning
        }
    }

    /// Highest severity among the violations, if any.
    pub fn highest_severity(&self) -> Option<Severity> {
        self.violations.iter().map(|v| v.rule.severity).max()
    }

    pub fn violation_ids(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.rule.id.as_str()).collect()
    }

    pub fn violation_messages(&self) -> Vec<&str> {
        self.violations
            .iter()
            .map(|v| v.finding.message.as_str())
            .collect()
    }
}
