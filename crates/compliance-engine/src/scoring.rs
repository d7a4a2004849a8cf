//! Score and risk aggregation over a set of violations

use billboard_types::{RiskLevel, SeverityCounts};

/// Percentage of rules passed, rounded half up and clamped to [0, 100].
///
/// An empty catalogue has nothing to fail and scores 100.
pub fn compliance_score(rule_count: usize, violation_count: usize) -> u8 {
    if rule_count == 0 {
        return 100;
    }

    let passed = rule_count.saturating_sub(violation_count) as u128;
    let total = rule_count as u128;
    // round(100 * passed / total) in integers
    let score = (200 * passed + total) / (2 * total);
    score.min(100) as u8
}

/// Risk tier, first match wins:
/// any critical, then more than two high, then any high or more than
/// three violations overall.
pub fn classify_risk(counts: &SeverityCounts) -> RiskLevel {
    if counts.critical > 0 {
        RiskLevel::Critical
    } else if counts.high > 2 {
        RiskLevel::High
    } else if counts.high > 0 || counts.total() > 3 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
