// Structural safety of the support
use crate::rule::{metadata, ComplianceRule};
use billboard_types::{BillboardRecord, ComplianceOutcome, Finding, RuleCategory, Severity};

pub const STRUCTURAL_SAFETY_ID: &str = "STRUCTURAL_001";
pub const STRUCTURAL_SAFETY_FINE: u64 = 2000;

pub fn rules() -> Vec<ComplianceRule> {
    vec![ComplianceRule::new(
        metadata(
            STRUCTURAL_SAFETY_ID,
            RuleCategory::Structural,
            "Structural Safety",
            "Billboard structure must be in safe condition",
            Severity::Critical,
        ),
        check_structural_safety,
    )]
}

/// Known issues or a poor/critical support both fail.
pub fn check_structural_safety(record: &BillboardRecord) -> ComplianceOutcome {
    let structural = &record.structural;

    if structural.has_structural_issues || structural.support_condition.is_unsafe() {
        return ComplianceOutcome::Violation(Finding::new(
            format!(
                "Structural safety concerns detected ({} condition)",
                structural.support_condition.as_str()
            ),
            "Immediate structural repairs or removal required",
            STRUCTURAL_SAFETY_FINE,
        ));
    }

    ComplianceOutcome::Compliant
}
