//! Billboard compliance engine
//!
//! Runs a [`Catalogue`] of regulatory rules against a [`BillboardRecord`]
//! and folds the results into a [`ComplianceReport`]: violations in
//! catalogue order, a 0-100 score, total fine exposure and a risk tier.
//! Evaluation is pure; the same record and catalogue always produce the
//! same report.

pub mod catalogue;
pub mod penalties;
pub mod rule;
pub mod rules;
pub mod scoring;
pub mod validation;

pub use catalogue::{Catalogue, CatalogueError};
pub use penalties::{appeal_deadline, penalty_schedule, required_enforcement, EnforcementAction};
pub use rule::{ComplianceRule, RuleCheck};
pub use validation::{validate_record, ValidationError};

use billboard_types::{
    BillboardRecord, ComplianceReport, RuleCategory, RuleViolation, SeverityCounts,
};
use tracing::debug;

/// ComplianceEngine entry point
#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    catalogue: Catalogue,
}

impl ComplianceEngine {
    pub fn new(catalogue: Catalogue) -> Self {
        Self { catalogue }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn evaluate(&self, record: &BillboardRecord) -> ComplianceReport {
        evaluate(record, &self.catalogue)
    }

    /// Run the validation pre-pass, then evaluate.
    pub fn evaluate_validated(
        &self,
        record: &BillboardRecord,
    ) -> Result<ComplianceReport, ValidationError> {
        validate_record(record)?;
        Ok(self.evaluate(record))
    }

    pub fn rules_by_category(&self, category: RuleCategory) -> Vec<&ComplianceRule> {
        self.catalogue.rules_by_category(category)
    }

    pub fn rule_by_id(&self, id: &str) -> Option<&ComplianceRule> {
        self.catalogue.rule_by_id(id)
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new(Catalogue::builtin())
    }
}

/// Evaluate `record` against every rule in `catalogue`.
pub fn evaluate(record: &BillboardRecord, catalogue: &Catalogue) -> ComplianceReport {
    let mut violations = Vec::new();
    let mut severity_counts = SeverityCounts::default();
    let mut total_fines: u64 = 0;

    for rule in catalogue {
        let Some(finding) = rule.evaluate(record).into_finding() else {
            continue;
        };

        debug!(
            rule_id = rule.id(),
            severity = %rule.severity(),
            fine = finding.fine(),
            "rule violated"
        );

        severity_counts.record(rule.severity());
        total_fines = total_fines.saturating_add(finding.fine());
        violations.push(RuleViolation {
            rule: rule.metadata().clone(),
            finding,
        });
    }

    let compliance_score = scoring::compliance_score(catalogue.len(), violations.len());
    let risk_level = scoring::classify_risk(&severity_counts);

    debug!(
        rules = catalogue.len(),
        violations = violations.len(),
        score = compliance_score,
        total_fines,
        risk = %risk_level,
        "evaluation complete"
    );

    ComplianceReport {
        overall_compliance: violations.is_empty(),
        violations,
        compliance_score,
        total_fines,
        risk_level,
        rules_evaluated: catalogue.len(),
        severity_counts,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::metadata;
    use crate::test_support::compliant_record;
    use billboard_types::{
        ComplianceOutcome, Dimensions, Finding, Location, ReportStatus, RiskLevel, Severity,
        ZoneType,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_engine_accepts_compliant_billboard() {
        let engine = ComplianceEngine::default();
        let report = engine.evaluate(&compliant_record());

        assert!(report.overall_compliance);
        assert!(report.violations.is_empty());
        assert_eq!(report.compliance_score, 100);
        assert_eq!(report.total_fines, 0);
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert_eq!(report.rules_evaluated, 8);
        assert_eq!(report.status(), ReportStatus::Compliant);
    }

    #[test]
    fn test_engine_oversized_without_permit() {
        let mut record = compliant_record();
        record.dimensions = Dimensions::from_sides(15.0, 10.0);
        record.location = Location::in_zone(ZoneType::Commercial);
        record.permit.has_permit = false;
        record.permit.is_visible = false;

        let report = ComplianceEngine::default().evaluate(&record);

        assert_eq!(report.violation_ids(), vec!["SIZE_001", "PERMIT_001"]);
        assert_eq!(report.compliance_score, 75);
        assert_eq!(report.total_fines, 1500);
        assert_eq!(report.risk_level, RiskLevel::Medium);
        assert_eq!(report.severity_counts.high, 2);
        assert_eq!(report.status(), ReportStatus::Warning);
    }

    #[test]
    fn test_engine_structural_issue_is_critical() {
        let mut record = compliant_record();
        record.structural.has_structural_issues = true;

        let report = ComplianceEngine::default().evaluate(&record);
        assert_eq!(report.risk_level, RiskLevel::Critical);
        assert_eq!(report.status(), ReportStatus::Violation);
        assert_eq!(report.total_fines, 2000);
    }

    #[test]
    fn test_engine_three_high_violations_is_high_risk() {
        let mut record = compliant_record();
        record.dimensions.area = 130.0;
        record.dimensions.width = 13.0;
        record.location.distance_from_intersection = Some(100.0);
        record.permit.has_permit = false;

        let report = ComplianceEngine::default().evaluate(&record);
        assert_eq!(
            report.violation_ids(),
            vec!["SIZE_001", "PLACEMENT_001", "PERMIT_001"]
        );
        assert_eq!(report.risk_level, RiskLevel::High);
        assert_eq!(report.total_fines, 2250);
        assert_eq!(report.compliance_score, 63);
    }

    #[test]
    fn test_engine_four_low_violations_is_medium_risk() {
        let failing_low = |id: &str| {
            ComplianceRule::new(
                metadata(id, RuleCategory::Content, id, "", Severity::Low),
                |_: &BillboardRecord| {
                    ComplianceOutcome::Violation(Finding {
                        message: "low".to_string(),
                        recommended_action: "none".to_string(),
                        fine_amount: None,
                    })
                },
            )
        };
        let catalogue = Catalogue::new(vec![
            failing_low("L1"),
            failing_low("L2"),
            failing_low("L3"),
            failing_low("L4"),
        ])
        .unwrap();

        let report = evaluate(&compliant_record(), &catalogue);
        assert_eq!(report.violations.len(), 4);
        assert_eq!(report.total_fines, 0);
        assert_eq!(report.compliance_score, 0);
        assert_eq!(report.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_engine_empty_catalogue() {
        let mut record = compliant_record();
        record.structural.has_structural_issues = true;

        let engine = ComplianceEngine::new(Catalogue::empty());
        let report = engine.evaluate(&record);
        assert!(report.overall_compliance);
        assert_eq!(report.compliance_score, 100);
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert_eq!(report.rules_evaluated, 0);
    }

    #[test]
    fn test_engine_custom_catalogue_subset() {
        let catalogue = Catalogue::builtin().without_rule("STRUCTURAL_001");
        let mut record = compliant_record();
        record.structural.has_structural_issues = true;

        let report = evaluate(&record, &catalogue);
        assert!(report.overall_compliance);
        assert_eq!(report.rules_evaluated, 7);
    }

    #[test]
    fn test_engine_queries() {
        let engine = ComplianceEngine::default();
        assert_eq!(engine.rules_by_category(RuleCategory::Placement).len(), 2);
        assert_eq!(
            engine.rule_by_id("CONTENT_002").map(ComplianceRule::name),
            Some("Flashing Lights Prohibited")
        );
        assert!(engine.rule_by_id("content_002").is_none());
    }

    #[test]
    fn test_evaluate_validated_rejects_bad_area() {
        let mut record = compliant_record();
        record.dimensions.area = 10.0;

        let engine = ComplianceEngine::default();
        assert!(matches!(
            engine.evaluate_validated(&record),
            Err(ValidationError::AreaMismatch { .. })
        ));
        assert!(engine.evaluate_validated(&compliant_record()).is_ok());
    }

    #[test]
    fn test_violation_carries_rule_metadata() {
        let mut record = compliant_record();
        record.content.flashing_lights = true;

        let report = ComplianceEngine::default().evaluate(&record);
        let violation = &report.violations[0];
        assert_eq!(violation.rule.id, "CONTENT_002");
        assert_eq!(violation.rule.category, RuleCategory::Content);
        assert_eq!(violation.rule.severity, Severity::Medium);
        assert_eq!(
            violation.finding.recommended_action,
            "Remove flashing lights, static illumination only"
        );
        assert_eq!(report.risk_level, RiskLevel::Low);
    }
}
