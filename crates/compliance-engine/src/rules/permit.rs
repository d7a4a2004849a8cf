// Permit existence and display
//
// The two permit rules never fire together: visibility is only checked
// once a permit exists.
use crate::rule::{metadata, ComplianceRule};
use billboard_types::{BillboardRecord, ComplianceOutcome, Finding, RuleCategory, Severity};

pub const PERMIT_REQUIRED_ID: &str = "PERMIT_001";
pub const PERMIT_VISIBILITY_ID: &str = "PERMIT_002";

pub const PERMIT_REQUIRED_FINE: u64 = 1000;
pub const PERMIT_VISIBILITY_FINE: u64 = 250;

pub fn rules() -> Vec<ComplianceRule> {
    vec![
        ComplianceRule::new(
            metadata(
                PERMIT_REQUIRED_ID,
                RuleCategory::Permit,
                "Valid Permit Required",
                "Billboard must have a valid permit",
                Severity::High,
            ),
            check_permit_required,
        ),
        ComplianceRule::new(
            metadata(
                PERMIT_VISIBILITY_ID,
                RuleCategory::Permit,
                "Permit Visibility",
                "Permit number must be clearly displayed on the billboard",
                Severity::Medium,
            ),
            check_permit_visibility,
        ),
    ]
}

pub fn check_permit_required(record: &BillboardRecord) -> ComplianceOutcome {
    if !record.permit.has_permit {
        return ComplianceOutcome::Violation(Finding::new(
            "No valid permit found for billboard",
            "Obtain proper permits or remove billboard",
            PERMIT_REQUIRED_FINE,
        ));
    }

    ComplianceOutcome::Compliant
}

pub fn check_permit_visibility(record: &BillboardRecord) -> ComplianceOutcome {
    // Without a permit there is nothing to display
    if !record.permit.has_permit {
        return ComplianceOutcome::Compliant;
    }

    if !record.permit.is_visible {
        return ComplianceOutcome::Violation(Finding::new(
            "Permit number not clearly visible",
            "Display permit number prominently",
            PERMIT_VISIBILITY_FINE,
        ));
    }

    ComplianceOutcome::Compliant
}
