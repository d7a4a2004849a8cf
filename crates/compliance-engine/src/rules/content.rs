// Displayed content and lighting
use crate::rule::{metadata, ComplianceRule};
use billboard_types::{BillboardRecord, ComplianceOutcome, Finding, RuleCategory, Severity};

pub const PROHIBITED_CONTENT_ID: &str = "CONTENT_001";
pub const FLASHING_LIGHTS_ID: &str = "CONTENT_002";

pub const PROHIBITED_CONTENT_FINE: u64 = 300;
pub const FLASHING_LIGHTS_FINE: u64 = 400;

pub fn rules() -> Vec<ComplianceRule> {
    vec![
        ComplianceRule::new(
            metadata(
                PROHIBITED_CONTENT_ID,
                RuleCategory::Content,
                "Prohibited Content",
                "Billboard must not contain prohibited content",
                Severity::Medium,
            ),
            check_prohibited_content,
        ),
        ComplianceRule::new(
            metadata(
                FLASHING_LIGHTS_ID,
                RuleCategory::Content,
                "Flashing Lights Prohibited",
                "Billboard cannot have flashing or moving lights",
                Severity::Medium,
            ),
            check_flashing_lights,
        ),
    ]
}

pub fn check_prohibited_content(record: &BillboardRecord) -> ComplianceOutcome {
    if record.content.has_prohibited_content {
        return ComplianceOutcome::Violation(Finding::new(
            "Billboard contains prohibited content",
            "Remove or modify prohibited content",
            PROHIBITED_CONTENT_FINE,
        ));
    }

    ComplianceOutcome::Compliant
}

/// Static illumination is fine; only flashing is checked.
pub fn check_flashing_lights(record: &BillboardRecord) -> ComplianceOutcome {
    if record.content.flashing_lights {
        return ComplianceOutcome::Violation(Finding::new(
            "Billboard has prohibited flashing lights",
            "Remove flashing lights, static illumination only",
            FLASHING_LIGHTS_FINE,
        ));
    }

    ComplianceOutcome::Compliant
}
