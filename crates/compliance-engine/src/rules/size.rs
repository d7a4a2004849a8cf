// Face area limits by zone
use crate::rule::{metadata, ComplianceRule};
use billboard_types::{
    BillboardRecord, ComplianceOutcome, Finding, RuleCategory, Severity, ZoneType,
};

pub const SIZE_LIMIT_ID: &str = "SIZE_001";

/// Maximum face area in square feet outside highway zones
pub const MAX_AREA_SQ_FT: f64 = 120.0;
/// Maximum face area in square feet in highway zones
pub const MAX_HIGHWAY_AREA_SQ_FT: f64 = 200.0;
pub const SIZE_LIMIT_FINE: u64 = 500;

pub fn rules() -> Vec<ComplianceRule> {
    vec![ComplianceRule::new(
        metadata(
            SIZE_LIMIT_ID,
            RuleCategory::Size,
            "Maximum Size Limit",
            "Billboard must not exceed 120 square feet in commercial zones",
            Severity::High,
        ),
        check_size_limit,
    )]
}

/// Area limit for a zone
pub fn max_area_for(zone: ZoneType) -> f64 {
    match zone {
        ZoneType::Highway => MAX_HIGHWAY_AREA_SQ_FT,
        _ => MAX_AREA_SQ_FT,
    }
}

pub fn check_size_limit(record: &BillboardRecord) -> ComplianceOutcome {
    let max_area = max_area_for(record.location.zone_type);
    let area = record.dimensions.area;

    if area > max_area {
        return ComplianceOutcome::Violation(Finding::new(
            format!(
                "Billboard exceeds maximum size limit ({} sq ft > {} sq ft)",
                area, max_area
            ),
            "Reduce billboard size or relocate to appropriate zone",
            SIZE_LIMIT_FINE,
        ));
    }

    ComplianceOutcome::Compliant
}
