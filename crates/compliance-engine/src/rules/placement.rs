// Setback distances from intersections and schools
use crate::rule::{metadata, ComplianceRule};
use billboard_types::{BillboardRecord, ComplianceOutcome, Finding, RuleCategory, Severity};

pub const INTERSECTION_DISTANCE_ID: &str = "PLACEMENT_001";
pub const SCHOOL_DISTANCE_ID: &str = "PLACEMENT_002";

/// Minimum feet from the nearest intersection
pub const MIN_INTERSECTION_DISTANCE_FT: f64 = 300.0;
/// Minimum feet from the nearest school
pub const MIN_SCHOOL_DISTANCE_FT: f64 = 500.0;

pub const INTERSECTION_DISTANCE_FINE: u64 = 750;
pub const SCHOOL_DISTANCE_FINE: u64 = 1500;

pub fn rules() -> Vec<ComplianceRule> {
    vec![
        ComplianceRule::new(
            metadata(
                INTERSECTION_DISTANCE_ID,
                RuleCategory::Placement,
                "Intersection Distance",
                "Billboard must be at least 300 feet from intersections",
                Severity::High,
            ),
            check_intersection_distance,
        ),
        ComplianceRule::new(
            metadata(
                SCHOOL_DISTANCE_ID,
                RuleCategory::Placement,
                "School Distance",
                "Billboard must be at least 500 feet from schools",
                Severity::Critical,
            ),
            check_school_distance,
        ),
    ]
}

/// Unmeasured distance means the rule does not apply.
pub fn check_intersection_distance(record: &BillboardRecord) -> ComplianceOutcome {
    match record.location.distance_from_intersection {
        Some(distance) if distance < MIN_INTERSECTION_DISTANCE_FT => {
            ComplianceOutcome::Violation(Finding::new(
                format!(
                    "Billboard too close to intersection ({} ft < {} ft)",
                    distance, MIN_INTERSECTION_DISTANCE_FT
                ),
                "Relocate billboard to maintain 300ft minimum distance",
                INTERSECTION_DISTANCE_FINE,
            ))
        }
        _ => ComplianceOutcome::Compliant,
    }
}

/// Unmeasured distance means the rule does not apply.
pub fn check_school_distance(record: &BillboardRecord) -> ComplianceOutcome {
    match record.location.distance_from_school {
        Some(distance) if distance < MIN_SCHOOL_DISTANCE_FT => {
            ComplianceOutcome::Violation(Finding::new(
                format!(
                    "Billboard too close to school ({} ft < {} ft)",
                    distance, MIN_SCHOOL_DISTANCE_FT
                ),
                "Immediate relocation required",
                SCHOOL_DISTANCE_FINE,
            ))
        }
        _ => ComplianceOutcome::Compliant,
    }
}
