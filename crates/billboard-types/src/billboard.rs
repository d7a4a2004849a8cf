//! Billboard record supplied to the compliance engine
//!
//! A record is built by the caller (field survey, detection pipeline, form
//! input) and handed to the engine fully formed. Optional distances mean
//! "not measured" and exempt the matching placement rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One physical billboard at evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillboardRecord {
    pub dimensions: Dimensions,
    pub location: Location,
    pub permit: Permit,
    pub structural: Structural,
    pub content: Content,
}

/// Face dimensions. `area` must equal `width * height`; keeping them
/// consistent is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub area: f64,
}

impl Dimensions {
    /// Build dimensions with the area derived from width and height.
    pub fn from_sides(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            area: width * height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    Commercial,
    Industrial,
    Residential,
    Highway,
}

impl ZoneType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneType::Commercial => "commercial",
            ZoneType::Industrial => "industrial",
            ZoneType::Residential => "residential",
            ZoneType::Highway => "highway",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub zone_type: ZoneType,
    /// Feet to the nearest intersection, if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_intersection: Option<f64>,
    /// Feet to the nearest school, if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_school: Option<f64>,
    /// Feet to the nearest residential boundary, if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_residential: Option<f64>,
}

impl Location {
    /// Location in `zone_type` with no distances measured.
    pub fn in_zone(zone_type: ZoneType) -> Self {
        Self {
            zone_type,
            distance_from_intersection: None,
            distance_from_school: None,
            distance_from_residential: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permit {
    pub has_permit: bool,
    pub is_visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permit_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
}

impl Permit {
    /// True when an expiration date is on file and falls before `date`.
    /// A permit without an expiration date never counts as expired.
    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        self.expiration_date.is_some_and(|expires| expires < date)
    }
}

/// Condition of the support structure, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportCondition {
    Good,
    Fair,
    Poor,
    Critical,
}

impl SupportCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportCondition::Good => "good",
            SupportCondition::Fair => "fair",
            SupportCondition::Poor => "poor",
            SupportCondition::Critical => "critical",
        }
    }

    /// Poor and critical supports are unsafe.
    pub fn is_unsafe(&self) -> bool {
        *self >= SupportCondition::Poor
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structural {
    pub has_structural_issues: bool,
    pub support_condition: SupportCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_inspection_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub has_prohibited_content: bool,
    #[serde(default)]
    pub is_illuminated: bool,
    pub flashing_lights: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_support_condition_ordering() {
        assert!(SupportCondition::Good < SupportCondition::Fair);
        assert!(SupportCondition::Fair < SupportCondition::Poor);
        assert!(SupportCondition::Poor < SupportCondition::Critical);
        assert!(!SupportCondition::Fair.is_unsafe());
        assert!(SupportCondition::Poor.is_unsafe());
        assert!(SupportCondition::Critical.is_unsafe());
    }

    #[test]
    fn test_dimensions_from_sides() {
        let dims = Dimensions::from_sides(12.0, 10.0);
        assert_eq!(dims.area, 120.0);
    }

    #[test]
    fn test_permit_expiry() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut permit = Permit {
            has_permit: true,
            is_visible: true,
            permit_number: Some("BB-1042".to_string()),
            expiration_date: NaiveDate::from_ymd_opt(2024, 5, 31),
        };
        assert!(permit.is_expired_on(today));

        permit.expiration_date = Some(today);
        assert!(!permit.is_expired_on(today));

        permit.expiration_date = None;
        assert!(!permit.is_expired_on(today));
    }

    #[test]
    fn test_expiry_ignores_permit_flag() {
        let permit = Permit {
            has_permit: false,
            is_visible: false,
            permit_number: None,
            expiration_date: NaiveDate::from_ymd_opt(2023, 12, 31),
        };
        assert!(permit.is_expired_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
    }

    #[test]
    fn test_record_deserializes_with_missing_distances() {
        let json = r#"{
            "dimensions": { "width": 15.0, "height": 10.0, "area": 150.0 },
            "location": { "zone_type": "highway", "distance_from_school": 820.5 },
            "permit": { "has_permit": true, "is_visible": false, "expiration_date": "2025-12-31" },
            "structural": { "has_structural_issues": false, "support_condition": "fair" },
            "content": { "has_prohibited_content": false, "flashing_lights": true }
        }"#;

        let record: BillboardRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.location.zone_type, ZoneType::Highway);
        assert_eq!(record.location.distance_from_intersection, None);
        assert_eq!(record.location.distance_from_school, Some(820.5));
        assert_eq!(
            record.permit.expiration_date,
            NaiveDate::from_ymd_opt(2025, 12, 31)
        );
        assert_eq!(record.structural.support_condition, SupportCondition::Fair);
        assert!(!record.content.is_illuminated);
    }
}
