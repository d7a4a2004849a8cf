//! Record fixtures shared by the integration tests

#![allow(dead_code)]

use billboard_types::{
    BillboardRecord, Content, Dimensions, Location, Permit, Structural, SupportCondition,
    ZoneType,
};
use proptest::prelude::*;

/// Commercial billboard that passes every built-in rule.
pub fn clean_record() -> BillboardRecord {
    BillboardRecord {
        dimensions: Dimensions::from_sides(12.0, 8.0),
        location: Location::in_zone(ZoneType::Commercial),
        permit: Permit {
            has_permit: true,
            is_visible: true,
            permit_number: Some("BB-7781".to_string()),
            expiration_date: None,
        },
        structural: Structural {
            has_structural_issues: false,
            support_condition: SupportCondition::Good,
            last_inspection_date: None,
        },
        content: Content {
            has_prohibited_content: false,
            is_illuminated: true,
            flashing_lights: false,
        },
    }
}

pub fn zone() -> impl Strategy<Value = ZoneType> {
    prop_oneof![
        Just(ZoneType::Commercial),
        Just(ZoneType::Industrial),
        Just(ZoneType::Residential),
        Just(ZoneType::Highway),
    ]
}

pub fn condition() -> impl Strategy<Value = SupportCondition> {
    prop_oneof![
        Just(SupportCondition::Good),
        Just(SupportCondition::Fair),
        Just(SupportCondition::Poor),
        Just(SupportCondition::Critical),
    ]
}

fn distance() -> impl Strategy<Value = Option<f64>> {
    proptest::option::of(0.0f64..1200.0)
}

/// Arbitrary well-formed record.
pub fn record() -> impl Strategy<Value = BillboardRecord> {
    (
        (1.0f64..30.0, 1.0f64..15.0),
        (zone(), distance(), distance(), distance()),
        (any::<bool>(), any::<bool>()),
        (any::<bool>(), condition()),
        (any::<bool>(), any::<bool>(), any::<bool>()),
    )
        .prop_map(
            |(
                (width, height),
                (zone_type, intersection, school, residential),
                (has_permit, is_visible),
                (has_structural_issues, support_condition),
                (has_prohibited_content, is_illuminated, flashing_lights),
            )| BillboardRecord {
                dimensions: Dimensions::from_sides(width, height),
                location: Location {
                    zone_type,
                    distance_from_intersection: intersection,
                    distance_from_school: school,
                    distance_from_residential: residential,
                },
                permit: Permit {
                    has_permit,
                    is_visible,
                    permit_number: None,
                    expiration_date: None,
                },
                structural: Structural {
                    has_structural_issues,
                    support_condition,
                    last_inspection_date: None,
                },
                content: Content {
                    has_prohibited_content,
                    is_illuminated,
                    flashing_lights,
                },
            },
        )
}
