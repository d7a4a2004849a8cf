//! Optional pre-pass rejecting malformed records
//!
//! The rules themselves never fail. Callers who cannot vouch for their
//! input run this first; nothing here adjusts the record.

use billboard_types::BillboardRecord;
use thiserror::Error;

/// Relative tolerance when comparing `area` to `width * height`
pub const AREA_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number (found: {value})")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be positive (found: {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("area {area} does not match width x height ({width} x {height} = {expected})")]
    AreaMismatch {
        width: f64,
        height: f64,
        area: f64,
        expected: f64,
    },

    #[error("{field} must not be negative (found: {value})")]
    NegativeDistance { field: &'static str, value: f64 },
}

/// Check the record's numeric preconditions, failing on the first problem.
pub fn validate_record(record: &BillboardRecord) -> Result<(), ValidationError> {
    let dims = &record.dimensions;
    for (field, value) in [
        ("width", dims.width),
        ("height", dims.height),
        ("area", dims.area),
    ] {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field, value });
        }
        if value <= 0.0 {
            return Err(ValidationError::NonPositive { field, value });
        }
    }

    let expected = dims.width * dims.height;
    if !expected.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "width * height",
            value: expected,
        });
    }
    if (dims.area - expected).abs() > AREA_TOLERANCE * expected.max(1.0) {
        return Err(ValidationError::AreaMismatch {
            width: dims.width,
            height: dims.height,
            area: dims.area,
            expected,
        });
    }

    let location = &record.location;
    for (field, distance) in [
        ("distance_from_intersection", location.distance_from_intersection),
        ("distance_from_school", location.distance_from_school),
        ("distance_from_residential", location.distance_from_residential),
    ] {
        let Some(value) = distance else { continue };
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field, value });
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeDistance { field, value });
        }
    }

    Ok(())
}
