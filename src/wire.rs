//! Wire-format record decoding
//!
//! The wire format is a flat JSON array of tagged records. Decoding is an
//! explicit recursive descent over the already-parsed value: a record with
//! a known tag must decode fully or the whole decode aborts, while a record
//! with an unknown or missing tag resolves to `None` and is dropped by the
//! caller. Nested endpoints of segments and lines must themselves be
//! `point_2` records.

use serde_json::Value;

use crate::error::{GeometryError, Result};
use crate::primitives::{GeometryKind, GeometryObject, Line2, Point2, Segment2};

/// Wire tag for a 2D point record
pub const TAG_POINT: &str = "point_2";
/// Wire tag for a 2D segment record
pub const TAG_SEGMENT: &str = "segment_2";
/// Wire tag for a 2D line record
pub const TAG_LINE: &str = "line_2";

/// Decode a single top-level record.
///
/// Returns `Ok(None)` for records whose `type` tag is absent or not one of
/// the three known tags.
pub fn decode_record(value: &Value) -> Result<Option<GeometryObject>> {
    let tag = match value.get("type").and_then(Value::as_str) {
        Some(tag) => tag,
        None => return Ok(None),
    };
    let kind = match GeometryKind::from_tag(tag) {
        Some(kind) => kind,
        None => return Ok(None),
    };

    let object = match kind {
        GeometryKind::Point => GeometryObject::Point(decode_point(value)?),
        GeometryKind::Segment => {
            let (p, q) = decode_endpoints(value, TAG_SEGMENT)?;
            GeometryObject::Segment(Segment2::new(p, q))
        }
        GeometryKind::Line => {
            let (p, q) = decode_endpoints(value, TAG_LINE)?;
            GeometryObject::Line(Line2::new(p, q))
        }
    };
    Ok(Some(object))
}

/// Decode the `coordinates` pair of a `point_2` record
fn decode_point(value: &Value) -> Result<Point2> {
    let coordinates = value
        .get("coordinates")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed(TAG_POINT, "missing coordinates array"))?;

    let (x, y) = match coordinates.as_slice() {
        [x, y] => (x, y),
        _ => return Err(malformed(TAG_POINT, "coordinates must hold exactly two entries")),
    };

    match (x.as_f64(), y.as_f64()) {
        (Some(x), Some(y)) => Ok(Point2::new(x, y)),
        _ => Err(malformed(TAG_POINT, "coordinates must be numbers")),
    }
}

/// Decode the `points` pair of a `segment_2` or `line_2` record
fn decode_endpoints(value: &Value, tag: &str) -> Result<(Point2, Point2)> {
    let points = value
        .get("points")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed(tag, "missing points array"))?;

    let (p, q) = match points.as_slice() {
        [p, q] => (p, q),
        _ => return Err(malformed(tag, "points must hold exactly two entries")),
    };

    Ok((decode_nested_point(p, tag)?, decode_nested_point(q, tag)?))
}

/// Endpoints are not dropped on unknown tags: anything other than a
/// `point_2` record here is a reconstruction error.
fn decode_nested_point(value: &Value, tag: &str) -> Result<Point2> {
    match value.get("type").and_then(Value::as_str) {
        Some(TAG_POINT) => decode_point(value),
        _ => Err(malformed(tag, "endpoints must be point_2 records")),
    }
}

fn malformed(tag: &str, reason: &str) -> GeometryError {
    GeometryError::MalformedRecord {
        tag: tag.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_point_record() {
        let record = json!({ "type": "point_2", "coordinates": [1.0, -2.5] });
        let object = decode_record(&record).unwrap().unwrap();
        assert_eq!(object, GeometryObject::Point(Point2::new(1.0, -2.5)));
    }

    #[test]
    fn test_decode_segment_record() {
        let record = json!({
            "type": "segment_2",
            "points": [
                { "type": "point_2", "coordinates": [0.0, 0.0] },
                { "type": "point_2", "coordinates": [5.0, 5.0] }
            ]
        });
        let object = decode_record(&record).unwrap().unwrap();
        assert_eq!(
            object,
            GeometryObject::Segment(Segment2::new(Point2::new(0.0, 0.0), Point2::new(5.0, 5.0)))
        );
    }

    #[test]
    fn test_unknown_tag_resolves_to_none() {
        let record = json!({ "type": "circle_2", "center": [0.0, 0.0] });
        assert_eq!(decode_record(&record).unwrap(), None);
    }

    #[test]
    fn test_missing_tag_resolves_to_none() {
        let record = json!({ "coordinates": [1.0, 2.0] });
        assert_eq!(decode_record(&record).unwrap(), None);
    }

    #[test]
    fn test_wrong_coordinate_arity_is_an_error() {
        let record = json!({ "type": "point_2", "coordinates": [1.0, 2.0, 3.0] });
        let err = decode_record(&record).unwrap_err();
        assert!(matches!(err, GeometryError::MalformedRecord { .. }));
    }

    #[test]
    fn test_non_numeric_coordinates_are_an_error() {
        let record = json!({ "type": "point_2", "coordinates": ["a", "b"] });
        assert!(decode_record(&record).is_err());
    }

    #[test]
    fn test_line_endpoint_must_be_a_point_record() {
        let record = json!({
            "type": "line_2",
            "points": [
                { "type": "point_2", "coordinates": [0.0, 0.0] },
                { "type": "segment_2", "points": [] }
            ]
        });
        let err = decode_record(&record).unwrap_err();
        assert!(matches!(err, GeometryError::MalformedRecord { ref tag, .. } if tag == "line_2"));
    }

    #[test]
    fn test_wrong_endpoint_arity_is_an_error() {
        let record = json!({
            "type": "segment_2",
            "points": [{ "type": "point_2", "coordinates": [0.0, 0.0] }]
        });
        assert!(decode_record(&record).is_err());
    }
}
