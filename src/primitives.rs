//! Geometry primitive types
//!
//! The closed set of kinds the wire format can carry: points, segments,
//! and lines. Each primitive encodes itself into a tagged wire record.
//! Construction performs no range validation; any `f64` is accepted.
//! Non-finite coordinates serialize to JSON `null` because JSON has no
//! NaN or infinity, so round-trips are only guaranteed for finite values.

use serde_json::{json, Value};

use crate::wire;

/// Kind of geometry object, one per wire tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    Segment,
    Line,
}

impl GeometryKind {
    /// Map a wire tag to a kind. Unknown tags map to `None`; the decoder
    /// drops the record they came from.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            wire::TAG_POINT => Some(GeometryKind::Point),
            wire::TAG_SEGMENT => Some(GeometryKind::Segment),
            wire::TAG_LINE => Some(GeometryKind::Line),
            _ => None,
        }
    }

    /// Get the wire tag for this kind
    pub fn tag(&self) -> &'static str {
        match self {
            GeometryKind::Point => wire::TAG_POINT,
            GeometryKind::Segment => wire::TAG_SEGMENT,
            GeometryKind::Line => wire::TAG_LINE,
        }
    }
}

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Encode as a tagged wire record
    pub fn encode(&self) -> Value {
        json!({ "type": wire::TAG_POINT, "coordinates": [self.x, self.y] })
    }

    pub fn kind(&self) -> GeometryKind {
        GeometryKind::Point
    }
}

/// A 2D segment bounded by its two endpoints `p` and `q`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub p: Point2,
    pub q: Point2,
}

impl Segment2 {
    pub fn new(p: Point2, q: Point2) -> Self {
        Self { p, q }
    }

    /// Encode as a tagged wire record with nested point records
    pub fn encode(&self) -> Value {
        json!({ "type": wire::TAG_SEGMENT, "points": [self.p.encode(), self.q.encode()] })
    }

    pub fn kind(&self) -> GeometryKind {
        GeometryKind::Segment
    }
}

/// An infinite 2D line determined by two points `p` and `q`
///
/// Structurally identical to [`Segment2`]; distinguished only by its wire
/// tag and by which document collection it lands in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2 {
    pub p: Point2,
    pub q: Point2,
}

impl Line2 {
    pub fn new(p: Point2, q: Point2) -> Self {
        Self { p, q }
    }

    /// Encode as a tagged wire record with nested point records
    pub fn encode(&self) -> Value {
        json!({ "type": wire::TAG_LINE, "points": [self.p.encode(), self.q.encode()] })
    }

    pub fn kind(&self) -> GeometryKind {
        GeometryKind::Line
    }
}

/// A decoded geometry object of any kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryObject {
    Point(Point2),
    Segment(Segment2),
    Line(Line2),
}

impl GeometryObject {
    pub fn kind(&self) -> GeometryKind {
        match self {
            GeometryObject::Point(_) => GeometryKind::Point,
            GeometryObject::Segment(_) => GeometryKind::Segment,
            GeometryObject::Line(_) => GeometryKind::Line,
        }
    }

    /// Encode as a tagged wire record
    pub fn encode(&self) -> Value {
        match self {
            GeometryObject::Point(point) => point.encode(),
            GeometryObject::Segment(segment) => segment.encode(),
            GeometryObject::Line(line) => line.encode(),
        }
    }
}
