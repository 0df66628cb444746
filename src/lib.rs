//! JSON Geometry Interchange
//!
//! A schema-validated JSON interchange format for 2D geometry primitives
//! (points, segments, lines). The crate maps between a tagged-union wire
//! representation and strongly-typed geometry values, with JSON-Schema
//! validation as a gate before decoding.
//!
//! ## Wire format
//!
//! The top level is a JSON array of tagged records:
//!
//! ```text
//! [
//!    { "type": "point_2",   "coordinates": [1.0, 2.0] },
//!    { "type": "segment_2", "points": [P, Q] },
//!    { "type": "line_2",    "points": [P, Q] }
//! ]
//! ```
//!
//! where `P` and `Q` are nested `point_2` records. Records with an
//! unrecognized `type` tag are dropped on decode; encode always emits
//! points, then lines, then segments.
//!
//! ## Usage
//!
//! ```no_run
//! use json_geometry::{GeometryDocument, Point2, Segment2};
//!
//! let mut doc = GeometryDocument::new();
//! doc.load("points.json").unwrap();
//! doc.segments = vec![Segment2::new(Point2::new(1.0, 0.0), Point2::new(-1.0, 1.0))];
//! doc.dump("test.json").unwrap();
//! ```

pub mod document;
pub mod error;
pub mod primitives;
pub mod validator;
pub mod wire;

pub use document::GeometryDocument;
pub use error::{GeometryError, Result};
pub use primitives::{GeometryKind, GeometryObject, Line2, Point2, Segment2};
pub use validator::SchemaValidator;
