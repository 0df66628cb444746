//! Geometry document codec
//!
//! [`GeometryDocument`] owns the three per-kind collections and the schema
//! validation gate. Decoding validates first and replaces the collections
//! wholesale only when the whole document reconstructs; any failure leaves
//! prior contents untouched. Encoding emits points, then lines, then
//! segments, regardless of the order objects arrived in.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use tracing::{error, warn};

use crate::error::{GeometryError, Result};
use crate::primitives::{GeometryObject, Line2, Point2, Segment2};
use crate::validator::SchemaValidator;
use crate::wire;

/// Indentation for encoded output
const INDENT: &[u8] = b"   ";

/// An in-memory geometry document with schema-validated decode
pub struct GeometryDocument {
    /// Decoded points, in first-occurrence order
    pub points: Vec<Point2>,
    /// Decoded lines, in first-occurrence order
    pub lines: Vec<Line2>,
    /// Decoded segments, in first-occurrence order
    pub segments: Vec<Segment2>,
    validator: SchemaValidator,
}

impl Default for GeometryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryDocument {
    /// Create an empty document gated by the bundled schema
    pub fn new() -> Self {
        Self::with_validator(SchemaValidator::bundled())
    }

    /// Create an empty document gated by a schema loaded from a file.
    ///
    /// Construction never fails; if the schema resource is missing the
    /// validator stays unset and every decode is rejected.
    pub fn with_schema_file(path: impl AsRef<Path>) -> Self {
        Self::with_validator(SchemaValidator::from_file(path))
    }

    /// Create an empty document with an explicit validator
    pub fn with_validator(validator: SchemaValidator) -> Self {
        Self {
            points: Vec::new(),
            lines: Vec::new(),
            segments: Vec::new(),
            validator,
        }
    }

    /// Get the validation gate
    pub fn validator(&self) -> &SchemaValidator {
        &self.validator
    }

    /// Decode wire-format text, replacing all three collections.
    ///
    /// Validation runs on the parsed value before any object is built.
    /// Records with an unrecognized `type` tag are dropped with a warning;
    /// a malformed record with a recognized tag aborts the whole decode.
    /// On any error the collections keep their prior contents.
    pub fn decode(&mut self, text: &str) -> Result<()> {
        match self.try_decode(text) {
            Ok(()) => Ok(()),
            Err(e) => {
                error!("decode failed: {}", e);
                Err(e)
            }
        }
    }

    fn try_decode(&mut self, text: &str) -> Result<()> {
        let value: Value = serde_json::from_str(text)?;
        self.validator.validate(&value)?;

        // The bundled schema guarantees an array; a caller-supplied schema
        // might not.
        let records = value.as_array().ok_or(GeometryError::NotAnArray)?;

        let mut points = Vec::new();
        let mut lines = Vec::new();
        let mut segments = Vec::new();
        for record in records {
            match wire::decode_record(record)? {
                Some(GeometryObject::Point(point)) => points.push(point),
                Some(GeometryObject::Line(line)) => lines.push(line),
                Some(GeometryObject::Segment(segment)) => segments.push(segment),
                None => warn!("dropping record with unrecognized type tag: {}", record),
            }
        }

        self.points = points;
        self.lines = lines;
        self.segments = segments;
        Ok(())
    }

    /// Encode the collections as pretty-printed wire-format text.
    ///
    /// Output order is fixed: points, then lines, then segments. No
    /// validation runs on encode; the gate is decode-only.
    pub fn encode(&self) -> Result<String> {
        let records: Vec<Value> = self
            .points
            .iter()
            .map(Point2::encode)
            .chain(self.lines.iter().map(Line2::encode))
            .chain(self.segments.iter().map(Segment2::encode))
            .collect();

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Read a wire-format file and decode it
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                error!("failed to read {}: {}", path.display(), e);
                return Err(e.into());
            }
        };
        self.decode(&text)
    }

    /// Encode the collections and write them to a file.
    ///
    /// A failed write may leave a truncated file behind; the handle itself
    /// is always released.
    pub fn dump(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.encode()?;
        if let Err(e) = fs::write(path, text) {
            error!("failed to write {}: {}", path.display(), e);
            return Err(e.into());
        }
        Ok(())
    }

    /// Append points to the point collection
    pub fn add_points(&mut self, points: &[Point2]) {
        self.points.extend_from_slice(points);
    }

    /// Append lines to the line collection
    pub fn add_lines(&mut self, lines: &[Line2]) {
        self.lines.extend_from_slice(lines);
    }

    /// Append segments to the segment collection
    pub fn add_segments(&mut self, segments: &[Segment2]) {
        self.segments.extend_from_slice(segments);
    }

    /// Total object count across all three collections
    pub fn len(&self) -> usize {
        self.points.len() + self.lines.len() + self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all objects, keeping the loaded schema
    pub fn clear(&mut self) {
        self.points.clear();
        self.lines.clear();
        self.segments.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_query_objects() {
        let mut doc = GeometryDocument::new();
        doc.add_points(&[Point2::new(1.0, 0.0), Point2::new(-1.0, -1.0)]);
        doc.add_segments(&[Segment2::new(Point2::new(0.0, 0.0), Point2::new(-1.0, -1.0))]);

        assert_eq!(doc.points.len(), 2);
        assert_eq!(doc.segments.len(), 1);
        assert_eq!(doc.len(), 3);
        assert!(!doc.is_empty());

        doc.clear();
        assert!(doc.is_empty());
        assert!(doc.validator().is_loaded());
    }

    #[test]
    fn test_encode_uses_three_space_indent() {
        let mut doc = GeometryDocument::new();
        doc.add_points(&[Point2::new(1.0, 0.0)]);
        let text = doc.encode().unwrap();
        assert!(text.starts_with("[\n   {"));
    }
}
