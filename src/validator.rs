//! JSON-Schema validation gate
//!
//! Wraps a compiled [`jsonschema::JSONSchema`] as an explicit optional
//! value. Loading a schema never fails construction: a missing, unreadable,
//! or uncompilable schema resource degrades to the unset state with a
//! logged warning. Validating against an unset schema is a hard failure,
//! since "no schema" cannot mean "anything is valid".

use std::fs;
use std::path::Path;

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use tracing::warn;

use crate::error::{GeometryError, Result};

/// The schema resource shipped alongside the crate
const BUNDLED_SCHEMA: &str = include_str!("../schema/geometry.schema.json");

/// Validation gate for wire-format documents
pub struct SchemaValidator {
    schema: Option<JSONSchema>,
}

impl SchemaValidator {
    /// Compile the bundled `schema/geometry.schema.json` resource
    pub fn bundled() -> Self {
        Self::compile(BUNDLED_SCHEMA)
    }

    /// Load and compile a schema document from a file.
    ///
    /// A missing or unreadable file leaves the schema unset; every later
    /// [`validate`](Self::validate) call then fails with
    /// [`GeometryError::SchemaUnavailable`].
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => Self::compile(&text),
            Err(e) => {
                warn!("schema resource {} is unreadable: {}", path.display(), e);
                Self { schema: None }
            }
        }
    }

    fn compile(text: &str) -> Self {
        let value: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) => {
                warn!("schema resource is not valid JSON: {}", e);
                return Self { schema: None };
            }
        };
        match JSONSchema::options().with_draft(Draft::Draft7).compile(&value) {
            Ok(schema) => Self { schema: Some(schema) },
            Err(e) => {
                warn!("schema failed to compile: {}", e);
                Self { schema: None }
            }
        }
    }

    /// Whether a schema is loaded and compiled
    pub fn is_loaded(&self) -> bool {
        self.schema.is_some()
    }

    /// Validate a parsed document against the loaded schema.
    ///
    /// Returns [`GeometryError::SchemaUnavailable`] when no schema is
    /// loaded, or [`GeometryError::Validation`] naming every violation
    /// (instance path plus message) when the document does not conform.
    pub fn validate(&self, instance: &Value) -> Result<()> {
        let schema = self.schema.as_ref().ok_or(GeometryError::SchemaUnavailable)?;

        if let Err(errors) = schema.validate(instance) {
            let violations: Vec<String> = errors
                .map(|e| format!("{} at {}", e, e.instance_path))
                .collect();
            return Err(GeometryError::Validation(violations.join("; ")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bundled_schema_compiles() {
        assert!(SchemaValidator::bundled().is_loaded());
    }

    #[test]
    fn test_valid_document_passes() {
        let validator = SchemaValidator::bundled();
        let document = json!([
            { "type": "point_2", "coordinates": [1.0, 0.0] },
            {
                "type": "line_2",
                "points": [
                    { "type": "point_2", "coordinates": [0.0, 0.0] },
                    { "type": "point_2", "coordinates": [1.0, 1.0] }
                ]
            }
        ]);
        assert!(validator.validate(&document).is_ok());
    }

    #[test]
    fn test_unknown_tags_pass_validation() {
        // Dropping unknown kinds is a decode policy, not a schema failure.
        let validator = SchemaValidator::bundled();
        let document = json!([{ "type": "circle_2", "radius": 2.0 }]);
        assert!(validator.validate(&document).is_ok());
    }

    #[test]
    fn test_absent_or_non_string_tags_pass_validation() {
        // Same policy as unknown tags: a record without a usable type tag
        // is dropped by the decoder, not rejected by the schema.
        let validator = SchemaValidator::bundled();
        let document = json!([
            { "coordinates": [1.0, 2.0] },
            { "type": 5, "coordinates": [1.0, 2.0] }
        ]);
        assert!(validator.validate(&document).is_ok());
    }

    #[test]
    fn test_bad_coordinate_arity_is_rejected() {
        let validator = SchemaValidator::bundled();
        let document = json!([{ "type": "point_2", "coordinates": [1.0] }]);
        let err = validator.validate(&document).unwrap_err();
        assert!(matches!(err, GeometryError::Validation(_)));
    }

    #[test]
    fn test_non_array_document_is_rejected() {
        let validator = SchemaValidator::bundled();
        let err = validator.validate(&json!({ "type": "point_2" })).unwrap_err();
        assert!(matches!(err, GeometryError::Validation(_)));
    }

    #[test]
    fn test_missing_schema_file_degrades_to_unset() {
        let validator = SchemaValidator::from_file("/nonexistent/geometry.schema.json");
        assert!(!validator.is_loaded());
        let err = validator.validate(&json!([])).unwrap_err();
        assert!(matches!(err, GeometryError::SchemaUnavailable));
    }
}
