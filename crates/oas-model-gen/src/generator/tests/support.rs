use serde_json::{Value, json};

use crate::generator::{document::SchemaDocument, schema::SchemaMap};

/// Wraps `schemas` in a minimal OpenAPI 3 document.
pub(crate) fn openapi_document(schemas: Value) -> Value {
  json!({
    "openapi": "3.0.3",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": {},
    "components": { "schemas": schemas }
  })
}

pub(crate) fn openapi_text(schemas: Value) -> String {
  serde_json::to_string(&openapi_document(schemas)).unwrap()
}

pub(crate) fn schema_map(schemas: Value) -> SchemaMap {
  SchemaDocument::from_value(openapi_document(schemas))
    .unwrap()
    .extract_schemas()
}
