use serde_json::json;

use crate::generator::document::{SchemaDocument, SpecError, SpecFormat, SpecVersion};

#[test]
fn test_openapi3_components_schemas() {
  let text = r#"{
    "openapi": "3.1.0",
    "info": { "title": "Store" },
    "components": {
      "schemas": {
        "Zebra": { "type": "object" },
        "Apple": { "type": "object" }
      }
    }
  }"#;
  let document = SchemaDocument::parse(text).unwrap();

  assert_eq!(document.version(), SpecVersion::OpenApi3);
  assert_eq!(document.title(), Some("Store"));

  let schemas = document.extract_schemas();
  let names: Vec<&str> = schemas.keys().map(String::as_str).collect();
  assert_eq!(names, ["Zebra", "Apple"], "document order is kept");
}

#[test]
fn test_swagger2_definitions() {
  let document = SchemaDocument::from_value(json!({
    "swagger": "2.0",
    "definitions": { "Pet": { "type": "object" } },
    "components": { "schemas": { "Ignored": { "type": "object" } } }
  }))
  .unwrap();

  assert_eq!(document.version(), SpecVersion::Swagger2);
  let schemas = document.extract_schemas();
  assert!(schemas.contains_key("Pet"));
  assert!(!schemas.contains_key("Ignored"));
}

#[test]
fn test_no_version_marker_yields_no_schemas() {
  let document = SchemaDocument::from_value(json!({
    "definitions": { "Pet": { "type": "object" } },
    "openapi": null
  }))
  .unwrap();

  assert_eq!(document.version(), SpecVersion::Unknown);
  assert!(document.schema_container().is_none());
  assert!(document.extract_schemas().is_empty());
}

#[test]
fn test_missing_container_yields_no_schemas() {
  let document = SchemaDocument::parse(r#"{"openapi": "3.0.0", "paths": {}}"#).unwrap();
  assert!(document.extract_schemas().is_empty());
}

#[test]
fn test_yaml_fallback() {
  let text = "
openapi: 3.0.0
components:
  schemas:
    Order:
      type: object
      properties:
        quantity:
          type: integer
          minimum: 1
";
  let document = SchemaDocument::parse(text).unwrap();
  let schemas = document.extract_schemas();
  let order = &schemas["Order"];
  assert!(order.properties.contains_key("quantity"));
}

#[test]
fn test_yaml_non_string_keys_are_stringified() {
  let text = "
swagger: '2.0'
definitions:
  Codes:
    properties:
      200:
        type: string
      true:
        type: boolean
";
  let schemas = SchemaDocument::parse_as(text, SpecFormat::Yaml).unwrap().extract_schemas();
  let names: Vec<&str> = schemas["Codes"].properties.keys().map(String::as_str).collect();
  assert_eq!(names, ["200", "true"]);
}

#[test]
fn test_parse_errors() {
  let err = SchemaDocument::parse("{ \"openapi\": ").unwrap_err();
  assert!(matches!(err, SpecError::InvalidSyntax(_)), "got {err:?}");

  let err = SchemaDocument::parse("[1, 2]").unwrap_err();
  assert!(matches!(err, SpecError::NotAnObject("an array")), "got {err:?}");

  let err = SchemaDocument::parse("just some text").unwrap_err();
  assert!(matches!(err, SpecError::NotAnObject("a string")), "got {err:?}");
}

#[test]
fn test_format_from_extension() {
  let cases = [
    ("yaml", SpecFormat::Yaml),
    ("yml", SpecFormat::Yaml),
    ("json", SpecFormat::Json),
    ("txt", SpecFormat::Json),
  ];
  for (ext, expected) in cases {
    assert_eq!(SpecFormat::from_extension(ext), expected, "failed for input {ext:?}");
  }
}
