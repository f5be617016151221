use serde_json::json;

use super::support::schema_map;
use crate::generator::summary::{SchemaSummary, summarize};

#[test]
fn test_summaries_sorted_with_labels() {
  let schemas = schema_map(json!({
    "Zoo": {
      "description": "A zoo",
      "required": ["animals"],
      "properties": {
        "animals": { "type": "array", "items": { "$ref": "#/components/schemas/Animal" } },
        "founded": { "type": "integer", "format": "int64" },
        "open": { "type": "boolean" },
        "mood": { "type": "string", "enum": ["happy"] },
        "extra": { "type": "object" }
      }
    },
    "Animal": { "type": "string", "enum": ["cat", "dog"] }
  }));

  let summaries = summarize(&schemas);
  let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
  assert_eq!(names, ["Animal", "Zoo"]);

  let zoo = &summaries[1];
  assert_eq!(zoo.kind, "class");
  assert_eq!(zoo.description.as_deref(), Some("A zoo"));
  let labels: Vec<String> = zoo.properties.iter().map(|p| p.label()).collect();
  assert_eq!(
    labels,
    [
      "animals*: List<Animal>",
      "founded: long",
      "open: boolean",
      "mood: enum",
      "extra: Object"
    ]
  );

  assert_eq!(summaries[0].kind, "enum");
  assert!(summaries[0].properties.is_empty());
}

#[test]
fn test_summary_includes_inherited_properties() {
  let schemas = schema_map(json!({
    "Base": { "properties": { "id": { "type": "string" } } },
    "Child": { "allOf": [{ "$ref": "#/components/schemas/Base" }], "properties": { "name": { "type": "string" } } }
  }));

  let child = SchemaSummary::from_definition(&schemas["Child"], &schemas);
  let names: Vec<&str> = child.properties.iter().map(|p| p.name.as_str()).collect();
  assert_eq!(names, ["id", "name"]);
}

#[test]
fn test_summary_json_shape() {
  let schemas = schema_map(json!({
    "Tag": { "required": ["name"], "properties": { "name": { "type": "string" } } }
  }));

  let value = serde_json::to_value(summarize(&schemas)).unwrap();
  assert_eq!(
    value,
    json!([{
      "name": "Tag",
      "kind": "class",
      "properties": [{ "name": "name", "type": "string", "required": true }]
    }])
  );
}
