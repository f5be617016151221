use serde_json::json;

use super::convert_class;
use crate::generator::{
  config::GenerationOptions,
  converter::FieldOptionalityPolicy,
};

#[test]
fn test_field_names_are_sanitized_and_unique() {
  let schemas = json!({
    "Odd": {
      "properties": {
        "first-name": { "type": "string" },
        "first_name": { "type": "string" },
        "class": { "type": "string" },
        "ID": { "type": "string" },
        "2fa": { "type": "boolean" }
      }
    }
  });
  let class = convert_class(schemas, "Odd", &GenerationOptions::default());

  let pairs: Vec<(&str, Option<&str>)> = class
    .fields
    .iter()
    .map(|f| (f.name.as_str(), f.json_name.as_deref()))
    .collect();
  assert_eq!(
    pairs,
    [
      ("firstName", Some("first-name")),
      ("firstName2", Some("first_name")),
      ("class_", Some("class")),
      ("id", Some("ID")),
      ("_2fa", Some("2fa")),
    ]
  );
}

#[test]
fn test_optional_wrapping_skips_required() {
  let schemas = json!({
    "Account": {
      "required": ["id"],
      "properties": {
        "id": { "type": "integer" },
        "nickname": { "type": "string" },
        "scores": { "type": "array", "items": { "type": "integer" } }
      }
    }
  });
  let options = GenerationOptions::builder()
    .use_optional(true)
    .use_boxed_primitives(false)
    .build();
  let class = convert_class(schemas, "Account", &options);

  let types: Vec<String> = class.fields.iter().map(|f| f.java_type.to_string()).collect();
  assert_eq!(types, ["int", "Optional<String>", "Optional<List<Integer>>"]);
  assert!(class.imports.contains("java.util.Optional"));
}

#[test]
fn test_field_docs() {
  let schemas = json!({
    "Doc": {
      "properties": {
        "note": { "type": "string", "description": "  First line\nSecond line  \n" }
      }
    }
  });
  let class = convert_class(schemas, "Doc", &GenerationOptions::default());
  assert_eq!(class.fields[0].docs.lines(), ["First line", "Second line"]);
}

#[test]
fn test_optionality_policy() {
  let cases = [(false, false, false), (false, true, false), (true, false, true), (true, true, false)];
  for (use_optional, is_required, expected) in cases {
    let policy = FieldOptionalityPolicy::new(use_optional);
    assert_eq!(
      policy.is_optional(is_required),
      expected,
      "failed for input use_optional={use_optional} is_required={is_required}"
    );
  }
}
