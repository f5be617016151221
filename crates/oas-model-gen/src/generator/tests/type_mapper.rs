use serde_json::json;

use crate::generator::{
  ast::{JavaPrimitive, JavaType},
  config::{DateType, GenerationOptions},
  schema::{PropertySpec, SchemaType},
  type_mapper::{TypeMapper, map_type},
};

#[test]
fn test_type_table() {
  let options = GenerationOptions::default();
  let cases = [
    (SchemaType::String, None, "String"),
    (SchemaType::String, Some("date-time"), "OffsetDateTime"),
    (SchemaType::String, Some("date"), "OffsetDateTime"),
    (SchemaType::String, Some("uuid"), "String"),
    (SchemaType::Integer, None, "Integer"),
    (SchemaType::Integer, Some("int32"), "Integer"),
    (SchemaType::Integer, Some("int64"), "Long"),
    (SchemaType::Number, None, "BigDecimal"),
    (SchemaType::Number, Some("double"), "Double"),
    (SchemaType::Number, Some("float"), "Float"),
    (SchemaType::Boolean, None, "Boolean"),
    (SchemaType::Object, None, "Object"),
    (SchemaType::Array, None, "List<Object>"),
    (SchemaType::Other("file".to_string()), None, "File"),
  ];

  for (schema_type, format, expected) in cases {
    let mapped = map_type(&schema_type, format, &options, None);
    assert_eq!(mapped.to_string(), expected, "failed for input {schema_type:?} {format:?}");
  }
}

#[test]
fn test_unboxed_primitives() {
  let options = GenerationOptions::builder().use_boxed_primitives(false).build();
  let mapper = TypeMapper::new(&options);

  assert_eq!(
    mapper.map_type(&SchemaType::Integer, Some("int64"), None),
    JavaType::primitive(JavaPrimitive::Long, false)
  );
  assert_eq!(mapper.map_type(&SchemaType::Boolean, None, None).to_string(), "boolean");

  let items = PropertySpec::primitive(SchemaType::Integer, Some("int64"));
  assert_eq!(
    mapper.map_type(&SchemaType::Array, None, Some(&items)).to_string(),
    "List<Long>"
  );
}

#[test]
fn test_string_dates() {
  let options = GenerationOptions::builder().date_type(DateType::String).build();
  let mapped = map_type(&SchemaType::String, Some("date-time"), &options, None);
  assert_eq!(mapped, JavaType::String);
}

#[test]
fn test_map_property() {
  let options = GenerationOptions::default();
  let mapper = TypeMapper::new(&options);

  let cases = [
    (json!({ "$ref": "#/components/schemas/Pet" }), "Pet"),
    (json!({ "$ref": "#/components/schemas/pet_status" }), "PetStatus"),
    (json!({ "type": "array", "items": { "$ref": "#/definitions/Tag" } }), "List<Tag>"),
    (
      json!({ "type": "array", "items": { "type": "array", "items": { "type": "number" } } }),
      "List<List<BigDecimal>>",
    ),
    (json!({ "type": "string", "enum": ["a"] }), "String"),
    (json!({ "type": "object", "properties": {} }), "Object"),
  ];

  for (value, expected) in cases {
    let property = PropertySpec::from_value(&value);
    assert_eq!(mapper.map_property(&property).to_string(), expected, "failed for input {value}");
  }
}
