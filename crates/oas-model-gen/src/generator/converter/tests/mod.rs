mod fields;

use serde_json::Value;

use crate::generator::{
  ast::{ClassDef, EnumDef, JavaDefinition},
  config::GenerationOptions,
  converter::SchemaConverter,
  schema::SchemaMap,
  tests::support::schema_map,
};

pub(super) fn convert(schemas: &SchemaMap, name: &str, options: &GenerationOptions) -> JavaDefinition {
  SchemaConverter::new(schemas, options).convert(name)
}

pub(super) fn convert_class(schemas: Value, name: &str, options: &GenerationOptions) -> ClassDef {
  match convert(&schema_map(schemas), name, options) {
    JavaDefinition::Class(def) => def,
    other => panic!("expected a class, got {other:?}"),
  }
}

pub(super) fn convert_enum(schemas: Value, name: &str, options: &GenerationOptions) -> EnumDef {
  match convert(&schema_map(schemas), name, options) {
    JavaDefinition::Enum(def) => def,
    other => panic!("expected an enum, got {other:?}"),
  }
}
