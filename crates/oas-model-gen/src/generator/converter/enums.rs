use std::collections::BTreeSet;

use serde_json::Value;

use super::imports::enum_imports;
use crate::generator::{
  ast::{Documentation, EnumConstant, EnumDef},
  config::GenerationOptions,
  naming::identifiers::{ensure_unique, to_enum_constant_name, to_java_type_name},
  schema::SchemaDefinition,
};

pub(crate) struct EnumConverter<'a> {
  options: &'a GenerationOptions,
}

impl<'a> EnumConverter<'a> {
  pub(crate) fn new(options: &'a GenerationOptions) -> Self {
    Self { options }
  }

  /// Builds an enum with one constant per literal, in declaration order.
  ///
  /// `null` literals are skipped; literals that sanitize to the same constant
  /// name get a numeric suffix.
  pub(crate) fn convert(&self, schema: &SchemaDefinition) -> EnumDef {
    let mut used_names = BTreeSet::new();

    let constants: Vec<EnumConstant> = schema
      .enum_values
      .iter()
      .filter_map(literal_text)
      .map(|literal| {
        let name = ensure_unique(&to_enum_constant_name(&literal), &used_names);
        used_names.insert(name.clone());
        EnumConstant {
          name,
          literal: self.options.use_jackson.then_some(literal),
        }
      })
      .collect();

    EnumDef::builder()
      .name(to_java_type_name(&schema.name))
      .package(self.options.package_name.clone())
      .docs(Documentation::from_optional(schema.description.as_ref()))
      .imports(enum_imports(&constants))
      .constants(constants)
      .build()
  }
}

/// The text a literal serializes to, or `None` for `null`.
fn literal_text(value: &Value) -> Option<String> {
  match value {
    Value::Null => None,
    Value::String(text) => Some(text.clone()),
    other => Some(other.to_string()),
  }
}
