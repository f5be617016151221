use std::collections::BTreeSet;

use crate::generator::{
  ast::{ClassAnnotation, EnumConstant, FieldDef},
  config::ValidationApi,
};

pub(crate) const JSON_PROPERTY_IMPORT: &str = "com.fasterxml.jackson.annotation.JsonProperty";

/// Imports needed by a class: only what its annotations and field types use.
pub(crate) fn class_imports(
  annotations: &[ClassAnnotation],
  fields: &[FieldDef],
  validation_api: ValidationApi,
) -> BTreeSet<String> {
  let mut imports = BTreeSet::new();

  for annotation in annotations {
    imports.insert(annotation.import().to_string());
  }

  for field in fields {
    imports.extend(field.java_type.imports().into_iter().map(String::from));
    imports.extend(field.validation.iter().map(|annotation| annotation.import(validation_api)));
    if field.json_name.is_some() {
      imports.insert(JSON_PROPERTY_IMPORT.to_string());
    }
  }

  imports
}

pub(crate) fn enum_imports(constants: &[EnumConstant]) -> BTreeSet<String> {
  let mut imports = BTreeSet::new();
  if constants.iter().any(|constant| constant.literal.is_some()) {
    imports.insert(JSON_PROPERTY_IMPORT.to_string());
  }
  imports
}
