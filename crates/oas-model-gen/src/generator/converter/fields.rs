use std::collections::BTreeSet;

use super::{FieldOptionalityPolicy, validation::validation_annotations};
use crate::generator::{
  ast::{Documentation, FieldDef, JavaType},
  config::GenerationOptions,
  naming::identifiers::{ensure_unique, to_java_field_name},
  schema_merger::FlattenedSchema,
  type_mapper::TypeMapper,
};

/// Converts the properties of a flattened schema into fields, in order.
pub(crate) struct FieldConverter<'a> {
  options: &'a GenerationOptions,
  type_mapper: TypeMapper<'a>,
  optionality: FieldOptionalityPolicy,
}

impl<'a> FieldConverter<'a> {
  pub(crate) fn new(options: &'a GenerationOptions) -> Self {
    Self {
      options,
      type_mapper: TypeMapper::new(options),
      optionality: FieldOptionalityPolicy::new(options.use_optional),
    }
  }

  pub(crate) fn convert_fields(&self, flattened: &FlattenedSchema) -> Vec<FieldDef> {
    let mut used_names = BTreeSet::new();

    flattened
      .properties
      .iter()
      .map(|(prop_name, property)| {
        let is_required = flattened.is_required(prop_name);
        let name = ensure_unique(&to_java_field_name(prop_name), &used_names);
        used_names.insert(name.clone());

        let mapped = self.type_mapper.map_property(property);
        let java_type = if self.optionality.is_optional(is_required) {
          JavaType::optional_of(mapped)
        } else {
          mapped
        };

        let validation = if self.options.use_validation {
          validation_annotations(property, is_required)
        } else {
          vec![]
        };

        FieldDef::builder()
          .name(name)
          .docs(Documentation::from_optional(property.description.as_ref()))
          .java_type(java_type)
          .validation(validation)
          .maybe_json_name(self.options.use_jackson.then(|| prop_name.clone()))
          .build()
      })
      .collect()
  }
}
