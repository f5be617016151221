mod enums;
mod field_optionality;
mod fields;
mod imports;
mod structs;
mod validation;

#[cfg(test)]
mod tests;

pub(crate) use field_optionality::FieldOptionalityPolicy;

use self::{enums::EnumConverter, structs::ClassConverter};
use super::{
  ast::JavaDefinition,
  config::{EnumStyle, GenerationOptions},
  schema::SchemaMap,
};

/// Turns named schemas into Java class or enum definitions.
pub(crate) struct SchemaConverter<'a> {
  schemas: &'a SchemaMap,
  options: &'a GenerationOptions,
  class_converter: ClassConverter<'a>,
  enum_converter: EnumConverter<'a>,
}

impl<'a> SchemaConverter<'a> {
  pub(crate) fn new(schemas: &'a SchemaMap, options: &'a GenerationOptions) -> Self {
    Self {
      schemas,
      options,
      class_converter: ClassConverter::new(schemas, options),
      enum_converter: EnumConverter::new(options),
    }
  }

  /// Converts one schema by name.
  ///
  /// Enumeration schemas become enums when native enums are selected; every
  /// other schema becomes a class. A name that is not in the document yields
  /// [`JavaDefinition::Missing`].
  pub(crate) fn convert(&self, name: &str) -> JavaDefinition {
    let Some(schema) = self.schemas.get(name) else {
      return JavaDefinition::Missing(name.to_string());
    };

    if schema.is_enum() && self.options.enum_style == EnumStyle::Native {
      JavaDefinition::Enum(self.enum_converter.convert(schema))
    } else {
      JavaDefinition::Class(self.class_converter.convert(schema))
    }
  }
}
