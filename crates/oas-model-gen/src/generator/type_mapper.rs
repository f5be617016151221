//! Maps OpenAPI `type`/`format` pairs to Java types.

use crate::generator::{
  ast::{JavaPrimitive, JavaType},
  config::{DateType, GenerationOptions},
  naming::identifiers::to_java_type_name,
  schema::{PropertyKind, PropertySpec, SchemaType},
};

/// Total mapping from schema types to Java types under one set of options.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TypeMapper<'a> {
  options: &'a GenerationOptions,
}

impl<'a> TypeMapper<'a> {
  pub(crate) fn new(options: &'a GenerationOptions) -> Self {
    Self { options }
  }

  /// Maps a declared type and format. `items` is only consulted for arrays;
  /// missing or unresolvable items become `Object`.
  pub(crate) fn map_type(&self, schema_type: &SchemaType, format: Option<&str>, items: Option<&PropertySpec>) -> JavaType {
    match schema_type {
      SchemaType::String => match format {
        Some("date-time" | "date") if self.options.date_type == DateType::OffsetDateTime => JavaType::OffsetDateTime,
        _ => JavaType::String,
      },
      SchemaType::Integer => match format {
        Some("int64") => self.primitive(JavaPrimitive::Long),
        _ => self.primitive(JavaPrimitive::Int),
      },
      SchemaType::Number => match format {
        Some("double") => self.primitive(JavaPrimitive::Double),
        Some("float") => self.primitive(JavaPrimitive::Float),
        _ => JavaType::BigDecimal,
      },
      SchemaType::Boolean => self.primitive(JavaPrimitive::Boolean),
      SchemaType::Array => JavaType::list_of(items.map_or(JavaType::Object, |items| self.map_property(items))),
      SchemaType::Object => JavaType::Object,
      SchemaType::Other(raw) => JavaType::Named(to_java_type_name(raw)),
    }
  }

  /// Maps a classified property. A `$ref` maps to the referenced type name.
  pub(crate) fn map_property(&self, property: &PropertySpec) -> JavaType {
    match &property.kind {
      PropertyKind::Reference(schema_ref) => JavaType::Named(to_java_type_name(&schema_ref.name)),
      PropertyKind::Primitive { schema_type, format } | PropertyKind::EnumMarker { schema_type, format, .. } => {
        self.map_type(schema_type, format.as_deref(), None)
      }
      PropertyKind::ArrayOf { items } => self.map_type(&SchemaType::Array, None, items.as_deref()),
      PropertyKind::InlineObject(_) => JavaType::Object,
    }
  }

  fn primitive(&self, primitive: JavaPrimitive) -> JavaType {
    JavaType::primitive(primitive, self.options.use_boxed_primitives)
  }
}

/// Maps one `type`/`format` pair with the given options.
pub(crate) fn map_type(
  schema_type: &SchemaType,
  format: Option<&str>,
  options: &GenerationOptions,
  items: Option<&PropertySpec>,
) -> JavaType {
  TypeMapper::new(options).map_type(schema_type, format, items)
}
