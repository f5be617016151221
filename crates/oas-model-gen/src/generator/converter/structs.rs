use super::{fields::FieldConverter, imports::class_imports};
use crate::generator::{
  ast::{ClassAnnotation, ClassDef, Documentation, literals::escape_comment},
  config::GenerationOptions,
  naming::identifiers::to_java_type_name,
  schema::{SchemaDefinition, SchemaMap},
  schema_merger::flatten,
};

/// Number of pretty-printed schema lines kept in the class header comment.
const EXCERPT_LINES: usize = 10;

pub(crate) struct ClassConverter<'a> {
  schemas: &'a SchemaMap,
  options: &'a GenerationOptions,
  field_converter: FieldConverter<'a>,
}

impl<'a> ClassConverter<'a> {
  pub(crate) fn new(schemas: &'a SchemaMap, options: &'a GenerationOptions) -> Self {
    Self {
      schemas,
      options,
      field_converter: FieldConverter::new(options),
    }
  }

  pub(crate) fn convert(&self, schema: &SchemaDefinition) -> ClassDef {
    let flattened = flatten(schema, self.schemas);
    let fields = self.field_converter.convert_fields(&flattened);
    let annotations = self.class_annotations();

    ClassDef::builder()
      .name(to_java_type_name(&schema.name))
      .package(self.options.package_name.clone())
      .docs(Documentation::from_optional(schema.description.as_ref()))
      .excerpt(schema_excerpt(schema))
      .imports(class_imports(&annotations, &fields, self.options.validation_api))
      .annotations(annotations)
      .fields(fields)
      .accessors(self.options.emits_accessors())
      .build()
  }

  fn class_annotations(&self) -> Vec<ClassAnnotation> {
    let mut annotations = vec![];
    if self.options.use_lombok {
      annotations.push(ClassAnnotation::Data);
    }
    if self.options.use_jackson {
      annotations.push(ClassAnnotation::JsonIncludeNonNull);
    }
    annotations
  }
}

/// The first lines of the schema as indented JSON, safe inside a block comment.
fn schema_excerpt(schema: &SchemaDefinition) -> Vec<String> {
  let pretty = serde_json::to_string_pretty(&schema.raw).unwrap_or_default();
  pretty.lines().take(EXCERPT_LINES).map(escape_comment).collect()
}
