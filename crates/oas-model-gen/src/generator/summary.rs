//! One-line descriptions of schemas for listings.

use serde::Serialize;

use crate::generator::{
  schema::{PropertyKind, PropertySpec, SchemaDefinition, SchemaMap, SchemaType},
  schema_merger::flatten,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySummary {
  pub name: String,
  #[serde(rename = "type")]
  pub type_label: String,
  pub required: bool,
}

impl PropertySummary {
  /// `name: type`, with `*` after the name when required.
  pub fn label(&self) -> String {
    let marker = if self.required { "*" } else { "" };
    format!("{}{marker}: {}", self.name, self.type_label)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaSummary {
  pub name: String,
  pub kind: &'static str,
  pub properties: Vec<PropertySummary>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

impl SchemaSummary {
  pub fn from_definition(schema: &SchemaDefinition, schemas: &SchemaMap) -> Self {
    let flattened = flatten(schema, schemas);
    let properties = flattened
      .properties
      .iter()
      .map(|(name, property)| PropertySummary {
        name: name.clone(),
        type_label: type_label(property),
        required: flattened.is_required(name),
      })
      .collect();

    Self {
      name: schema.name.clone(),
      kind: if schema.is_enum() { "enum" } else { "class" },
      properties,
      description: schema.description.clone(),
    }
  }
}

/// Summaries of every schema, sorted by name.
pub fn summarize(schemas: &SchemaMap) -> Vec<SchemaSummary> {
  let mut summaries: Vec<SchemaSummary> = schemas
    .values()
    .map(|schema| SchemaSummary::from_definition(schema, schemas))
    .collect();
  summaries.sort_by(|a, b| a.name.cmp(&b.name));
  summaries
}

fn type_label(property: &PropertySpec) -> String {
  match &property.kind {
    PropertyKind::Reference(schema_ref) => schema_ref.name.clone(),
    PropertyKind::ArrayOf { items } => {
      let inner = items.as_deref().map_or_else(|| "Object".to_string(), type_label);
      format!("List<{inner}>")
    }
    PropertyKind::EnumMarker {
      schema_type: SchemaType::String,
      ..
    } => "enum".to_string(),
    PropertyKind::Primitive { schema_type, format } | PropertyKind::EnumMarker { schema_type, format, .. } => {
      match (schema_type, format.as_deref()) {
        (SchemaType::Integer, Some("int64")) => "long".to_string(),
        (schema_type, _) => schema_type.as_str().to_string(),
      }
    }
    PropertyKind::InlineObject(_) => "Object".to_string(),
  }
}
