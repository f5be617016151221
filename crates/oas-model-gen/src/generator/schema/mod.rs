//! Typed view of the schema definitions found in a document.
//!
//! Every property, array item and composition branch is classified exactly once,
//! while parsing, into a [`PropertyKind`]. Downstream stages match on that closed
//! set instead of probing raw keys.

mod constraints;

use std::collections::BTreeSet;

pub use constraints::{Bound, Constraints};
use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::utils::{SchemaExt, parse_schema_ref_path};

/// Named schema definitions in document order.
pub type SchemaMap = IndexMap<String, SchemaDefinition>;

/// The `type` keyword of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemaType {
  String,
  Integer,
  Number,
  Boolean,
  Array,
  Object,
  Other(String),
}

impl SchemaType {
  pub fn parse(raw: &str) -> Self {
    match raw {
      "string" => Self::String,
      "integer" => Self::Integer,
      "number" => Self::Number,
      "boolean" => Self::Boolean,
      "array" => Self::Array,
      "object" => Self::Object,
      other => Self::Other(other.to_string()),
    }
  }

  /// Reads `type`, accepting the OpenAPI 3.1 list form (`["string", "null"]`).
  fn from_schema(schema: &Map<String, Value>) -> Option<Self> {
    match schema.get("type")? {
      Value::String(raw) => Some(Self::parse(raw)),
      Value::Array(types) => types
        .iter()
        .filter_map(Value::as_str)
        .find(|raw| *raw != "null")
        .map(Self::parse),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &str {
    match self {
      Self::String => "string",
      Self::Integer => "integer",
      Self::Number => "number",
      Self::Boolean => "boolean",
      Self::Array => "array",
      Self::Object => "object",
      Self::Other(raw) => raw,
    }
  }

  pub fn is_numeric(&self) -> bool {
    matches!(self, Self::Integer | Self::Number)
  }
}

/// A `$ref` pointer to another named schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRef {
  pub name: String,
}

/// An inline object schema: a property or `allOf` branch with its own members.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineObject {
  pub properties: IndexMap<String, PropertySpec>,
  pub required: BTreeSet<String>,
  pub all_of: Vec<PropertySpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
  Reference(SchemaRef),
  Primitive {
    schema_type: SchemaType,
    format: Option<String>,
  },
  ArrayOf {
    items: Option<Box<PropertySpec>>,
  },
  InlineObject(InlineObject),
  EnumMarker {
    schema_type: SchemaType,
    format: Option<String>,
    values: Vec<Value>,
  },
}

/// One field, array item or composition branch.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySpec {
  pub kind: PropertyKind,
  pub constraints: Constraints,
  pub description: Option<String>,
}

impl PropertySpec {
  pub fn new(kind: PropertyKind) -> Self {
    Self {
      kind,
      constraints: Constraints::default(),
      description: None,
    }
  }

  pub fn primitive(schema_type: SchemaType, format: Option<&str>) -> Self {
    Self::new(PropertyKind::Primitive {
      schema_type,
      format: format.map(String::from),
    })
  }

  pub fn from_value(value: &Value) -> Self {
    let Some(schema) = value.as_object() else {
      return Self::new(PropertyKind::InlineObject(InlineObject::default()));
    };

    Self {
      kind: classify(schema),
      constraints: Constraints::from_schema(schema),
      description: schema.str_field("description").map(String::from),
    }
  }

  /// The referenced schema name, when this property is a `$ref`.
  pub fn ref_name(&self) -> Option<&str> {
    match &self.kind {
      PropertyKind::Reference(schema_ref) => Some(&schema_ref.name),
      _ => None,
    }
  }

  /// The declared `type`, as far as the variant carries one.
  pub fn schema_type(&self) -> Option<SchemaType> {
    match &self.kind {
      PropertyKind::Primitive { schema_type, .. } | PropertyKind::EnumMarker { schema_type, .. } => {
        Some(schema_type.clone())
      }
      PropertyKind::ArrayOf { .. } => Some(SchemaType::Array),
      PropertyKind::InlineObject(_) => Some(SchemaType::Object),
      PropertyKind::Reference(_) => None,
    }
  }

  pub fn format(&self) -> Option<&str> {
    match &self.kind {
      PropertyKind::Primitive { format, .. } | PropertyKind::EnumMarker { format, .. } => format.as_deref(),
      _ => None,
    }
  }
}

fn classify(schema: &Map<String, Value>) -> PropertyKind {
  if let Some(ref_path) = schema.str_field("$ref")
    && let Some(name) = parse_schema_ref_path(ref_path)
  {
    return PropertyKind::Reference(SchemaRef { name });
  }

  let schema_type = SchemaType::from_schema(schema);
  let format = schema.str_field("format").map(String::from);

  if schema_type == Some(SchemaType::Array) || (schema_type.is_none() && schema.contains_key("items")) {
    return PropertyKind::ArrayOf {
      items: schema.get("items").map(|items| Box::new(PropertySpec::from_value(items))),
    };
  }

  let values = parse_enum_values(schema);
  if !values.is_empty() {
    return PropertyKind::EnumMarker {
      schema_type: schema_type.unwrap_or(SchemaType::String),
      format,
      values,
    };
  }

  match schema_type {
    Some(SchemaType::Object) | None => {
      let object = InlineObject::from_schema(schema);
      match single_reference_branch(&object) {
        Some(schema_ref) => PropertyKind::Reference(schema_ref),
        None => PropertyKind::InlineObject(object),
      }
    }
    Some(schema_type) => PropertyKind::Primitive { schema_type, format },
  }
}

/// `allOf: [{$ref}]` with nothing beside it is a plain reference.
fn single_reference_branch(object: &InlineObject) -> Option<SchemaRef> {
  if !object.properties.is_empty() {
    return None;
  }
  match object.all_of.as_slice() {
    [branch] => match &branch.kind {
      PropertyKind::Reference(schema_ref) => Some(schema_ref.clone()),
      _ => None,
    },
    _ => None,
  }
}

fn parse_enum_values(schema: &Map<String, Value>) -> Vec<Value> {
  schema.array_field("enum").cloned().unwrap_or_default()
}

fn parse_properties(schema: &Map<String, Value>) -> IndexMap<String, PropertySpec> {
  schema
    .object_field("properties")
    .map(|properties| {
      properties
        .iter()
        .map(|(name, value)| (name.clone(), PropertySpec::from_value(value)))
        .collect()
    })
    .unwrap_or_default()
}

fn parse_all_of(schema: &Map<String, Value>) -> Vec<PropertySpec> {
  schema
    .array_field("allOf")
    .map(|branches| branches.iter().map(PropertySpec::from_value).collect())
    .unwrap_or_default()
}

impl InlineObject {
  fn from_schema(schema: &Map<String, Value>) -> Self {
    Self {
      properties: parse_properties(schema),
      required: schema.string_list("required").into_iter().collect(),
      all_of: parse_all_of(schema),
    }
  }
}

/// One named entry of the document's schema container.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDefinition {
  pub name: String,
  pub schema_type: Option<SchemaType>,
  pub properties: IndexMap<String, PropertySpec>,
  pub required: BTreeSet<String>,
  pub all_of: Vec<PropertySpec>,
  pub enum_values: Vec<Value>,
  pub description: Option<String>,
  /// The untouched source tree, kept for the excerpt comment.
  pub raw: Value,
}

impl SchemaDefinition {
  pub fn from_value(name: &str, raw: &Value) -> Self {
    let empty = Map::new();
    let schema = raw.as_object().unwrap_or(&empty);

    Self {
      name: name.to_string(),
      schema_type: SchemaType::from_schema(schema),
      properties: parse_properties(schema),
      required: schema.string_list("required").into_iter().collect(),
      all_of: parse_all_of(schema),
      enum_values: parse_enum_values(schema),
      description: schema.str_field("description").map(String::from),
      raw: raw.clone(),
    }
  }

  /// A schema with literal `enum` values and no members of its own.
  pub fn is_enum(&self) -> bool {
    !self.enum_values.is_empty() && self.all_of.is_empty() && self.properties.is_empty()
  }

  pub fn is_object(&self) -> bool {
    self.raw.is_object()
  }
}
