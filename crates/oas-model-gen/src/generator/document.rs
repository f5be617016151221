//! Reading raw OpenAPI / Swagger text into a document tree.
//!
//! Both JSON and YAML inputs end up as a `serde_json` tree with key order
//! preserved, so property order in generated classes follows the source.

use serde_json::{Map, Value};
use strum::Display;
use thiserror::Error;

use super::schema::{SchemaDefinition, SchemaMap};
use crate::utils::SchemaExt;

/// Failure to turn spec text into a usable document.
#[derive(Debug, Error)]
pub enum SpecError {
  #[error("Failed to parse spec: {0}")]
  InvalidSyntax(String),
  #[error("Invalid OpenAPI/Swagger spec: expected an object at the root, found {0}")]
  NotAnObject(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }
}

/// Which schema container layout the document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SpecVersion {
  #[strum(to_string = "Swagger 2.0")]
  Swagger2,
  #[strum(to_string = "OpenAPI 3.x")]
  OpenApi3,
  #[strum(to_string = "unknown")]
  Unknown,
}

/// A parsed OpenAPI or Swagger document. Read-only once constructed.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
  root: Map<String, Value>,
}

impl SchemaDocument {
  /// Parses JSON text, falling back to YAML when the text is not JSON.
  pub fn parse(text: &str) -> Result<Self, SpecError> {
    Self::parse_as(text, SpecFormat::Json)
  }

  /// Parses text using `format` as the first attempt.
  ///
  /// YAML is a superset of JSON, so YAML input skips the JSON attempt entirely.
  pub fn parse_as(text: &str, format: SpecFormat) -> Result<Self, SpecError> {
    let value = match format {
      SpecFormat::Json => match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(json_error) => parse_yaml(text).map_err(|yaml_error| {
          if text.trim_start().starts_with(['{', '[']) {
            SpecError::InvalidSyntax(json_error.to_string())
          } else {
            yaml_error
          }
        })?,
      },
      SpecFormat::Yaml => parse_yaml(text)?,
    };
    Self::from_value(value)
  }

  pub fn from_value(value: Value) -> Result<Self, SpecError> {
    match value {
      Value::Object(root) => Ok(Self { root }),
      other => Err(SpecError::NotAnObject(json_kind(&other))),
    }
  }

  pub fn version(&self) -> SpecVersion {
    let has_marker = |key: &str| self.root.get(key).is_some_and(|value| !value.is_null());

    if has_marker("swagger") {
      SpecVersion::Swagger2
    } else if has_marker("openapi") {
      SpecVersion::OpenApi3
    } else {
      SpecVersion::Unknown
    }
  }

  /// Title from the `info` object, when present.
  pub fn title(&self) -> Option<&str> {
    self.root.object_field("info").and_then(|info| info.str_field("title"))
  }

  /// The raw schema container: `definitions` for Swagger 2.0, `components.schemas` for OpenAPI 3.x.
  pub fn schema_container(&self) -> Option<&Map<String, Value>> {
    match self.version() {
      SpecVersion::Swagger2 => self.root.object_field("definitions"),
      SpecVersion::OpenApi3 => self
        .root
        .object_field("components")
        .and_then(|components| components.object_field("schemas")),
      SpecVersion::Unknown => None,
    }
  }

  /// Extracts every named schema definition, in document order.
  ///
  /// Returns an empty map when the document has no version marker or no
  /// schema container.
  pub fn extract_schemas(&self) -> SchemaMap {
    self
      .schema_container()
      .map(|container| {
        container
          .iter()
          .map(|(name, raw)| (name.clone(), SchemaDefinition::from_value(name, raw)))
          .collect()
      })
      .unwrap_or_default()
  }
}

fn parse_yaml(text: &str) -> Result<Value, SpecError> {
  serde_yaml::from_str::<serde_yaml::Value>(text)
    .map(yaml_to_json)
    .map_err(|error| SpecError::InvalidSyntax(error.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

/// Converts a YAML tree into the JSON tree used everywhere else.
///
/// Non-string mapping keys (`200:` response codes, booleans) are stringified.
/// Tags are dropped in favor of the tagged value.
fn yaml_to_json(value: serde_yaml::Value) -> Value {
  use serde_yaml::Value as Yaml;

  match value {
    Yaml::Null => Value::Null,
    Yaml::Bool(flag) => Value::Bool(flag),
    Yaml::Number(number) => yaml_number_to_json(&number),
    Yaml::String(text) => Value::String(text),
    Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
    Yaml::Mapping(mapping) => Value::Object(
      mapping
        .into_iter()
        .map(|(key, value)| (yaml_key_to_string(key), yaml_to_json(value)))
        .collect(),
    ),
    Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
  }
}

fn yaml_number_to_json(number: &serde_yaml::Number) -> Value {
  if let Some(int) = number.as_i64() {
    Value::from(int)
  } else if let Some(uint) = number.as_u64() {
    Value::from(uint)
  } else {
    number
      .as_f64()
      .and_then(serde_json::Number::from_f64)
      .map_or(Value::Null, Value::Number)
  }
}

fn yaml_key_to_string(key: serde_yaml::Value) -> String {
  use serde_yaml::Value as Yaml;

  match key {
    Yaml::String(text) => text,
    Yaml::Number(number) => number.to_string(),
    Yaml::Bool(flag) => flag.to_string(),
    Yaml::Null => "null".to_string(),
    Yaml::Tagged(tagged) => yaml_key_to_string(tagged.value),
    other => serde_yaml::to_string(&other)
      .map(|text| text.trim_end().to_string())
      .unwrap_or_default(),
  }
}
