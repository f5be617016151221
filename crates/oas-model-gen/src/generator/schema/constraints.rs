use serde_json::{Map, Number, Value};

use crate::utils::SchemaExt;

/// A numeric limit from `minimum`/`maximum`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound {
  pub value: Number,
  pub exclusive: bool,
}

/// Validation keywords attached to a property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
  pub min_length: Option<u64>,
  pub max_length: Option<u64>,
  pub pattern: Option<String>,
  pub min_items: Option<u64>,
  pub max_items: Option<u64>,
  pub minimum: Option<Bound>,
  pub maximum: Option<Bound>,
}

impl Constraints {
  pub(super) fn from_schema(schema: &Map<String, Value>) -> Self {
    Self {
      min_length: schema.u64_field("minLength"),
      max_length: schema.u64_field("maxLength"),
      pattern: schema
        .str_field("pattern")
        .filter(|pattern| !pattern.is_empty())
        .map(String::from),
      min_items: schema.u64_field("minItems"),
      max_items: schema.u64_field("maxItems"),
      minimum: read_bound(schema, "minimum", "exclusiveMinimum"),
      maximum: read_bound(schema, "maximum", "exclusiveMaximum"),
    }
  }
}

/// Reads an inclusive limit and its exclusive marker.
///
/// OpenAPI 3.0 and Swagger 2.0 mark exclusivity with a boolean next to the
/// limit; OpenAPI 3.1 puts the exclusive limit itself in the marker. A numeric
/// marker wins over a plain limit.
fn read_bound(schema: &Map<String, Value>, limit_key: &str, exclusive_key: &str) -> Option<Bound> {
  let limit = schema.number_field(limit_key);

  match schema.get(exclusive_key) {
    Some(Value::Number(value)) => Some(Bound {
      value: value.clone(),
      exclusive: true,
    }),
    Some(Value::Bool(exclusive)) => limit.map(|value| Bound {
      value: value.clone(),
      exclusive: *exclusive,
    }),
    _ => limit.map(|value| Bound {
      value: value.clone(),
      exclusive: false,
    }),
  }
}
