use serde_json::{Map, Number, Value};

/// Typed accessors over a raw schema object.
///
/// Schemas are kept as the untyped tree the document was parsed into, so every
/// lookup tolerates a missing key or a value of the wrong JSON type by returning
/// `None` instead of failing.
pub(crate) trait SchemaExt {
  fn str_field(&self, key: &str) -> Option<&str>;

  fn u64_field(&self, key: &str) -> Option<u64>;

  fn number_field(&self, key: &str) -> Option<&Number>;

  fn object_field(&self, key: &str) -> Option<&Map<String, Value>>;

  fn array_field(&self, key: &str) -> Option<&Vec<Value>>;

  /// Collects the string entries of an array field, ignoring anything else.
  fn string_list(&self, key: &str) -> Vec<String> {
    self
      .array_field(key)
      .map(|values| values.iter().filter_map(Value::as_str).map(String::from).collect())
      .unwrap_or_default()
  }
}

impl SchemaExt for Map<String, Value> {
  fn str_field(&self, key: &str) -> Option<&str> {
    self.get(key).and_then(Value::as_str)
  }

  fn u64_field(&self, key: &str) -> Option<u64> {
    match self.get(key)? {
      Value::Number(number) => number
        .as_u64()
        .or_else(|| number.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64)),
      _ => None,
    }
  }

  fn number_field(&self, key: &str) -> Option<&Number> {
    match self.get(key)? {
      Value::Number(number) => Some(number),
      _ => None,
    }
  }

  fn object_field(&self, key: &str) -> Option<&Map<String, Value>> {
    self.get(key).and_then(Value::as_object)
  }

  fn array_field(&self, key: &str) -> Option<&Vec<Value>> {
    self.get(key).and_then(Value::as_array)
  }
}
