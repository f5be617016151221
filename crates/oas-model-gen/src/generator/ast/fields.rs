use super::{Documentation, JavaType, ValidationAnnotation};
use crate::generator::naming::identifiers::capitalize;

/// Java model class field definition
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct FieldDef {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub docs: Documentation,
  pub java_type: JavaType,
  #[builder(default)]
  pub validation: Vec<ValidationAnnotation>,
  /// Property name in the JSON document, emitted as `@JsonProperty`.
  #[builder(into)]
  pub json_name: Option<String>,
}

impl FieldDef {
  pub fn getter_name(&self) -> String {
    format!("get{}", capitalize(&self.name))
  }

  pub fn setter_name(&self) -> String {
    format!("set{}", capitalize(&self.name))
  }
}
