use std::fmt;

use super::literals::java_string_literal;
use crate::generator::config::ValidationApi;

/// Matches the canonical 8-4-4-4-12 hex form of a UUID.
pub const UUID_PATTERN: &str = "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";

/// A Bean Validation constraint annotation on a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationAnnotation {
  NotNull,
  Size { min: Option<u64>, max: Option<u64> },
  /// The raw regular expression; escaped when rendered.
  Pattern(String),
  Email,
  Min(i64),
  Max(i64),
  DecimalMin { value: String, inclusive: bool },
  DecimalMax { value: String, inclusive: bool },
}

impl ValidationAnnotation {
  pub const fn simple_name(&self) -> &'static str {
    match self {
      Self::NotNull => "NotNull",
      Self::Size { .. } => "Size",
      Self::Pattern(_) => "Pattern",
      Self::Email => "Email",
      Self::Min(_) => "Min",
      Self::Max(_) => "Max",
      Self::DecimalMin { .. } => "DecimalMin",
      Self::DecimalMax { .. } => "DecimalMax",
    }
  }

  pub fn import(&self, api: ValidationApi) -> String {
    format!("{}.{}", api.constraints_package(), self.simple_name())
  }
}

fn long_literal(value: i64) -> String {
  if i32::try_from(value).is_ok() {
    value.to_string()
  } else {
    format!("{value}L")
  }
}

fn write_decimal(f: &mut fmt::Formatter<'_>, name: &str, value: &str, inclusive: bool) -> fmt::Result {
  let value = java_string_literal(value);
  if inclusive {
    write!(f, "@{name}({value})")
  } else {
    write!(f, "@{name}(value = {value}, inclusive = false)")
  }
}

impl fmt::Display for ValidationAnnotation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NotNull => f.write_str("@NotNull"),
      Self::Email => f.write_str("@Email"),
      Self::Size {
        min: Some(min),
        max: Some(max),
      } => write!(f, "@Size(min = {min}, max = {max})"),
      Self::Size { min: Some(min), max: None } => write!(f, "@Size(min = {min})"),
      Self::Size { min: None, max: Some(max) } => write!(f, "@Size(max = {max})"),
      Self::Size { min: None, max: None } => f.write_str("@Size"),
      Self::Pattern(regex) => write!(f, "@Pattern(regexp = {})", java_string_literal(regex)),
      Self::Min(value) => write!(f, "@Min({})", long_literal(*value)),
      Self::Max(value) => write!(f, "@Max({})", long_literal(*value)),
      Self::DecimalMin { value, inclusive } => write_decimal(f, "DecimalMin", value, *inclusive),
      Self::DecimalMax { value, inclusive } => write_decimal(f, "DecimalMax", value, *inclusive),
    }
  }
}
