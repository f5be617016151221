use serde_json::Number;

use crate::generator::{
  ast::{UUID_PATTERN, ValidationAnnotation},
  schema::{Bound, PropertyKind, PropertySpec, SchemaType},
};

/// Builds the constraint annotations for one property.
///
/// String rules apply to string-typed primitives and inline enums, item
/// counts to arrays, and numeric bounds to integers and numbers. References
/// and inline objects only ever receive `@NotNull`.
pub(crate) fn validation_annotations(property: &PropertySpec, is_required: bool) -> Vec<ValidationAnnotation> {
  let mut annotations = vec![];

  if is_required {
    annotations.push(ValidationAnnotation::NotNull);
  }

  let constraints = &property.constraints;

  match &property.kind {
    PropertyKind::Primitive { schema_type, format } | PropertyKind::EnumMarker { schema_type, format, .. } => {
      if *schema_type == SchemaType::String {
        annotations.extend(size(constraints.min_length, constraints.max_length));
        if let Some(pattern) = &constraints.pattern {
          annotations.push(ValidationAnnotation::Pattern(pattern.clone()));
        }
        match format.as_deref() {
          Some("email") => annotations.push(ValidationAnnotation::Email),
          Some("uuid") => annotations.push(ValidationAnnotation::Pattern(UUID_PATTERN.to_string())),
          _ => {}
        }
      } else if schema_type.is_numeric() {
        if let Some(bound) = &constraints.minimum {
          annotations.push(lower_bound(bound));
        }
        if let Some(bound) = &constraints.maximum {
          annotations.push(upper_bound(bound));
        }
      }
    }
    PropertyKind::ArrayOf { .. } => {
      annotations.extend(size(constraints.min_items, constraints.max_items));
    }
    PropertyKind::Reference(_) | PropertyKind::InlineObject(_) => {}
  }

  annotations
}

fn size(min: Option<u64>, max: Option<u64>) -> Option<ValidationAnnotation> {
  (min.is_some() || max.is_some()).then_some(ValidationAnnotation::Size { min, max })
}

fn lower_bound(bound: &Bound) -> ValidationAnnotation {
  match integral(&bound.value) {
    Some(value) if !bound.exclusive => ValidationAnnotation::Min(value),
    _ => ValidationAnnotation::DecimalMin {
      value: bound.value.to_string(),
      inclusive: !bound.exclusive,
    },
  }
}

fn upper_bound(bound: &Bound) -> ValidationAnnotation {
  match integral(&bound.value) {
    Some(value) if !bound.exclusive => ValidationAnnotation::Max(value),
    _ => ValidationAnnotation::DecimalMax {
      value: bound.value.to_string(),
      inclusive: !bound.exclusive,
    },
  }
}

/// The value as an `i64` when it has no fractional part and fits.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral(number: &Number) -> Option<i64> {
  if let Some(value) = number.as_i64() {
    return Some(value);
  }
  if number.is_u64() {
    return None;
  }
  number
    .as_f64()
    .filter(|value| value.fract() == 0.0 && value.abs() < i64::MAX as f64)
    .map(|value| value as i64)
}
