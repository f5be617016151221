/// Policy for determining if a field is wrapped in `Optional<T>`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FieldOptionalityPolicy {
  use_optional: bool,
}

impl FieldOptionalityPolicy {
  pub fn new(use_optional: bool) -> Self {
    Self { use_optional }
  }

  /// A field is wrapped only when wrappers are enabled and the property is
  /// not listed in `required`.
  pub fn is_optional(self, is_required: bool) -> bool {
    self.use_optional && !is_required
  }
}
