use bon::Builder;
use clap::ValueEnum;
use strum::Display;

/// How `date` and `date-time` strings are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
pub enum DateType {
  #[default]
  #[value(name = "OffsetDateTime", alias = "offset-date-time")]
  #[strum(to_string = "OffsetDateTime")]
  OffsetDateTime,
  #[value(name = "String", alias = "string")]
  #[strum(to_string = "String")]
  String,
}

/// How schema-level enumerations are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
pub enum EnumStyle {
  /// A Java `enum` type.
  #[default]
  #[value(name = "enum")]
  #[strum(to_string = "enum")]
  Native,
  /// `String` constants; accepted by the parser, rejected before generation.
  #[value(name = "string")]
  #[strum(to_string = "string")]
  StringConstants,
}

/// Namespace of the Bean Validation annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ValidationApi {
  #[default]
  Jakarta,
  Javax,
}

impl ValidationApi {
  pub const fn constraints_package(self) -> &'static str {
    match self {
      Self::Jakarta => "jakarta.validation.constraints",
      Self::Javax => "javax.validation.constraints",
    }
  }
}

/// Per-request generation settings. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerationOptions {
  #[builder(into, default = String::from(DEFAULT_PACKAGE))]
  pub package_name: String,
  /// Emit `@Data` instead of hand-written accessors.
  #[builder(default = true)]
  pub use_lombok: bool,
  /// Emit `@JsonProperty` and `@JsonInclude`.
  #[builder(default = true)]
  pub use_jackson: bool,
  #[builder(default)]
  pub date_type: DateType,
  /// `Long` rather than `long`, and so on. Generic arguments are always boxed.
  #[builder(default = true)]
  pub use_boxed_primitives: bool,
  #[builder(default = true)]
  pub generate_accessors: bool,
  /// Wrap fields that are not required in `Optional<T>`.
  #[builder(default = false)]
  pub use_optional: bool,
  #[builder(default)]
  pub enum_style: EnumStyle,
  #[builder(default = true)]
  pub use_validation: bool,
  #[builder(default)]
  pub validation_api: ValidationApi,
}

pub const DEFAULT_PACKAGE: &str = "com.generated.models";

impl Default for GenerationOptions {
  fn default() -> Self {
    Self::builder().build()
  }
}

impl GenerationOptions {
  /// Accessor pairs are only written when Lombok is not generating them.
  pub const fn emits_accessors(&self) -> bool {
    self.generate_accessors && !self.use_lombok
  }
}
