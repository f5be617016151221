//! Definitions of the Java source the generator emits.
//!
//! The converter builds these from schemas; codegen renders them to text.

mod documentation;
mod fields;
pub(crate) mod literals;
pub(super) mod types;
pub(super) mod validation_attrs;


use std::collections::BTreeSet;

pub use documentation::Documentation;
pub use fields::FieldDef;
pub use types::{JavaPrimitive, JavaType};
pub use validation_attrs::{UUID_PATTERN, ValidationAnnotation};

/// Annotations placed on the class declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ClassAnnotation {
  /// Lombok `@Data`.
  Data,
  /// Jackson `@JsonInclude(JsonInclude.Include.NON_NULL)`.
  JsonIncludeNonNull,
}

impl ClassAnnotation {
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Data => "@Data",
      Self::JsonIncludeNonNull => "@JsonInclude(JsonInclude.Include.NON_NULL)",
    }
  }

  pub const fn import(self) -> &'static str {
    match self {
      Self::Data => "lombok.Data",
      Self::JsonIncludeNonNull => "com.fasterxml.jackson.annotation.JsonInclude",
    }
  }
}

/// A model class.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ClassDef {
  #[builder(into)]
  pub name: String,
  #[builder(into)]
  pub package: String,
  #[builder(default)]
  pub docs: Documentation,
  /// Leading lines of the pretty-printed source schema.
  #[builder(default)]
  pub excerpt: Vec<String>,
  #[builder(default)]
  pub annotations: Vec<ClassAnnotation>,
  #[builder(default)]
  pub fields: Vec<FieldDef>,
  #[builder(default)]
  pub accessors: bool,
  #[builder(default)]
  pub imports: BTreeSet<String>,
}

/// One constant of an enum, with the literal it serializes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
  pub name: String,
  /// Emitted as `@JsonProperty` when present.
  pub literal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct EnumDef {
  #[builder(into)]
  pub name: String,
  #[builder(into)]
  pub package: String,
  #[builder(default)]
  pub docs: Documentation,
  #[builder(default)]
  pub constants: Vec<EnumConstant>,
  #[builder(default)]
  pub imports: BTreeSet<String>,
}

/// What a single selected schema turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JavaDefinition {
  Class(ClassDef),
  Enum(EnumDef),
  /// The schema name was not present in the document.
  Missing(String),
}
