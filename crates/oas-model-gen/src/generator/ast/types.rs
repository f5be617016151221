use std::fmt;

/// Java primitive types with a boxed counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JavaPrimitive {
  Int,
  Long,
  Float,
  Double,
  Boolean,
}

impl JavaPrimitive {
  pub const fn keyword(self) -> &'static str {
    match self {
      Self::Int => "int",
      Self::Long => "long",
      Self::Float => "float",
      Self::Double => "double",
      Self::Boolean => "boolean",
    }
  }

  pub const fn boxed_name(self) -> &'static str {
    match self {
      Self::Int => "Integer",
      Self::Long => "Long",
      Self::Float => "Float",
      Self::Double => "Double",
      Self::Boolean => "Boolean",
    }
  }
}

/// A Java type as written in a field or accessor signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JavaType {
  String,
  OffsetDateTime,
  BigDecimal,
  Object,
  Primitive { primitive: JavaPrimitive, boxed: bool },
  List(Box<JavaType>),
  Optional(Box<JavaType>),
  /// A generated model class or enum.
  Named(String),
}

impl JavaType {
  pub const fn primitive(primitive: JavaPrimitive, boxed: bool) -> Self {
    Self::Primitive { primitive, boxed }
  }

  /// `List<T>`, boxing `T` since generic arguments cannot be primitives.
  pub fn list_of(inner: JavaType) -> Self {
    Self::List(Box::new(inner.boxed()))
  }

  pub fn optional_of(inner: JavaType) -> Self {
    Self::Optional(Box::new(inner.boxed()))
  }

  #[must_use]
  pub fn boxed(self) -> Self {
    match self {
      Self::Primitive { primitive, .. } => Self::Primitive { primitive, boxed: true },
      other => other,
    }
  }

  /// Fully qualified names this type needs imported, outermost first.
  pub fn imports(&self) -> Vec<&'static str> {
    let mut imports = vec![];
    self.collect_imports(&mut imports);
    imports
  }

  fn collect_imports(&self, imports: &mut Vec<&'static str>) {
    match self {
      Self::OffsetDateTime => imports.push("java.time.OffsetDateTime"),
      Self::BigDecimal => imports.push("java.math.BigDecimal"),
      Self::List(inner) => {
        imports.push("java.util.List");
        inner.collect_imports(imports);
      }
      Self::Optional(inner) => {
        imports.push("java.util.Optional");
        inner.collect_imports(imports);
      }
      Self::String | Self::Object | Self::Primitive { .. } | Self::Named(_) => {}
    }
  }
}

impl fmt::Display for JavaType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::String => f.write_str("String"),
      Self::OffsetDateTime => f.write_str("OffsetDateTime"),
      Self::BigDecimal => f.write_str("BigDecimal"),
      Self::Object => f.write_str("Object"),
      Self::Primitive { primitive, boxed: true } => f.write_str(primitive.boxed_name()),
      Self::Primitive { primitive, boxed: false } => f.write_str(primitive.keyword()),
      Self::List(inner) => write!(f, "List<{inner}>"),
      Self::Optional(inner) => write!(f, "Optional<{inner}>"),
      Self::Named(name) => f.write_str(name),
    }
  }
}
