use std::{
  collections::{BTreeSet, HashSet},
  sync::LazyLock,
};

use any_ascii::any_ascii;
use regex::Regex;

/// Java keywords and literals that cannot name a field.
pub(crate) static JAVA_KEYWORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "try",
    "void",
    "volatile",
    "while",
    "var",
    "yield",
    "record",
    "true",
    "false",
    "null",
    "_",
  ]
  .into_iter()
  .collect()
});

/// Type names the generated code already uses; a schema with one of these
/// names would shadow it.
static RESERVED_TYPE_NAMES: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "Object",
    "String",
    "Integer",
    "Long",
    "Float",
    "Double",
    "Boolean",
    "List",
    "Optional",
    "BigDecimal",
    "OffsetDateTime",
    "Data",
    "JsonProperty",
    "JsonInclude",
  ]
  .into_iter()
  .collect()
});

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());
static CONSTANT_INVALID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());

/// Transliterates to ASCII, replaces invalid characters with underscores,
/// collapses runs of underscores and trims them from both ends.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

fn words(input: &str) -> impl Iterator<Item = &str> {
  input.split('_').filter(|word| !word.is_empty())
}

/// Upper-cases the first character and leaves the rest untouched.
pub(crate) fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}

fn decapitalize(word: &str) -> String {
  if word.chars().all(|c| !c.is_ascii_lowercase()) {
    return word.to_ascii_lowercase();
  }
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}

/// Converts a schema name into a Java type name (`PascalCase`).
///
/// Separators (`-`, `_`, `.`, spaces and any other non-alphanumeric character)
/// start a new word; the casing inside a word is kept, so `HTTPResponse` and
/// `petStore` become `HTTPResponse` and `PetStore`. Names that would shadow a
/// type used by generated code get a `Type` suffix, and a leading digit gets a
/// `T` prefix.
pub(crate) fn to_java_type_name(name: &str) -> String {
  let mut ident: String = words(&sanitize(name)).map(capitalize).collect();

  if ident.is_empty() {
    return "Unnamed".to_string();
  }

  if RESERVED_TYPE_NAMES.contains(ident.as_str()) {
    ident.push_str("Type");
  }

  prefix_if_digit_start(&mut ident, 'T');
  ident
}

/// Converts a property name into a Java field name (`camelCase`).
///
/// # Rules:
/// 1. Sanitizes the name and splits it into words on separators.
/// 2. The first word is lower-cased (entirely, when it is all caps like `ID`).
/// 3. Following words are capitalized.
/// 4. If the result is empty, it becomes `field`.
/// 5. If the result starts with a digit, it's prefixed with `_`.
/// 6. If the result is a keyword or literal, it gets a trailing `_`.
pub(crate) fn to_java_field_name(name: &str) -> String {
  let sanitized = sanitize(name);
  let mut parts = words(&sanitized);

  let Some(first) = parts.next() else {
    return "field".to_string();
  };

  let mut ident = decapitalize(first);
  ident.extend(parts.map(capitalize));

  prefix_if_digit_start(&mut ident, '_');

  if JAVA_KEYWORDS.contains(ident.as_str()) {
    ident.push('_');
  }
  ident
}

/// Converts an enum literal into a Java enum constant name.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_` and the result is
/// upper-cased, so `in-progress` becomes `IN_PROGRESS`.
pub(crate) fn to_enum_constant_name(literal: &str) -> String {
  if literal.is_empty() {
    return "EMPTY".to_string();
  }

  let mut ident = CONSTANT_INVALID_RE.replace_all(literal, "_").to_uppercase();

  if ident.is_empty() {
    return "EMPTY".to_string();
  }

  if ident.chars().all(|c| c == '_') {
    ident.insert_str(0, "VALUE");
  }

  prefix_if_digit_start(&mut ident, '_');
  ident
}

/// Ensures a name is unique within a set of used names, appending a numeric suffix if needed.
pub(crate) fn ensure_unique(base_name: &str, used_names: &BTreeSet<String>) -> String {
  if !used_names.contains(base_name) {
    return base_name.to_string();
  }
  let mut i = 2;
  loop {
    let new_name = format!("{base_name}{i}");
    if !used_names.contains(&new_name) {
      return new_name;
    }
    i += 1;
  }
}

fn prefix_if_digit_start(ident: &mut String, prefix: char) {
  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, prefix);
  }
}
