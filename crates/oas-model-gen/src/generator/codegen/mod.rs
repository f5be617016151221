//! Rendering of Java definitions to source text.

pub mod enums;
pub mod structs;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use super::{
  ast::{Documentation, JavaDefinition},
  config::GenerationOptions,
  converter::SchemaConverter,
  schema::SchemaMap,
};

pub(crate) const INDENT: &str = "    ";

/// Renders a converted definition.
pub fn render(definition: &JavaDefinition) -> String {
  match definition {
    JavaDefinition::Class(def) => structs::render_class(def),
    JavaDefinition::Enum(def) => enums::render_enum(def),
    JavaDefinition::Missing(name) => format!("// Schema {name} not found."),
  }
}

/// Produces the source for the schema `name`.
///
/// A name that is not in `schemas` produces a single comment line instead of a
/// class; no other schema is affected.
pub fn emit(name: &str, schemas: &SchemaMap, options: &GenerationOptions) -> String {
  render(&SchemaConverter::new(schemas, options).convert(name))
}

/// `package` line and sorted imports, each block followed by a blank line.
pub(crate) fn render_preamble(package: &str, imports: &BTreeSet<String>) -> String {
  let mut out = String::new();

  if !package.is_empty() {
    out.push_str(&format!("package {package};\n\n"));
  }

  if !imports.is_empty() {
    for import in imports {
      out.push_str(&format!("import {import};\n"));
    }
    out.push('\n');
  }

  out
}

/// A Javadoc block at `indent`, or nothing for empty documentation.
pub(crate) fn render_docs(docs: &Documentation, indent: &str) -> String {
  if docs.is_empty() {
    return String::new();
  }

  let mut out = format!("{indent}/**\n");
  for line in docs.lines() {
    if line.is_empty() {
      out.push_str(&format!("{indent} *\n"));
    } else {
      out.push_str(&format!("{indent} * {line}\n"));
    }
  }
  out.push_str(&format!("{indent} */\n"));
  out
}
