use itertools::Itertools;

use super::{INDENT, render_docs, render_preamble};
use crate::generator::ast::{ClassDef, FieldDef, literals::java_string_literal};

pub fn render_class(def: &ClassDef) -> String {
  let mut out = render_preamble(&def.package, &def.imports);

  if !def.excerpt.is_empty() {
    out.push_str("/*\n Original schema (excerpt):\n");
    for line in &def.excerpt {
      out.push_str(&format!(" {line}\n"));
    }
    out.push_str("*/\n");
  }

  out.push_str(&render_docs(&def.docs, ""));
  for annotation in &def.annotations {
    out.push_str(annotation.as_str());
    out.push('\n');
  }

  out.push_str(&format!("public class {} {{\n", def.name));

  if !def.fields.is_empty() {
    out.push('\n');
    out.push_str(&def.fields.iter().map(render_field).join("\n\n"));
    out.push('\n');

    if def.accessors {
      for field in &def.fields {
        out.push_str(&render_accessors(field));
      }
    }
  }

  out.push_str("}\n");
  out
}

fn render_field(field: &FieldDef) -> String {
  let mut out = render_docs(&field.docs, INDENT);

  for annotation in &field.validation {
    out.push_str(&format!("{INDENT}{annotation}\n"));
  }
  if let Some(json_name) = &field.json_name {
    out.push_str(&format!("{INDENT}@JsonProperty({})\n", java_string_literal(json_name)));
  }

  out.push_str(&format!("{INDENT}private {} {};", field.java_type, field.name));
  out
}

fn render_accessors(field: &FieldDef) -> String {
  let FieldDef { name, java_type, .. } = field;
  let getter = field.getter_name();
  let setter = field.setter_name();

  format!(
    "\n{INDENT}public {java_type} {getter}() {{\n{INDENT}{INDENT}return {name};\n{INDENT}}}\n\
     \n{INDENT}public void {setter}({java_type} {name}) {{\n{INDENT}{INDENT}this.{name} = {name};\n{INDENT}}}\n"
  )
}
