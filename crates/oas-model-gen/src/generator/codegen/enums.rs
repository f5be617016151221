use itertools::Itertools;

use super::{INDENT, render_docs, render_preamble};
use crate::generator::ast::{EnumConstant, EnumDef, literals::java_string_literal};

pub fn render_enum(def: &EnumDef) -> String {
  let mut out = render_preamble(&def.package, &def.imports);

  out.push_str(&render_docs(&def.docs, ""));
  out.push_str(&format!("public enum {} {{\n", def.name));

  if !def.constants.is_empty() {
    out.push_str(&def.constants.iter().map(render_constant).join(",\n"));
    out.push('\n');
  }

  out.push_str("}\n");
  out
}

fn render_constant(constant: &EnumConstant) -> String {
  match &constant.literal {
    Some(literal) => format!(
      "{INDENT}@JsonProperty({})\n{INDENT}{}",
      java_string_literal(literal),
      constant.name
    ),
    None => format!("{INDENT}{}", constant.name),
  }
}
