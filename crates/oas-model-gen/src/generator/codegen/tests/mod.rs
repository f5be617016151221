mod enum_tests;

use std::collections::BTreeSet;

use crate::generator::{
  ast::{Documentation, JavaDefinition},
  codegen::{render, render_docs, render_preamble},
};

#[test]
fn test_missing_schema_comment() {
  assert_eq!(
    render(&JavaDefinition::Missing("Ghost".to_string())),
    "// Schema Ghost not found."
  );
}

#[test]
fn test_preamble() {
  let imports: BTreeSet<String> = ["java.util.List", "java.math.BigDecimal"]
    .into_iter()
    .map(String::from)
    .collect();

  assert_eq!(
    render_preamble("com.example", &imports),
    "package com.example;\n\nimport java.math.BigDecimal;\nimport java.util.List;\n\n"
  );
  assert_eq!(render_preamble("", &BTreeSet::new()), "");
  assert_eq!(render_preamble("com.example", &BTreeSet::new()), "package com.example;\n\n");
}

#[test]
fn test_docs_block() {
  let docs = Documentation::from_raw("Summary\n\nDetails here");
  assert_eq!(
    render_docs(&docs, "    "),
    "    /**\n     * Summary\n     *\n     * Details here\n     */\n"
  );
  assert_eq!(render_docs(&Documentation::default(), ""), "");
}
