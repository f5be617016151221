use serde_json::json;

use crate::generator::{
  ast::{Documentation, EnumConstant, EnumDef},
  codegen::{emit, enums::render_enum},
  config::GenerationOptions,
  tests::support::schema_map,
};

#[test]
fn test_emit_enum_with_literals() {
  let schemas = schema_map(json!({
    "Color": { "type": "string", "description": "Paint color", "enum": ["red", "dark-blue"] }
  }));

  let expected = r#"package com.generated.models;

import com.fasterxml.jackson.annotation.JsonProperty;

/**
 * Paint color
 */
public enum Color {
    @JsonProperty("red")
    RED,
    @JsonProperty("dark-blue")
    DARK_BLUE
}
"#;
  assert_eq!(emit("Color", &schemas, &GenerationOptions::default()), expected);
}

#[test]
fn test_render_enum_without_literals() {
  let def = EnumDef::builder()
    .name("Flag")
    .package("")
    .docs(Documentation::default())
    .constants(vec![
      EnumConstant {
        name: "ON".to_string(),
        literal: None,
      },
      EnumConstant {
        name: "OFF".to_string(),
        literal: None,
      },
    ])
    .build();

  assert_eq!(render_enum(&def), "public enum Flag {\n    ON,\n    OFF\n}\n");
}

#[test]
fn test_render_empty_enum() {
  let def = EnumDef::builder().name("Nothing").package("").build();
  assert_eq!(render_enum(&def), "public enum Nothing {\n}\n");
}

#[test]
fn test_literal_escaping() {
  let def = EnumDef::builder()
    .name("Quote")
    .package("")
    .constants(vec![EnumConstant {
      name: "SAY_HI_".to_string(),
      literal: Some("say \"hi\"".to_string()),
    }])
    .build();

  assert_eq!(
    render_enum(&def),
    "public enum Quote {\n    @JsonProperty(\"say \\\"hi\\\"\")\n    SAY_HI_\n}\n"
  );
}
