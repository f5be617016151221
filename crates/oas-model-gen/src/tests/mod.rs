
use crate::generator::{
  config::GenerationOptions,
  document::SpecFormat,
  orchestrator::{GeneratedArtifact, Orchestrator},
};

pub(crate) const PETSTORE_YAML: &str = include_str!("../../fixtures/petstore.yaml");
pub(crate) const SWAGGER_PETSTORE_JSON: &str = include_str!("../../fixtures/swagger_petstore.json");
pub(crate) const COMPOSITION_YAML: &str = include_str!("../../fixtures/composition.yaml");

pub(crate) fn yaml_orchestrator(text: &str, options: GenerationOptions) -> Orchestrator {
  Orchestrator::from_text_as(text, SpecFormat::Yaml, options).unwrap()
}

/// Source of the artifact named `name`.
pub(crate) fn artifact<'a>(artifacts: &'a [GeneratedArtifact], name: &str) -> &'a str {
  artifacts
    .iter()
    .find(|artifact| artifact.name == name)
    .map(|artifact| artifact.code.as_str())
    .unwrap_or_else(|| panic!("no artifact named {name}"))
}

/// Field declarations in order, as `Type name` pairs.
pub(crate) fn field_declarations(code: &str) -> Vec<String> {
  code
    .lines()
    .filter_map(|line| line.trim().strip_prefix("private "))
    .map(|decl| decl.trim_end_matches(';').to_string())
    .collect()
}
