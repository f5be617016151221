use strum::Display;

use crate::generator::ast::JavaDefinition;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub artifacts_generated: usize,
  pub classes_generated: usize,
  pub enums_generated: usize,
  pub missing_schemas: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_class(&mut self) {
    self.classes_generated += 1;
    self.artifacts_generated += 1;
  }

  pub fn record_enum(&mut self) {
    self.enums_generated += 1;
    self.artifacts_generated += 1;
  }

  pub fn record_missing(&mut self, schema_name: &str) {
    self.missing_schemas += 1;
    self.artifacts_generated += 1;
    self.record_warning(GenerationWarning::SchemaNotFound {
      schema_name: schema_name.to_string(),
    });
  }

  pub fn record_definition(&mut self, definition: &JavaDefinition) {
    match definition {
      JavaDefinition::Class(_) => self.record_class(),
      JavaDefinition::Enum(_) => self.record_enum(),
      JavaDefinition::Missing(name) => self.record_missing(name),
    }
  }

  pub fn record_cycle(&mut self, cycle: Vec<String>) {
    self.cycles_detected += 1;
    self.cycle_details.push(cycle);
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    for cycle in cycles {
      self.record_cycle(cycle);
    }
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Schema '{schema_name}' references '{reference}', which is not defined")]
  UnresolvedReference { schema_name: String, reference: String },
  #[strum(to_string = "Schema '{schema_name}' was requested but is not defined")]
  SchemaNotFound { schema_name: String },
  #[strum(to_string = "Schema '{schema_name}' is not an object; generated an empty class")]
  NonObjectSchema { schema_name: String },
  #[strum(to_string = "Schema '{schema_name}' cannot be used as a file name")]
  UnsafeFileName { schema_name: String },
}

impl GenerationWarning {
  /// Whether the warning means a requested artifact has no real content.
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::SchemaNotFound { .. } | Self::UnsafeFileName { .. })
  }
}
