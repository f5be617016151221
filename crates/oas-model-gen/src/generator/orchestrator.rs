//! End-to-end generation requests.
//!
//! An [`Orchestrator`] owns one parsed document and one set of options. Each
//! call to [`Orchestrator::generate`] resolves the selection, converts every
//! schema in the closure and renders it, without touching shared state, so
//! identical inputs always produce identical artifacts.
//!
//! ```no_run
//! # use crate::generator::{config::GenerationOptions, orchestrator::Orchestrator};
//! # fn example(text: &str) -> Result<(), crate::generator::document::SpecError> {
//! let orchestrator = Orchestrator::from_text(text, GenerationOptions::default())?;
//! let output = orchestrator.generate(&["Pet"]);
//! for artifact in &output.artifacts {
//!   println!("{}: {} bytes", artifact.file_name(), artifact.code.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;

use crate::generator::{
  ast::JavaDefinition,
  codegen,
  config::GenerationOptions,
  converter::SchemaConverter,
  dependency_resolver::DependencyResolver,
  document::{SchemaDocument, SpecError, SpecFormat},
  metrics::{GenerationStats, GenerationWarning},
  schema::SchemaMap,
};

/// Extension of every written artifact.
pub const JAVA_EXTENSION: &str = "java";

/// Source code for one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
  /// The schema name as it appears in the document.
  pub name: String,
  pub code: String,
}

impl GeneratedArtifact {
  pub fn file_name(&self) -> String {
    format!("{}.{JAVA_EXTENSION}", self.name)
  }
}

/// Whether `name` can become a file directly inside the output directory.
pub fn is_file_safe_name(name: &str) -> bool {
  !name.is_empty() && !name.contains(['/', '\\']) && !name.chars().any(char::is_control)
}

#[derive(Debug, Clone, Default)]
pub struct GeneratedOutput {
  /// One artifact per schema, sorted by name.
  pub artifacts: Vec<GeneratedArtifact>,
  pub stats: GenerationStats,
}

pub struct Orchestrator {
  document: SchemaDocument,
  schemas: SchemaMap,
  options: GenerationOptions,
}

impl Orchestrator {
  pub fn new(document: SchemaDocument, options: GenerationOptions) -> Self {
    let schemas = document.extract_schemas();
    Self {
      document,
      schemas,
      options,
    }
  }

  /// Parses JSON or YAML text and prepares it for generation.
  pub fn from_text(text: &str, options: GenerationOptions) -> Result<Self, SpecError> {
    Self::from_text_as(text, SpecFormat::Json, options)
  }

  pub fn from_text_as(text: &str, format: SpecFormat, options: GenerationOptions) -> Result<Self, SpecError> {
    Ok(Self::new(SchemaDocument::parse_as(text, format)?, options))
  }

  pub fn document(&self) -> &SchemaDocument {
    &self.document
  }

  pub fn schemas(&self) -> &SchemaMap {
    &self.schemas
  }

  pub fn options(&self) -> &GenerationOptions {
    &self.options
  }

  /// Generates the selected schemas and everything they reference.
  ///
  /// Selected names missing from the document each produce one "not found"
  /// artifact; an empty selection produces no artifacts. Names that contain a
  /// path separator are skipped with a warning.
  pub fn generate<S: AsRef<str>>(&self, selected: &[S]) -> GeneratedOutput {
    let resolution = DependencyResolver::new(&self.schemas).resolve(selected);
    let mut stats = GenerationStats::default();

    let mut names: BTreeSet<&str> = resolution.names.iter().map(String::as_str).collect();
    names.extend(
      selected
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|name| !self.schemas.contains_key(*name)),
    );

    let converter = SchemaConverter::new(&self.schemas, &self.options);
    let (names, unsafe_names): (Vec<&str>, Vec<&str>) = names.into_iter().partition(|name| is_file_safe_name(name));
    stats.record_warnings(unsafe_names.into_iter().map(|name| GenerationWarning::UnsafeFileName {
      schema_name: name.to_string(),
    }));

    let artifacts = names
      .into_iter()
      .map(|name| {
        let definition = converter.convert(name);
        stats.record_definition(&definition);

        if matches!(definition, JavaDefinition::Class(_))
          && self.schemas.get(name).is_some_and(|schema| !schema.is_object())
        {
          stats.record_warning(GenerationWarning::NonObjectSchema {
            schema_name: name.to_string(),
          });
        }

        GeneratedArtifact {
          name: name.to_string(),
          code: codegen::render(&definition),
        }
      })
      .collect();

    stats.record_warnings(resolution.unresolved.into_iter().flat_map(|(schema_name, missing)| {
      missing.into_iter().map(move |reference| GenerationWarning::UnresolvedReference {
        schema_name: schema_name.clone(),
        reference,
      })
    }));
    stats.record_cycles(resolution.cycles);

    GeneratedOutput { artifacts, stats }
  }

  /// Generates every schema in the document.
  pub fn generate_all(&self) -> GeneratedOutput {
    let names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
    self.generate(&names)
  }
}

/// Parses `text` and generates the closure of `selected`.
///
/// Fails only when the text cannot be parsed into a document.
pub fn generate_artifacts<S: AsRef<str>>(
  text: &str,
  options: &GenerationOptions,
  selected: &[S],
) -> Result<Vec<GeneratedArtifact>, SpecError> {
  let orchestrator = Orchestrator::from_text(text, options.clone())?;
  Ok(orchestrator.generate(selected).artifacts)
}
