use std::path::{Path, PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    config::{EnumStyle, GenerationOptions},
    metrics::GenerationStats,
    naming::identifiers::JAVA_KEYWORDS,
    orchestrator::{GeneratedArtifact, GeneratedOutput, Orchestrator},
  },
  ui::{Colors, GenerateCommand, colors::Role},
  utils::{archive::build_archive, spec::SpecLoader},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

/// Which schemas a run starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSelection {
  All,
  Named(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: Option<PathBuf>,
  pub archive: Option<PathBuf>,
  pub selection: SchemaSelection,
  pub options: GenerationOptions,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      archive,
      schemas,
      all_schemas,
      package,
      no_lombok,
      no_jackson,
      date_type,
      primitives,
      no_accessors,
      optional,
      enum_style,
      no_validation,
      validation_api,
      verbose,
      quiet,
    } = command;

    if enum_style == EnumStyle::StringConstants {
      anyhow::bail!("Enum type '{enum_style}' is not supported yet; use '{}'", EnumStyle::Native);
    }

    validate_package(&package)?;

    let selection = match (all_schemas, schemas) {
      (true, _) => SchemaSelection::All,
      (false, Some(names)) if names.iter().any(|name| !name.trim().is_empty()) => SchemaSelection::Named(
        names
          .into_iter()
          .map(|name| name.trim().to_string())
          .filter(|name| !name.is_empty())
          .collect(),
      ),
      (false, _) => anyhow::bail!("No schemas selected: pass --schemas NAME[,NAME...] or --all-schemas"),
    };

    if output.is_none() && archive.is_none() {
      anyhow::bail!("Nothing to write: pass --output DIR and/or --archive FILE");
    }

    let options = GenerationOptions::builder()
      .package_name(package)
      .use_lombok(!no_lombok)
      .use_jackson(!no_jackson)
      .date_type(date_type)
      .use_boxed_primitives(!primitives)
      .generate_accessors(!no_accessors)
      .use_optional(optional)
      .enum_style(enum_style)
      .use_validation(!no_validation)
      .validation_api(validation_api)
      .build();

    Ok(Self {
      input,
      output,
      archive,
      selection,
      options,
      verbose,
      quiet,
    })
  }

  fn generate(&self, orchestrator: &Orchestrator) -> GeneratedOutput {
    match &self.selection {
      SchemaSelection::All => orchestrator.generate_all(),
      SchemaSelection::Named(names) => orchestrator.generate(names.as_slice()),
    }
  }

  async fn write_files(&self, dir: &Path, artifacts: &[GeneratedArtifact]) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    for artifact in artifacts {
      tokio::fs::write(dir.join(artifact.file_name()), &artifact.code).await?;
    }
    Ok(())
  }

  async fn write_archive(&self, path: &Path, artifacts: &[GeneratedArtifact]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, build_archive(artifacts)?).await?;
    Ok(())
  }
}

/// Package names are dot-separated Java identifiers that are not keywords; empty means the default package.
fn validate_package(package: &str) -> anyhow::Result<()> {
  if package.is_empty() {
    return Ok(());
  }

  let is_identifier = |segment: &str| {
    let mut chars = segment.chars();
    chars
      .next()
      .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
      && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
  };

  if !package.split('.').all(is_identifier) {
    anyhow::bail!("Invalid Java package name '{package}'");
  }
  if let Some(keyword) = package.split('.').find(|segment| JAVA_KEYWORDS.contains(segment)) {
    anyhow::bail!("Invalid Java package name '{package}': '{keyword}' is a reserved word");
  }
  Ok(())
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.fg(Role::Timestamp)));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.fg(Role::Label)),
        value.with(self.colors.fg(Role::Value))
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading spec from: {}", self.config.input.display())
        .with(self.colors.fg(Role::Primary))
        .to_string(),
    );
  }

  fn log_document(&self, orchestrator: &Orchestrator) {
    let document = orchestrator.document();
    let title = document.title().unwrap_or("untitled");
    self.info(
      &format!(
        "Found {} schemas in '{title}' ({})",
        orchestrator.schemas().len(),
        document.version()
      )
      .with(self.colors.fg(Role::Info))
      .to_string(),
    );
  }

  fn log_generating(&self) {
    let message = match &self.config.selection {
      SchemaSelection::All => "Generating Java models for all schemas...".to_string(),
      SchemaSelection::Named(names) => format!("Generating Java models for {}...", names.join(", ")),
    };
    self.info(&message.with(self.colors.fg(Role::Primary)).to_string());
  }

  fn print_options(&self, options: &GenerationOptions) {
    if !self.config.verbose {
      return;
    }
    self.stat("Package:", options.package_name.clone());
    self.stat("Lombok:", options.use_lombok.to_string());
    self.stat("Jackson:", options.use_jackson.to_string());
    self.stat("Date type:", options.date_type.to_string());
    self.stat("Validation:", format!("{} ({})", options.use_validation, options.validation_api));
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Artifacts generated:", stats.artifacts_generated.to_string());
    self.stat("", format!("{} classes", stats.classes_generated));
    self.stat("", format!("{} enums", stats.enums_generated));
    if stats.missing_schemas > 0 {
      self.stat("", format!("{} not found", stats.missing_schemas));
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_cycles(stats);
    self.print_warnings(stats);
  }

  fn print_cycles(&self, stats: &GenerationStats) {
    if stats.cycles_detected == 0 {
      return;
    }

    self.stat("Reference cycles:", stats.cycles_detected.to_string());

    if self.config.verbose {
      for (i, cycle) in stats.cycle_details.iter().enumerate() {
        println!(
          "              {}: {}",
          format!("Cycle {}", i + 1).with(self.colors.fg(Role::Accent)),
          cycle.join(" <-> ").with(self.colors.fg(Role::Info))
        );
      }
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let mut printed_header = false;
    for warning in &stats.warnings {
      if !warning.is_skipped_item() && !self.config.verbose {
        continue;
      }

      if !printed_header {
        println!();
        printed_header = true;
      }

      let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        label.with(self.colors.fg(Role::Accent)),
        warning.to_string().with(self.colors.fg(Role::Primary))
      );
    }
  }

  fn log_writing(&self, target: &Path) {
    self.info(
      &format!("Writing to: {}", target.display())
        .with(self.colors.fg(Role::Primary))
        .to_string(),
    );
  }

  fn log_success(&self, count: usize) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.fg(Role::Timestamp)),
        format!("Successfully generated {count} Java files").with(self.colors.fg(Role::Success))
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = SpecLoader::open(&config.input).await?.parse()?;
  let orchestrator = Orchestrator::new(document, config.options.clone());
  logger.log_document(&orchestrator);

  logger.log_generating();
  logger.print_options(orchestrator.options());
  let output = config.generate(&orchestrator);
  logger.print_statistics(&output.stats);

  if let Some(dir) = &config.output {
    logger.log_writing(dir);
    config.write_files(dir, &output.artifacts).await?;
  }
  if let Some(path) = &config.archive {
    logger.log_writing(path);
    config.write_archive(path, &output.artifacts).await?;
  }

  logger.log_success(output.artifacts.len());
  Ok(())
}
