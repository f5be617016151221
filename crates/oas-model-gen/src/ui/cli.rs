use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};
use crate::generator::config::{DEFAULT_PACKAGE, DateType, EnumStyle, ValidationApi};

#[derive(Parser, Debug)]
#[command(name = "oas-model-gen")]
#[command(author, version, about = "OpenAPI / Swagger schema to Java model class generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from an OpenAPI or Swagger specification
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate Java model classes from schema definitions
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateCommand {
  /// Path to the OpenAPI or Swagger specification (JSON or YAML)
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory where one `{Schema}.java` file per schema is written
  #[arg(short, long, value_name = "DIR", required_unless_present = "archive")]
  pub output: Option<PathBuf>,

  /// Also pack the generated files into this zip archive
  #[arg(long, value_name = "FILE")]
  pub archive: Option<PathBuf>,

  /// Schemas to generate (comma-separated); their references are included
  #[arg(short, long, value_name = "NAMES", value_delimiter = ',', conflicts_with = "all_schemas")]
  pub schemas: Option<Vec<String>>,

  /// Generate every schema defined in the document
  #[arg(long, default_value_t = false)]
  pub all_schemas: bool,

  /// Java package of the generated classes
  #[arg(short, long, value_name = "PACKAGE", default_value = DEFAULT_PACKAGE)]
  pub package: String,

  /// Write accessors instead of Lombok `@Data`
  #[arg(long, default_value_t = false)]
  pub no_lombok: bool,

  /// Omit Jackson annotations
  #[arg(long, default_value_t = false)]
  pub no_jackson: bool,

  /// Representation of `date` and `date-time` strings
  #[arg(long, value_enum, default_value_t = DateType::OffsetDateTime)]
  pub date_type: DateType,

  /// Use primitive types (`long`) instead of boxed ones (`Long`)
  #[arg(long, default_value_t = false)]
  pub primitives: bool,

  /// Do not write getters and setters when Lombok is disabled
  #[arg(long, default_value_t = false)]
  pub no_accessors: bool,

  /// Wrap properties that are not required in `Optional<T>`
  #[arg(long, default_value_t = false)]
  pub optional: bool,

  /// Representation of schema-level enumerations
  #[arg(long = "enum-type", value_enum, default_value_t = EnumStyle::Native)]
  pub enum_style: EnumStyle,

  /// Omit Bean Validation annotations
  #[arg(long, default_value_t = false)]
  pub no_validation: bool,

  /// Namespace of the Bean Validation annotations
  #[arg(long, value_enum, default_value_t = ValidationApi::Jakarta)]
  pub validation_api: ValidationApi,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all schema definitions with a summary of their properties
  Schemas {
    /// Path to the OpenAPI or Swagger specification (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Print the summary as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
  },
}
