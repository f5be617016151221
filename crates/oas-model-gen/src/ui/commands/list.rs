use std::path::Path;

use comfy_table::{Attribute, Cell, ContentArrangement, Row, Table};
use itertools::Itertools;

use crate::{
  generator::summary::{SchemaSummary, summarize},
  ui::{Colors, colors::Role, term_width},
  utils::spec::SpecLoader,
};

async fn load_summaries(input: &Path) -> anyhow::Result<Vec<SchemaSummary>> {
  let document = SpecLoader::open(input).await?.parse()?;
  Ok(summarize(&document.extract_schemas()))
}

fn summary_table(summaries: &[SchemaSummary], colors: &Colors) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in ["SCHEMA", "KIND", "PROPERTIES", "DESCRIPTION"] {
    row.add_cell(Cell::new(header).fg(colors.cell(Role::Label)));
  }
  table.set_header(row);

  for summary in summaries {
    let properties = summary.properties.iter().map(|property| property.label()).join(", ");

    let mut row = Row::new();
    row.add_cell(
      Cell::new(&summary.name)
        .fg(colors.cell(Role::Value))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(summary.kind).fg(colors.cell(Role::Accent)));
    row.add_cell(Cell::new(properties).fg(colors.cell(Role::Primary)));
    row.add_cell(Cell::new(summary.description.as_deref().unwrap_or_default()).fg(colors.cell(Role::Info)));
    table.add_row(row);
  }

  table
}

pub async fn list_schemas(input: &Path, json: bool, colors: &Colors) -> anyhow::Result<()> {
  let summaries = load_summaries(input).await?;

  if json {
    println!("{}", serde_json::to_string_pretty(&summaries)?);
  } else {
    println!("{}", summary_table(&summaries, colors));
  }

  Ok(())
}
