use std::{ffi::OsStr, path::Path};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::document::{SchemaDocument, SpecFormat};

/// A memory-mapped spec file and the format its extension implies.
pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(SpecFormat::default(), SpecFormat::from_extension);

    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("Failed to open spec file {}", path.display()))?;

    Ok(Self { file, format })
  }

  pub fn text(&self) -> anyhow::Result<&str> {
    std::str::from_utf8(self.file.as_slice()).context("Spec file is not valid UTF-8")
  }

  pub fn parse(&self) -> anyhow::Result<SchemaDocument> {
    SchemaDocument::parse_as(self.text()?, self.format).with_context(|| format!("Failed to parse spec as {}", self.format))
  }
}
