use std::io::{Cursor, Write};

use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::generator::orchestrator::GeneratedArtifact;

/// Packs artifacts into an in-memory zip archive, one `{name}.java` member each.
pub fn build_archive(artifacts: &[GeneratedArtifact]) -> anyhow::Result<Vec<u8>> {
  let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
  let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

  for artifact in artifacts {
    writer.start_file(artifact.file_name(), options)?;
    writer.write_all(artifact.code.as_bytes())?;
  }

  Ok(writer.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
  use std::io::Read;

  use zip::ZipArchive;

  use super::*;

  fn artifact(name: &str, code: &str) -> GeneratedArtifact {
    GeneratedArtifact {
      name: name.to_string(),
      code: code.to_string(),
    }
  }

  #[test]
  fn test_archive_members_named_after_schemas() {
    let artifacts = [
      artifact("Category", "public class Category {\n}\n"),
      artifact("Pet", "public class Pet {\n}\n"),
    ];

    let bytes = build_archive(&artifacts).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

    assert_eq!(archive.len(), 2);
    let names: Vec<&str> = archive.file_names().collect();
    assert!(names.contains(&"Category.java"));
    assert!(names.contains(&"Pet.java"));

    let mut contents = String::new();
    archive.by_name("Pet.java").unwrap().read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "public class Pet {\n}\n");
  }

  #[test]
  fn test_empty_archive() {
    let bytes = build_archive(&[]).unwrap();
    let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), 0);
  }
}
