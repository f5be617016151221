//! End-to-end runs of the `oas-model-gen` binary.

use std::{
  path::{Path, PathBuf},
  process::{Command, Output},
};

fn fixture(name: &str) -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

fn run(args: &[&str]) -> Output {
  Command::new(env!("CARGO_BIN_EXE_oas-model-gen"))
    .args(["--color", "never"])
    .args(args)
    .output()
    .expect("failed to run oas-model-gen")
}

#[test]
fn test_generate_writes_closure() {
  let dir = tempfile::tempdir().unwrap();
  let out = dir.path().join("models");
  let input = fixture("petstore.yaml");

  let output = run(&[
    "generate",
    "-i",
    input.to_str().unwrap(),
    "-o",
    out.to_str().unwrap(),
    "--schemas",
    "Pet",
    "--quiet",
  ]);
  assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

  let mut files: Vec<String> = std::fs::read_dir(&out)
    .unwrap()
    .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
    .collect();
  files.sort();
  assert_eq!(files, ["Category.java", "Pet.java", "PetStatus.java", "Tag.java"]);

  let pet = std::fs::read_to_string(out.join("Pet.java")).unwrap();
  assert!(pet.contains("private Long id;"));
}

#[test]
fn test_generate_archive_only() {
  let dir = tempfile::tempdir().unwrap();
  let archive = dir.path().join("models.zip");
  let input = fixture("swagger_petstore.json");

  let output = run(&[
    "generate",
    "-i",
    input.to_str().unwrap(),
    "--archive",
    archive.to_str().unwrap(),
    "--all-schemas",
    "--quiet",
  ]);
  assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
  assert!(std::fs::metadata(&archive).unwrap().len() > 0);
}

#[test]
fn test_generate_requires_selection() {
  let dir = tempfile::tempdir().unwrap();
  let input = fixture("petstore.yaml");

  let output = run(&[
    "generate",
    "-i",
    input.to_str().unwrap(),
    "-o",
    dir.path().to_str().unwrap(),
  ]);
  assert!(!output.status.success());
  assert!(String::from_utf8_lossy(&output.stderr).contains("No schemas selected"));
}

#[test]
fn test_list_schemas_json() {
  let input = fixture("composition.yaml");
  let output = run(&["list", "schemas", "-i", input.to_str().unwrap(), "--json"]);
  assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

  let summaries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  let names: Vec<&str> = summaries
    .as_array()
    .unwrap()
    .iter()
    .filter_map(|summary| summary["name"].as_str())
    .collect();
  assert_eq!(names, ["Audited", "Document", "Resource"]);
}
