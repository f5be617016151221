use super::literals::escape_comment;

/// Javadoc text, one entry per line, already safe to place inside `/** */`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
  lines: Vec<String>,
}

impl Documentation {
  #[must_use]
  pub fn from_raw(input: &str) -> Self {
    let escaped = escape_comment(input.trim());
    Self {
      lines: escaped.lines().map(|line| line.trim_end().to_string()).collect(),
    }
  }

  #[must_use]
  pub fn from_optional(desc: Option<&String>) -> Self {
    desc.map_or_else(Self::default, |d| Self::from_raw(d))
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.lines.iter().all(String::is_empty)
  }

  #[must_use]
  pub fn lines(&self) -> &[String] {
    &self.lines
  }
}
