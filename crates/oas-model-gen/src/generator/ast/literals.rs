/// Quotes `value` as a Java string literal.
pub(crate) fn java_string_literal(value: &str) -> String {
  let mut out = String::with_capacity(value.len() + 2);
  out.push('"');
  for c in value.chars() {
    match c {
      '\\' => out.push_str("\\\\"),
      '"' => out.push_str("\\\""),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      '\t' => out.push_str("\\t"),
      c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
      c => out.push(c),
    }
  }
  out.push('"');
  out
}

/// Neutralizes `*/` and `\u` so text can sit inside a block comment.
///
/// javac decodes unicode escapes inside comments too.
pub(crate) fn escape_comment(text: &str) -> String {
  text.replace("*/", "*&#47;").replace("\\u", "&#92;u")
}
