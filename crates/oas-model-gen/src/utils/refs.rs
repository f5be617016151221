/// Parses a schema `$ref` path and extracts the referenced schema name.
///
/// The name is the last segment of the JSON Pointer, so internal references in
/// both layouts resolve the same way:
///
/// - `#/definitions/Pet` (Swagger 2.0)
/// - `#/components/schemas/Pet` (OpenAPI 3.x)
///
/// Pointer escapes (`~1` for `/`, `~0` for `~`) are decoded. Returns `None` when
/// the path has no usable trailing segment.
pub fn parse_schema_ref_path(ref_path: &str) -> Option<String> {
  let fragment = ref_path.rsplit_once('#').map_or(ref_path, |(_, fragment)| fragment);
  let segment = fragment.rsplit('/').next()?.trim();

  if segment.is_empty() {
    return None;
  }

  Some(segment.replace("~1", "/").replace("~0", "~"))
}
