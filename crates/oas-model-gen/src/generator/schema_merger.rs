//! Flattening of `allOf` composition into one effective property set.

use std::collections::{BTreeSet, HashSet};

use indexmap::IndexMap;

use crate::generator::schema::{InlineObject, PropertyKind, PropertySpec, SchemaDefinition, SchemaMap};

/// The effective members of a schema after composition is resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenedSchema {
  pub properties: IndexMap<String, PropertySpec>,
  pub required: BTreeSet<String>,
}

impl FlattenedSchema {
  pub fn is_required(&self, property: &str) -> bool {
    self.required.contains(property)
  }
}

#[derive(Default)]
struct MergeAccumulator<'a> {
  properties: IndexMap<String, PropertySpec>,
  required: BTreeSet<String>,
  visited: HashSet<&'a str>,
}

impl<'a> MergeAccumulator<'a> {
  fn merge_members(&mut self, properties: &IndexMap<String, PropertySpec>, required: &BTreeSet<String>) {
    for (name, property) in properties {
      self.properties.insert(name.clone(), property.clone());
    }
    self.required.extend(required.iter().cloned());
  }

  fn merge_branches(&mut self, branches: &'a [PropertySpec], schemas: &'a SchemaMap) {
    for branch in branches {
      match &branch.kind {
        PropertyKind::Reference(schema_ref) => {
          if let Some((name, target)) = schemas.get_key_value(schema_ref.name.as_str())
            && self.visited.insert(name.as_str())
          {
            self.merge_definition(target, schemas);
          }
        }
        PropertyKind::InlineObject(inline) => self.merge_inline(inline, schemas),
        _ => {}
      }
    }
  }

  fn merge_definition(&mut self, schema: &'a SchemaDefinition, schemas: &'a SchemaMap) {
    self.merge_branches(&schema.all_of, schemas);
    self.merge_members(&schema.properties, &schema.required);
  }

  fn merge_inline(&mut self, inline: &'a InlineObject, schemas: &'a SchemaMap) {
    self.merge_branches(&inline.all_of, schemas);
    self.merge_members(&inline.properties, &inline.required);
  }

  fn finish(self) -> FlattenedSchema {
    FlattenedSchema {
      properties: self.properties,
      required: self.required,
    }
  }
}

/// Resolves `allOf` depth-first in declaration order.
///
/// Referenced schemas are merged recursively and skipped when absent; inline
/// branches are merged directly. The schema's own `properties` are merged last,
/// and a later property with the same name replaces an earlier one while
/// keeping its position. Each referenced schema is merged at most once per call.
pub fn flatten(schema: &SchemaDefinition, schemas: &SchemaMap) -> FlattenedSchema {
  let mut acc = MergeAccumulator::default();
  acc.visited.insert(schema.name.as_str());
  acc.merge_definition(schema, schemas);
  acc.finish()
}
