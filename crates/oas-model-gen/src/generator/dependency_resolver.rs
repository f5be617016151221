//! Transitive `$ref` closure over the schema map.

use std::collections::{BTreeMap, BTreeSet};

use petgraph::{
  algo::kosaraju_scc,
  graphmap::DiGraphMap,
  visit::Dfs,
};

use crate::generator::{
  schema::{PropertyKind, PropertySpec, SchemaMap},
  schema_merger::flatten,
};

/// Outcome of resolving a selection of schema names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
  /// Selected schemas that exist plus everything they reach, sorted by name.
  pub names: Vec<String>,
  /// `$ref` targets missing from the document, keyed by the referring schema.
  pub unresolved: BTreeMap<String, BTreeSet<String>>,
  /// Groups of schemas that reference each other, each group sorted.
  pub cycles: Vec<Vec<String>>,
}

/// Precomputed reference edges of every schema in a document.
#[derive(Debug, Clone)]
pub(crate) struct DependencyResolver<'a> {
  schemas: &'a SchemaMap,
  dependencies: BTreeMap<&'a str, BTreeSet<String>>,
}

impl<'a> DependencyResolver<'a> {
  pub(crate) fn new(schemas: &'a SchemaMap) -> Self {
    let dependencies = schemas
      .iter()
      .map(|(name, schema)| {
        let mut refs = BTreeSet::new();
        collect_branch_refs(&schema.all_of, &mut refs);
        for property in flatten(schema, schemas).properties.values() {
          collect_property_refs(property, &mut refs);
        }
        (name.as_str(), refs)
      })
      .collect();

    Self { schemas, dependencies }
  }

  fn graph(&self) -> DiGraphMap<&str, ()> {
    let mut graph = DiGraphMap::new();
    for (node, deps) in &self.dependencies {
      graph.add_node(*node);
      for dep in deps {
        if let Some((target, _)) = self.schemas.get_key_value(dep.as_str()) {
          graph.add_edge(*node, target.as_str(), ());
        }
      }
    }
    graph
  }

  /// Depth-first closure from each selected name, in caller order.
  ///
  /// Names absent from the document are skipped. Each schema appears once no
  /// matter how many paths reach it, and reference cycles terminate.
  pub(crate) fn resolve<S: AsRef<str>>(&self, selected: &[S]) -> Resolution {
    let graph = self.graph();

    let mut visited = BTreeSet::new();
    let mut dfs = Dfs::empty(&graph);
    for start in selected {
      let start = start.as_ref();
      if !graph.contains_node(start) {
        continue;
      }
      dfs.move_to(start);
      while let Some(node) = dfs.next(&graph) {
        visited.insert(node);
      }
    }

    let unresolved = visited
      .iter()
      .filter_map(|name| {
        let missing: BTreeSet<String> = self
          .dependencies
          .get(name)?
          .iter()
          .filter(|dep| !self.schemas.contains_key(dep.as_str()))
          .cloned()
          .collect();
        (!missing.is_empty()).then(|| ((*name).to_string(), missing))
      })
      .collect();

    Resolution {
      cycles: detect_cycles(&graph, &visited),
      unresolved,
      names: visited.into_iter().map(String::from).collect(),
    }
  }
}

fn detect_cycles(graph: &DiGraphMap<&str, ()>, within: &BTreeSet<&str>) -> Vec<Vec<String>> {
  let mut cycles: Vec<Vec<String>> = kosaraju_scc(graph)
    .into_iter()
    .filter(|scc| scc.iter().all(|node| within.contains(node)))
    .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
    .map(|scc| {
      let mut names: Vec<String> = scc.into_iter().map(String::from).collect();
      names.sort();
      names
    })
    .collect();
  cycles.sort();
  cycles
}

fn collect_branch_refs(branches: &[PropertySpec], refs: &mut BTreeSet<String>) {
  for branch in branches {
    match &branch.kind {
      PropertyKind::Reference(schema_ref) => {
        refs.insert(schema_ref.name.clone());
      }
      PropertyKind::InlineObject(inline) => collect_branch_refs(&inline.all_of, refs),
      _ => {}
    }
  }
}

fn collect_property_refs(property: &PropertySpec, refs: &mut BTreeSet<String>) {
  match &property.kind {
    PropertyKind::Reference(schema_ref) => {
      refs.insert(schema_ref.name.clone());
    }
    PropertyKind::ArrayOf { items: Some(items) } => collect_property_refs(items, refs),
    _ => {}
  }
}

/// Resolves `selected` against `schemas` and returns the sorted closure.
pub fn resolve<S: AsRef<str>>(selected: &[S], schemas: &SchemaMap) -> Vec<String> {
  DependencyResolver::new(schemas).resolve(selected).names
}
