use serde_json::json;

use super::support::schema_map;
use crate::generator::dependency_resolver::{DependencyResolver, resolve};

fn store_schemas() -> crate::generator::schema::SchemaMap {
  schema_map(json!({
    "Pet": {
      "properties": {
        "category": { "$ref": "#/components/schemas/Category" },
        "tags": { "type": "array", "items": { "$ref": "#/components/schemas/Tag" } },
        "name": { "type": "string" }
      }
    },
    "Category": { "properties": { "name": { "type": "string" } } },
    "Tag": { "properties": { "name": { "type": "string" } } },
    "Order": { "properties": { "pet": { "$ref": "#/components/schemas/Pet" } } },
    "Unrelated": { "properties": { "x": { "type": "string" } } }
  }))
}

#[test]
fn test_closure_is_sorted() {
  let schemas = store_schemas();
  assert_eq!(resolve(&["Pet"], &schemas), ["Category", "Pet", "Tag"]);
  assert_eq!(resolve(&["Order"], &schemas), ["Category", "Order", "Pet", "Tag"]);
}

#[test]
fn test_selection_order_does_not_matter() {
  let schemas = store_schemas();
  assert_eq!(resolve(&["Tag", "Pet"], &schemas), resolve(&["Pet", "Tag"], &schemas));
}

#[test]
fn test_empty_and_unknown_selection() {
  let schemas = store_schemas();
  assert!(resolve::<&str>(&[], &schemas).is_empty());
  assert!(resolve(&["Missing"], &schemas).is_empty());
  assert_eq!(resolve(&["Missing", "Tag"], &schemas), ["Tag"]);
}

#[test]
fn test_all_of_references_are_dependencies() {
  let schemas = schema_map(json!({
    "Base": { "properties": { "owner": { "$ref": "#/components/schemas/Owner" } } },
    "Owner": { "properties": { "name": { "type": "string" } } },
    "Derived": {
      "allOf": [
        { "$ref": "#/components/schemas/Base" },
        { "properties": { "extra": { "$ref": "#/components/schemas/Extra" } } }
      ]
    },
    "Extra": {}
  }));

  assert_eq!(resolve(&["Derived"], &schemas), ["Base", "Derived", "Extra", "Owner"]);
}

#[test]
fn test_mutual_references_terminate() {
  let schemas = schema_map(json!({
    "Parent": { "properties": { "child": { "$ref": "#/components/schemas/Child" } } },
    "Child": { "properties": { "parent": { "$ref": "#/components/schemas/Parent" } } },
    "Node": { "properties": { "next": { "$ref": "#/components/schemas/Node" } } }
  }));

  let resolution = DependencyResolver::new(&schemas).resolve(&["Parent", "Node"]);
  assert_eq!(resolution.names, ["Child", "Node", "Parent"]);
  assert_eq!(
    resolution.cycles,
    vec![
      vec!["Child".to_string(), "Parent".to_string()],
      vec!["Node".to_string()]
    ]
  );
}

#[test]
fn test_unresolved_references_are_reported() {
  let schemas = schema_map(json!({
    "Pet": {
      "properties": {
        "owner": { "$ref": "#/components/schemas/Owner" },
        "toys": { "type": "array", "items": { "$ref": "#/components/schemas/Toy" } }
      }
    }
  }));

  let resolution = DependencyResolver::new(&schemas).resolve(&["Pet"]);
  assert_eq!(resolution.names, ["Pet"]);
  let missing: Vec<&str> = resolution.unresolved["Pet"].iter().map(String::as_str).collect();
  assert_eq!(missing, ["Owner", "Toy"]);
  assert!(resolution.cycles.is_empty());
}
