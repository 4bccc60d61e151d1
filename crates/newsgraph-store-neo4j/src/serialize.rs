//! Row-to-envelope assembly.
//!
//! Subgraph queries project one (node, relationship, node) triple per row,
//! flattened to scalar columns. This module accumulates those rows, dedupes
//! on the store-internal reference ids, and emits the portable envelope keyed
//! by business `entityID`s.

use std::collections::{HashMap, HashSet};

use newsgraph_core::envelope::{GraphEnvelope, GraphNode, GraphRelationship};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

// ─── Raw rows ────────────────────────────────────────────────────────────────

/// A node as one subgraph row projects it. `ref_id` is the store-internal
/// id, used only for dedup and endpoint resolution; it never reaches the
/// envelope.
#[derive(Debug, Clone)]
pub struct RawNode {
  pub ref_id:      i64,
  pub business_id: String,
  pub labels:      Vec<String>,
  pub properties:  Map<String, Value>,
}

/// A relationship as one subgraph row projects it, endpoints by `ref_id`.
#[derive(Debug, Clone)]
pub struct RawRel {
  pub ref_id:    i64,
  pub rel_type:  String,
  pub start_ref: i64,
  pub end_ref:   i64,
}

// ─── Property normalization ──────────────────────────────────────────────────

/// Rebuild a text property from its normalized projection.
///
/// Queries project each property as `(values, is_list)` where a scalar
/// becomes a singleton list with `is_list = false`, a merged list stays a
/// list with `is_list = true`, and an absent property projects an empty list
/// with `is_list` null. Dates and any other scalar arrive already stringified
/// by the query's `toString`.
pub fn text_prop(values: Vec<String>, is_list: Option<bool>) -> Option<Value> {
  match is_list {
    Some(true) => Some(Value::Array(
      values.into_iter().map(Value::String).collect(),
    )),
    Some(false) => values.into_iter().next().map(Value::String),
    None => None,
  }
}

// ─── Accumulator ─────────────────────────────────────────────────────────────

/// Accumulates subgraph rows, keeping first-seen order and dropping
/// duplicates by internal reference id.
#[derive(Debug, Default)]
pub struct GraphResult {
  nodes:      Vec<RawNode>,
  rels:       Vec<RawRel>,
  seen_nodes: HashSet<i64>,
  seen_rels:  HashSet<i64>,
}

impl GraphResult {
  pub fn push_node(&mut self, node: RawNode) {
    if self.seen_nodes.insert(node.ref_id) {
      self.nodes.push(node);
    }
  }

  pub fn push_rel(&mut self, rel: RawRel) {
    if self.seen_rels.insert(rel.ref_id) {
      self.rels.push(rel);
    }
  }

  /// Resolve relationship endpoints to business ids and emit the envelope.
  pub fn into_envelope(self) -> Result<GraphEnvelope> {
    let by_ref: HashMap<i64, &str> = self
      .nodes
      .iter()
      .map(|n| (n.ref_id, n.business_id.as_str()))
      .collect();

    let relationships = self
      .rels
      .iter()
      .map(|r| {
        let start_node = by_ref
          .get(&r.start_ref)
          .ok_or(Error::DanglingRelationship)?;
        let end_node = by_ref.get(&r.end_ref).ok_or(Error::DanglingRelationship)?;
        Ok(GraphRelationship {
          id:         r.ref_id.to_string(),
          rel_type:   r.rel_type.clone(),
          start_node: (*start_node).to_owned(),
          end_node:   (*end_node).to_owned(),
          properties: Map::new(),
        })
      })
      .collect::<Result<Vec<_>>>()?;

    let nodes = self
      .nodes
      .into_iter()
      .map(|n| GraphNode {
        id:         n.business_id,
        labels:     n.labels,
        properties: n.properties,
      })
      .collect();

    Ok(GraphEnvelope {
      nodes,
      relationships,
    })
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn node(ref_id: i64, business_id: &str, label: &str) -> RawNode {
    let mut properties = Map::new();
    properties.insert("name".to_owned(), json!(business_id.to_lowercase()));
    RawNode {
      ref_id,
      business_id: business_id.to_owned(),
      labels: vec![label.to_owned()],
      properties,
    }
  }

  #[test]
  fn endpoints_resolve_to_business_ids() {
    let mut result = GraphResult::default();
    result.push_node(node(11, "N1", "News"));
    result.push_node(node(12, "F1", "Fact"));
    result.push_rel(RawRel {
      ref_id:    91,
      rel_type:  "HAS_FACT".to_owned(),
      start_ref: 11,
      end_ref:   12,
    });

    let envelope = result.into_envelope().unwrap();
    assert_eq!(envelope.nodes.len(), 2);
    assert_eq!(envelope.relationships.len(), 1);
    let rel = &envelope.relationships[0];
    assert_eq!(rel.start_node, "N1");
    assert_eq!(rel.end_node, "F1");
    assert_eq!(rel.rel_type, "HAS_FACT");
  }

  #[test]
  fn duplicate_rows_keep_first_seen_order() {
    let mut result = GraphResult::default();
    result.push_node(node(1, "A", "Person"));
    result.push_node(node(2, "B", "Person"));
    result.push_node(node(1, "A", "Person"));
    result.push_rel(RawRel {
      ref_id:    5,
      rel_type:  "HAS_SUBJECT_GẶP_GỠ".to_owned(),
      start_ref: 1,
      end_ref:   2,
    });
    result.push_rel(RawRel {
      ref_id:    5,
      rel_type:  "HAS_SUBJECT_GẶP_GỠ".to_owned(),
      start_ref: 1,
      end_ref:   2,
    });

    let envelope = result.into_envelope().unwrap();
    assert_eq!(
      envelope.nodes.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(),
      ["A", "B"]
    );
    assert_eq!(envelope.relationships.len(), 1);
  }

  #[test]
  fn dangling_endpoint_is_an_error() {
    let mut result = GraphResult::default();
    result.push_node(node(1, "A", "Person"));
    result.push_rel(RawRel {
      ref_id:    5,
      rel_type:  "HAS_FACT".to_owned(),
      start_ref: 1,
      end_ref:   99,
    });
    assert!(matches!(
      result.into_envelope(),
      Err(Error::DanglingRelationship)
    ));
  }

  #[test]
  fn text_prop_rebuilds_scalar_list_and_absent() {
    assert_eq!(
      text_prop(vec!["a".to_owned()], Some(false)),
      Some(json!("a"))
    );
    assert_eq!(
      text_prop(vec!["a".to_owned(), "b".to_owned()], Some(true)),
      Some(json!(["a", "b"]))
    );
    // a merged single-element list stays a list
    assert_eq!(
      text_prop(vec!["a".to_owned()], Some(true)),
      Some(json!(["a"]))
    );
    assert_eq!(text_prop(vec![], None), None);
  }
}
