//! The graph envelope: the `{nodes, relationships}` shape every subgraph
//! read returns, ready for client-side graph rendering.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─── Nodes ───────────────────────────────────────────────────────────────────

/// One node of a subgraph result. `id` is the business `entityID`, never a
/// store-internal identifier, and `entityID` is therefore absent from
/// `properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
  pub id:         String,
  pub labels:     Vec<String>,
  pub properties: Map<String, Value>,
}

// ─── Relationships ───────────────────────────────────────────────────────────

/// One relationship of a subgraph result. Endpoints reference node `id`s in
/// the same envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRelationship {
  pub id:         String,
  #[serde(rename = "type")]
  pub rel_type:   String,
  #[serde(rename = "startNode")]
  pub start_node: String,
  #[serde(rename = "endNode")]
  pub end_node:   String,
  /// Always serialized, as `{}` when empty, so the wire shape is stable.
  #[serde(default)]
  pub properties: Map<String, Value>,
}

// ─── Envelope ────────────────────────────────────────────────────────────────

/// A self-contained subgraph: every relationship endpoint resolves to a node
/// in the same envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphEnvelope {
  pub nodes:         Vec<GraphNode>,
  pub relationships: Vec<GraphRelationship>,
}

impl GraphEnvelope {
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty() && self.relationships.is_empty()
  }

  pub fn node(&self, id: &str) -> Option<&GraphNode> {
    self.nodes.iter().find(|n| n.id == id)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn envelope_serializes_with_wire_keys() {
    let envelope = GraphEnvelope {
      nodes:         vec![GraphNode {
        id:         "P1".to_owned(),
        labels:     vec!["Person".to_owned()],
        properties: Map::new(),
      }],
      relationships: vec![GraphRelationship {
        id:         "42".to_owned(),
        rel_type:   "HAS_FACT".to_owned(),
        start_node: "N1".to_owned(),
        end_node:   "F1".to_owned(),
        properties: Map::new(),
      }],
    };

    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["nodes"][0]["id"], "P1");
    assert_eq!(json["relationships"][0]["type"], "HAS_FACT");
    assert_eq!(json["relationships"][0]["startNode"], "N1");
    assert_eq!(json["relationships"][0]["endNode"], "F1");
    // empty relationship properties still serialize as an empty object
    assert_eq!(json["relationships"][0]["properties"], json!({}));
  }

  #[test]
  fn node_lookup_by_business_id() {
    let envelope = GraphEnvelope {
      nodes:         vec![GraphNode {
        id:         "P1".to_owned(),
        labels:     vec!["Person".to_owned()],
        properties: Map::from_iter([("name".to_owned(), json!("Alice"))]),
      }],
      relationships: vec![],
    };
    assert!(envelope.node("P1").is_some());
    assert!(envelope.node("P2").is_none());
    assert!(!envelope.is_empty());
    assert!(GraphEnvelope::default().is_empty());
  }
}
