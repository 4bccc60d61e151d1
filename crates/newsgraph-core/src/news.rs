//! News model: the source documents that own facts.

use serde::{Deserialize, Serialize};

/// A source news item. Deleting a News cascades to the Facts it owns but
/// never to the entities those Facts reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct News {
  #[serde(rename = "entityID")]
  pub entity_id: String,
  /// Source URL.
  pub link:      String,
  /// Category tags, e.g. "Politics", "Education".
  pub topics:    Vec<String>,
}
