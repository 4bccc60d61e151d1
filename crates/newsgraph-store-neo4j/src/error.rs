//! Error types for `newsgraph-store-neo4j`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Driver-level failure: connectivity, protocol, or a query the server
  /// rejected.
  #[error("neo4j error: {0}")]
  Neo4j(#[from] neo4rs::Error),

  /// A row came back without a column the projection promised, or with an
  /// unexpected type in it.
  #[error("failed to decode row: {0}")]
  Decode(String),

  /// A subgraph row referenced a node that never appeared in the result.
  #[error("relationship references an absent node")]
  DanglingRelationship,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
