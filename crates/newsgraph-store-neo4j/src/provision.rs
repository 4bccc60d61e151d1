//! One-shot index provisioning, run at startup.

use neo4rs::{query, Graph};
use newsgraph_core::vocab::EntityKind;

use crate::error::Result;

/// Create the `entityID` range indexes (News plus every entity kind) and the
/// per-kind full-text indexes. Idempotent: `IF NOT EXISTS` makes re-runs
/// no-ops.
pub async fn provision_indexes(graph: &Graph) -> Result<()> {
  graph
    .run(query(
      "CREATE INDEX index_news IF NOT EXISTS FOR (news:News) ON (news.entityID)",
    ))
    .await?;

  for kind in EntityKind::ALL {
    let statement = format!(
      "CREATE INDEX index_{plural} IF NOT EXISTS \
       FOR (n:{label}) ON (n.entityID)",
      plural = kind.plural(),
      label = kind.label(),
    );
    graph.run(query(&statement)).await?;
  }

  for kind in EntityKind::ALL {
    let Some(index) = kind.fulltext_index() else {
      continue;
    };
    let statement = format!(
      "CREATE FULLTEXT INDEX {index} IF NOT EXISTS \
       FOR (n:{label}) ON EACH [n.name, n.des]",
      label = kind.label(),
    );
    tracing::debug!(index, "ensuring full-text index");
    graph.run(query(&statement)).await?;
  }

  Ok(())
}
