//! The Neo4j-backed [`GraphStore`] implementation.
//!
//! Label and relationship-type tokens are interpolated into query text only
//! after passing the closed vocabularies in `newsgraph-core`; every
//! client-supplied value travels as a bound parameter.

use neo4rs::{query, Graph, Query, Row};
use newsgraph_core::{
  entity::{Entity, EntityInput, PropText, SearchHit},
  envelope::GraphEnvelope,
  fact::{FactDetail, FactSpec},
  news::News,
  store::GraphStore,
  vocab::{EntityKind, HAS_FACT, OCCURRED_IN, OCCURRED_ON},
};
use serde_json::Map;

use crate::{
  error::{Error, Result},
  serialize::{text_prop, GraphResult, RawNode, RawRel},
};

// ─── Projections ─────────────────────────────────────────────────────────────

/// Scalar projection of one entity node bound as `n`.
///
/// `name`/`des` are scalars on fresh nodes and lists after a merge, and
/// `Time.des` is a native date, so each property is normalized in the query
/// to a stringified list plus a was-it-a-list flag. `[] + x` wraps a scalar
/// into a singleton list, concatenates a list, and propagates null.
const ENTITY_PROJECTION: &str = "n.entityID AS entityID, \
   [v IN [] + coalesce(n.name, []) | toString(v)] AS nameVals, \
   n.name = [] + n.name AS nameIsList, \
   [v IN [] + coalesce(n.des, []) | toString(v)] AS desVals, \
   n.des = [] + n.des AS desIsList";

/// The same normalization for subgraph rows, which carry a
/// (fact, relationship, entity) triple per row.
const SUBGRAPH_PROJECTION: &str = "id(fact) AS factRef, fact.entityID AS factId, labels(fact) AS factLabels, \
   id(rel) AS relRef, type(rel) AS relType, \
   id(entity) AS entityRef, entity.entityID AS entityId, labels(entity) AS entityLabels, \
   [v IN [] + coalesce(entity.name, []) | toString(v)] AS nameVals, \
   entity.name = [] + entity.name AS nameIsList, \
   [v IN [] + coalesce(entity.des, []) | toString(v)] AS desVals, \
   entity.des = [] + entity.des AS desIsList";

// ─── Store ───────────────────────────────────────────────────────────────────

/// Operational caps, configured once at startup.
#[derive(Debug, Clone, Copy)]
pub struct StoreLimits {
  /// Maximum size of a News-id set in set-scoped reads; larger sets are
  /// silently truncated after dedup.
  pub limit_news: usize,
}

impl Default for StoreLimits {
  fn default() -> Self {
    StoreLimits { limit_news: 1000 }
  }
}

#[derive(Clone)]
pub struct Neo4jStore {
  graph:  Graph,
  limits: StoreLimits,
}

impl Neo4jStore {
  pub fn new(graph: Graph, limits: StoreLimits) -> Self {
    Neo4jStore { graph, limits }
  }

  fn capped_id_set(&self, ids: &[String]) -> Vec<String> {
    capped_id_set(ids, self.limits.limit_news)
  }

  async fn fetch_entities(&self, q: Query) -> Result<Vec<Entity>> {
    let mut stream = self.graph.execute(q).await?;
    let mut entities = Vec::new();
    while let Some(row) = stream.next().await? {
      entities.push(decode_entity(&row)?);
    }
    Ok(entities)
  }

  async fn fetch_optional_entity(&self, q: Query) -> Result<Option<Entity>> {
    let mut stream = self.graph.execute(q).await?;
    match stream.next().await? {
      Some(row) => Ok(Some(decode_entity(&row)?)),
      None => Ok(None),
    }
  }

  async fn fetch_news(&self, q: Query) -> Result<Vec<News>> {
    let mut stream = self.graph.execute(q).await?;
    let mut items = Vec::new();
    while let Some(row) = stream.next().await? {
      items.push(decode_news(&row)?);
    }
    Ok(items)
  }

  async fn fetch_count(&self, q: Query, column: &str) -> Result<i64> {
    let mut stream = self.graph.execute(q).await?;
    match stream.next().await? {
      Some(row) => col(&row, column),
      None => Ok(0),
    }
  }

  /// Run a subgraph query and assemble its (fact, rel, entity) rows into an
  /// envelope, deduping on internal ids in first-seen order.
  async fn fetch_subgraph(&self, q: Query) -> Result<GraphEnvelope> {
    let mut stream = self.graph.execute(q).await?;
    let mut result = GraphResult::default();
    while let Some(row) = stream.next().await? {
      let fact_ref: i64 = col(&row, "factRef")?;
      let entity_ref: i64 = col(&row, "entityRef")?;

      result.push_node(RawNode {
        ref_id:      fact_ref,
        business_id: col(&row, "factId")?,
        labels:      col(&row, "factLabels")?,
        properties:  Map::new(),
      });

      let mut properties = Map::new();
      if let Some(v) = text_prop(col(&row, "nameVals")?, col(&row, "nameIsList")?) {
        properties.insert("name".to_owned(), v);
      }
      if let Some(v) = text_prop(col(&row, "desVals")?, col(&row, "desIsList")?) {
        properties.insert("des".to_owned(), v);
      }
      result.push_node(RawNode {
        ref_id: entity_ref,
        business_id: col(&row, "entityId")?,
        labels: col(&row, "entityLabels")?,
        properties,
      });

      result.push_rel(RawRel {
        ref_id:    col(&row, "relRef")?,
        rel_type:  col(&row, "relType")?,
        start_ref: fact_ref,
        end_ref:   entity_ref,
      });
    }
    result.into_envelope()
  }
}

// ─── Row decoding ────────────────────────────────────────────────────────────

fn col<T: serde::de::DeserializeOwned>(row: &Row, name: &str) -> Result<T> {
  row
    .get::<T>(name)
    .map_err(|e| Error::Decode(format!("{name}: {e}")))
}

pub(crate) fn prop_text(values: Vec<String>, is_list: Option<bool>) -> PropText {
  if is_list == Some(true) {
    PropText::Many(values)
  } else {
    PropText::One(values.into_iter().next().unwrap_or_default())
  }
}

fn decode_entity(row: &Row) -> Result<Entity> {
  Ok(Entity {
    entity_id:   col(row, "entityID")?,
    name:        prop_text(col(row, "nameVals")?, col(row, "nameIsList")?),
    description: prop_text(col(row, "desVals")?, col(row, "desIsList")?),
  })
}

fn decode_news(row: &Row) -> Result<News> {
  Ok(News {
    entity_id: col(row, "entityID")?,
    link:      col(row, "link")?,
    topics:    col(row, "topics")?,
  })
}

/// The `des` write expression for a kind: Time descriptions are stored as
/// native dates so range queries stay possible, everything else as text.
fn des_expr(kind: EntityKind) -> &'static str {
  if kind.has_date_description() {
    "date($des)"
  } else {
    "$des"
  }
}

// ─── GraphStore impl ─────────────────────────────────────────────────────────

impl GraphStore for Neo4jStore {
  type Error = Error;

  // ── Entities ──────────────────────────────────────────────────────────

  async fn list_entities(
    &self,
    kind: EntityKind,
    start: i64,
    limit: i64,
  ) -> Result<Vec<Entity>> {
    let statement = format!(
      "MATCH (n:{label}) RETURN {ENTITY_PROJECTION} \
       ORDER BY entityID SKIP $start LIMIT $limit",
      label = kind.label(),
    );
    self
      .fetch_entities(query(&statement).param("start", start).param("limit", limit))
      .await
  }

  async fn get_entity(&self, kind: EntityKind, id: &str) -> Result<Option<Entity>> {
    let statement = format!(
      "MATCH (n:{label} {{entityID: $id}}) RETURN {ENTITY_PROJECTION}",
      label = kind.label(),
    );
    self
      .fetch_optional_entity(query(&statement).param("id", id))
      .await
  }

  async fn create_entity(&self, kind: EntityKind, input: &EntityInput) -> Result<Entity> {
    let statement = format!(
      "CREATE (n:{label} {{entityID: $id, name: $name, des: {des}}}) \
       RETURN {ENTITY_PROJECTION}",
      label = kind.label(),
      des = des_expr(kind),
    );
    let q = query(&statement)
      .param("id", input.entity_id.as_str())
      .param("name", input.name.as_str())
      .param("des", input.des.as_str());
    self
      .fetch_optional_entity(q)
      .await?
      .ok_or_else(|| Error::Decode("create returned no row".to_owned()))
  }

  async fn update_entity(
    &self,
    kind: EntityKind,
    id: &str,
    input: &EntityInput,
  ) -> Result<Option<Entity>> {
    let statement = format!(
      "MATCH (n:{label} {{entityID: $id}}) \
       SET n.entityID = $new_id, n.name = $name, n.des = {des} \
       RETURN {ENTITY_PROJECTION}",
      label = kind.label(),
      des = des_expr(kind),
    );
    let q = query(&statement)
      .param("id", id)
      .param("new_id", input.entity_id.as_str())
      .param("name", input.name.as_str())
      .param("des", input.des.as_str());
    self.fetch_optional_entity(q).await
  }

  async fn entity_is_referenced(&self, kind: EntityKind, id: &str) -> Result<bool> {
    let statement = format!(
      "MATCH (fact:Fact)-[]->(:{label} {{entityID: $id}}) \
       RETURN count(fact) AS appearances",
      label = kind.label(),
    );
    let count = self
      .fetch_count(query(&statement).param("id", id), "appearances")
      .await?;
    Ok(count > 0)
  }

  async fn delete_entity(&self, kind: EntityKind, id: &str) -> Result<u64> {
    let statement = format!(
      "MATCH (n:{label} {{entityID: $id}}) \
       WITH collect(n) AS nodes \
       FOREACH (n IN nodes | DETACH DELETE n) \
       RETURN size(nodes) AS deleted",
      label = kind.label(),
    );
    let deleted = self
      .fetch_count(query(&statement).param("id", id), "deleted")
      .await?;
    Ok(deleted.max(0) as u64)
  }

  async fn search_entities(
    &self,
    kind: EntityKind,
    text: &str,
    start: i64,
    limit: i64,
  ) -> Result<Vec<SearchHit>> {
    match kind.fulltext_index() {
      Some(index) => {
        // The index returns the whole ranked set; the window is applied over
        // it here, so an offset past the index cap yields an empty page.
        let statement = format!(
          "CALL db.index.fulltext.queryNodes($index, $text) \
           YIELD node, score \
           WITH node AS n, score \
           RETURN {ENTITY_PROJECTION}, score \
           ORDER BY score DESC"
        );
        let q = query(&statement).param("index", index).param("text", text);
        let mut stream = self.graph.execute(q).await?;
        let mut hits = Vec::new();
        while let Some(row) = stream.next().await? {
          hits.push(SearchHit {
            entity: decode_entity(&row)?,
            score:  Some(col(&row, "score")?),
          });
        }
        Ok(
          hits
            .into_iter()
            .skip(start.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect(),
        )
      }
      // Time has no prose to index; match its date text directly.
      None => {
        let statement = format!(
          "MATCH (n:{label}) \
           WHERE toString(n.des) CONTAINS $text OR n.name CONTAINS $text \
           RETURN {ENTITY_PROJECTION} \
           ORDER BY entityID SKIP $start LIMIT $limit",
          label = kind.label(),
        );
        let q = query(&statement)
          .param("text", text)
          .param("start", start)
          .param("limit", limit);
        let entities = self.fetch_entities(q).await?;
        Ok(
          entities
            .into_iter()
            .map(|entity| SearchHit {
              entity,
              score: None,
            })
            .collect(),
        )
      }
    }
  }

  async fn merge_entities(&self, kind: EntityKind, ids: &[String]) -> Result<Option<Entity>> {
    // Merge groups are deduped but never truncated: the News-set cap bounds
    // read fan-out only, and a silently dropped id would leave that node
    // unmerged.
    let id_set = id_set(ids);
    let statement = format!(
      "UNWIND $id_set AS entity_id \
       MATCH (node:{label} {{entityID: entity_id}}) \
       WITH collect(node) AS nodes \
       WHERE size(nodes) > 0 \
       CALL apoc.refactor.mergeNodes(nodes, \
           {{properties: {{entityID: 'discard', name: 'combine', des: 'combine'}}, \
             mergeRels: true}}) \
       YIELD node \
       WITH node AS n \
       RETURN {ENTITY_PROJECTION}",
      label = kind.label(),
    );
    self
      .fetch_optional_entity(query(&statement).param("id_set", id_set))
      .await
  }

  // ── News ──────────────────────────────────────────────────────────────

  async fn list_news(&self, start: i64, limit: i64) -> Result<Vec<News>> {
    let q = query(
      "MATCH (news:News) \
       RETURN news.entityID AS entityID, news.link AS link, \
              coalesce(news.topics, []) AS topics \
       ORDER BY entityID SKIP $start LIMIT $limit",
    )
    .param("start", start)
    .param("limit", limit);
    self.fetch_news(q).await
  }

  async fn get_news(&self, id: &str) -> Result<Option<News>> {
    let q = query(
      "MATCH (news:News {entityID: $id}) \
       RETURN news.entityID AS entityID, news.link AS link, \
              coalesce(news.topics, []) AS topics",
    )
    .param("id", id);
    let mut stream = self.graph.execute(q).await?;
    match stream.next().await? {
      Some(row) => Ok(Some(decode_news(&row)?)),
      None => Ok(None),
    }
  }

  async fn create_news(&self, news: &News) -> Result<News> {
    let q = query(
      "CREATE (news:News {entityID: $id, link: $link, topics: $topics}) \
       RETURN news.entityID AS entityID, news.link AS link, \
              coalesce(news.topics, []) AS topics",
    )
    .param("id", news.entity_id.as_str())
    .param("link", news.link.as_str())
    .param("topics", news.topics.clone());
    let mut created = self.fetch_news(q).await?;
    created
      .pop()
      .ok_or_else(|| Error::Decode("create returned no row".to_owned()))
  }

  async fn update_news(&self, id: &str, news: &News) -> Result<Option<News>> {
    let q = query(
      "MATCH (news:News {entityID: $id}) \
       SET news.entityID = $new_id, news.link = $link, news.topics = $topics \
       RETURN news.entityID AS entityID, news.link AS link, \
              coalesce(news.topics, []) AS topics",
    )
    .param("id", id)
    .param("new_id", news.entity_id.as_str())
    .param("link", news.link.as_str())
    .param("topics", news.topics.clone());
    Ok(self.fetch_news(q).await?.pop())
  }

  async fn delete_news(&self, id: &str) -> Result<u64> {
    let statement = format!(
      "MATCH (news:News {{entityID: $id}}) \
       OPTIONAL MATCH (news)-[:{HAS_FACT}]->(fact:Fact) \
       WITH news, collect(fact) AS facts \
       FOREACH (f IN facts | DETACH DELETE f) \
       DETACH DELETE news \
       RETURN count(news) AS deleted"
    );
    let deleted = self
      .fetch_count(query(&statement).param("id", id), "deleted")
      .await?;
    Ok(deleted.max(0) as u64)
  }

  async fn search_news(&self, text: &str, start: i64, limit: i64) -> Result<Vec<News>> {
    let q = query(
      "MATCH (news:News) \
       WHERE news.link CONTAINS $text \
       RETURN news.entityID AS entityID, news.link AS link, \
              coalesce(news.topics, []) AS topics \
       ORDER BY entityID SKIP $start LIMIT $limit",
    )
    .param("text", text)
    .param("start", start)
    .param("limit", limit);
    self.fetch_news(q).await
  }

  async fn search_typed_entities(&self, kind: EntityKind, text: &str) -> Result<Vec<Entity>> {
    let statement = format!(
      "MATCH (n:{label}) \
       WHERE toString(n.des) CONTAINS $text \
       RETURN {ENTITY_PROJECTION}",
      label = kind.label(),
    );
    self.fetch_entities(query(&statement).param("text", text)).await
  }

  // ── Facts ─────────────────────────────────────────────────────────────

  async fn fact_exists(&self, fact_id: &str) -> Result<bool> {
    let q = query("MATCH (fact:Fact {entityID: $id}) RETURN count(fact) AS matches")
      .param("id", fact_id);
    Ok(self.fetch_count(q, "matches").await? > 0)
  }

  async fn create_fact(&self, news_id: &str, spec: &FactSpec) -> Result<Option<String>> {
    // News, subject and object are mandatory: a failed MATCH yields zero
    // rows and nothing is created. Time and location are optional, matched
    // against an empty id when absent so the OPTIONAL MATCH misses and the
    // FOREACH guard skips the edge.
    let statement = format!(
      "MATCH (news:News {{entityID: $id_news}}), \
             (sub:{sub_label} {{entityID: $id_subject}}), \
             (obj:{obj_label} {{entityID: $id_object}}) \
       OPTIONAL MATCH (loc:{loc_label} {{entityID: $id_location}}) \
       OPTIONAL MATCH (time:Time {{entityID: $id_time}}) \
       CREATE (fact:Fact {{entityID: $id_fact}}), \
              (news)-[:{HAS_FACT}]->(fact), \
              (fact)-[:`{subject_edge}`]->(sub), \
              (fact)-[:`{object_edge}`]->(obj) \
       FOREACH (_ IN CASE WHEN loc IS NOT NULL THEN [1] ELSE [] END | \
           CREATE (fact)-[:{OCCURRED_IN}]->(loc)) \
       FOREACH (_ IN CASE WHEN time IS NOT NULL THEN [1] ELSE [] END | \
           CREATE (fact)-[:{OCCURRED_ON}]->(time)) \
       RETURN fact.entityID AS factID",
      sub_label = spec.subject_kind.label(),
      obj_label = spec.object_kind.label(),
      loc_label = spec.location_kind.label(),
      subject_edge = spec.relation.subject_edge(),
      object_edge = spec.relation.object_edge(),
    );
    let q = query(&statement)
      .param("id_news", news_id)
      .param("id_fact", spec.entity_id.as_str())
      .param("id_subject", spec.subject_id.as_str())
      .param("id_object", spec.object_id.as_str())
      .param("id_location", spec.location_id.as_deref().unwrap_or(""))
      .param("id_time", spec.time_id.as_deref().unwrap_or(""));

    let mut stream = self.graph.execute(q).await?;
    match stream.next().await? {
      Some(row) => Ok(Some(col(&row, "factID")?)),
      None => Ok(None),
    }
  }

  async fn delete_fact(&self, news_id: &str, fact_id: &str) -> Result<u64> {
    let statement = format!(
      "MATCH (news:News {{entityID: $id_news}})-[:{HAS_FACT}]->(fact:Fact {{entityID: $id_fact}}) \
       WITH collect(fact) AS facts \
       FOREACH (f IN facts | DETACH DELETE f) \
       RETURN size(facts) AS deleted"
    );
    let q = query(&statement)
      .param("id_news", news_id)
      .param("id_fact", fact_id);
    let deleted = self.fetch_count(q, "deleted").await?;
    Ok(deleted.max(0) as u64)
  }

  async fn detailed_facts(&self, news_id: &str) -> Result<Vec<FactDetail>> {
    let statement = format!(
      "MATCH (news:News {{entityID: $id_news}})-[:{HAS_FACT}]->(fact:Fact) \
       MATCH (fact)-[r]->(entity) \
       RETURN fact.entityID AS factID, \
              collect(type(r)) AS predicates, \
              collect(entity.entityID) AS entityIds"
    );
    let mut stream = self
      .graph
      .execute(query(&statement).param("id_news", news_id))
      .await?;
    let mut facts = Vec::new();
    while let Some(row) = stream.next().await? {
      let fact_id: String = col(&row, "factID")?;
      let predicates: Vec<String> = col(&row, "predicates")?;
      let entity_ids: Vec<String> = col(&row, "entityIds")?;
      let edges: Vec<(String, String)> =
        predicates.into_iter().zip(entity_ids).collect();
      facts.push(FactDetail::from_edges(fact_id, &edges));
    }
    Ok(facts)
  }

  // ── Subgraph reads ────────────────────────────────────────────────────

  async fn news_relations(&self, news_id: &str) -> Result<GraphEnvelope> {
    let statement = format!(
      "MATCH (news:News {{entityID: $id_news}})-[:{HAS_FACT}]->(fact:Fact)-[rel]->(entity) \
       RETURN {SUBGRAPH_PROJECTION}"
    );
    self
      .fetch_subgraph(query(&statement).param("id_news", news_id))
      .await
  }

  async fn news_set_relations(&self, news_ids: &[String]) -> Result<GraphEnvelope> {
    let statement = format!(
      "UNWIND $id_set AS news_id \
       MATCH (news:News {{entityID: news_id}})-[:{HAS_FACT}]->(fact:Fact)-[rel]->(entity) \
       RETURN {SUBGRAPH_PROJECTION}"
    );
    self
      .fetch_subgraph(query(&statement).param("id_set", self.capped_id_set(news_ids)))
      .await
  }

  async fn news_relations_of_kinds(
    &self,
    news_id: &str,
    kinds: &[EntityKind],
  ) -> Result<GraphEnvelope> {
    let statement = format!(
      "MATCH (news:News {{entityID: $id_news}})-[:{HAS_FACT}]->(fact:Fact)-[rel]->(entity) \
       WHERE any(label IN labels(entity) WHERE label IN $labels) \
       RETURN {SUBGRAPH_PROJECTION}"
    );
    let q = query(&statement)
      .param("id_news", news_id)
      .param("labels", kind_labels(kinds));
    self.fetch_subgraph(q).await
  }

  async fn news_set_relations_of_kinds(
    &self,
    news_ids: &[String],
    kinds: &[EntityKind],
  ) -> Result<GraphEnvelope> {
    let statement = format!(
      "UNWIND $id_set AS news_id \
       MATCH (news:News {{entityID: news_id}})-[:{HAS_FACT}]->(fact:Fact)-[rel]->(entity) \
       WHERE any(label IN labels(entity) WHERE label IN $labels) \
       RETURN {SUBGRAPH_PROJECTION}"
    );
    let q = query(&statement)
      .param("id_set", self.capped_id_set(news_ids))
      .param("labels", kind_labels(kinds));
    self.fetch_subgraph(q).await
  }

  async fn entity_relations_in_news(
    &self,
    news_id: &str,
    entity_id: &str,
  ) -> Result<GraphEnvelope> {
    // Anchor on the entity first, then expand every edge of the anchored
    // facts so the whole fact is returned, not just the anchoring edge.
    let statement = format!(
      "MATCH (news:News {{entityID: $id_news}})-[:{HAS_FACT}]->(fact:Fact)-[]->({{entityID: $id_entity}}) \
       WITH fact \
       MATCH (fact)-[rel]->(entity) \
       RETURN {SUBGRAPH_PROJECTION}"
    );
    let q = query(&statement)
      .param("id_news", news_id)
      .param("id_entity", entity_id);
    self.fetch_subgraph(q).await
  }

  async fn entity_relations_in_news_set(
    &self,
    news_ids: &[String],
    entity_id: &str,
  ) -> Result<GraphEnvelope> {
    let statement = format!(
      "UNWIND $id_set AS news_id \
       MATCH (news:News {{entityID: news_id}})-[:{HAS_FACT}]->(fact:Fact)-[]->({{entityID: $id_entity}}) \
       WITH fact \
       MATCH (fact)-[rel]->(entity) \
       RETURN {SUBGRAPH_PROJECTION}"
    );
    let q = query(&statement)
      .param("id_set", self.capped_id_set(news_ids))
      .param("id_entity", entity_id);
    self.fetch_subgraph(q).await
  }

  // ── Appearance counts ─────────────────────────────────────────────────

  async fn appearance_in_news(&self, news_id: &str, entity_id: &str) -> Result<i64> {
    let statement = format!(
      "MATCH (news:News {{entityID: $id_news}})-[:{HAS_FACT}]->(fact:Fact)-[]->({{entityID: $id_entity}}) \
       RETURN count(fact) AS appearances"
    );
    let q = query(&statement)
      .param("id_news", news_id)
      .param("id_entity", entity_id);
    self.fetch_count(q, "appearances").await
  }

  async fn appearance_in_news_set(
    &self,
    news_ids: &[String],
    entity_id: &str,
  ) -> Result<i64> {
    let statement = format!(
      "UNWIND $id_set AS news_id \
       MATCH (news:News {{entityID: news_id}})-[:{HAS_FACT}]->(fact:Fact)-[]->({{entityID: $id_entity}}) \
       RETURN count(fact) AS appearances"
    );
    let q = query(&statement)
      .param("id_set", self.capped_id_set(news_ids))
      .param("id_entity", entity_id);
    self.fetch_count(q, "appearances").await
  }
}

pub(crate) fn kind_labels(kinds: &[EntityKind]) -> Vec<String> {
  let mut seen = std::collections::HashSet::new();
  kinds
    .iter()
    .filter(|k| seen.insert(**k))
    .map(|k| k.label().to_owned())
    .collect()
}

/// Dedup an id set, first occurrence wins.
pub(crate) fn id_set(ids: &[String]) -> Vec<String> {
  let mut seen = std::collections::HashSet::new();
  ids
    .iter()
    .filter(|id| seen.insert(id.as_str()))
    .cloned()
    .collect()
}

/// Dedup a News-id set and truncate it to the cap.
pub(crate) fn capped_id_set(ids: &[String], cap: usize) -> Vec<String> {
  let mut set = id_set(ids);
  set.truncate(cap);
  set
}
