//! The `GraphStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `newsgraph-store-neo4j`).
//! Higher layers (`newsgraph-api`, `newsgraph-server`) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  entity::{Entity, EntityInput, SearchHit},
  envelope::GraphEnvelope,
  fact::{FactDetail, FactSpec},
  news::News,
  vocab::EntityKind,
};

/// Abstraction over the fact-graph backend.
///
/// Point lookups return `Option` rather than erroring: an empty result means
/// "not found" and the caller decides what that means for its request.
/// Mutations that depend on referenced rows existing likewise signal the
/// missing reference through an empty result, never a panic.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`). Methods that
/// borrow request data tie the future to that borrow with an explicit
/// lifetime.
pub trait GraphStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Entities ──────────────────────────────────────────────────────────

  /// List entities of one kind, ordered by `entityID`, within the window.
  fn list_entities(
    &self,
    kind: EntityKind,
    start: i64,
    limit: i64,
  ) -> impl Future<Output = Result<Vec<Entity>, Self::Error>> + Send + '_;

  /// Point lookup by `entityID`. Returns `None` if not found.
  fn get_entity<'a>(
    &'a self,
    kind: EntityKind,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Entity>, Self::Error>> + Send + 'a;

  /// Create a node of the given kind. Uniqueness of the id is the caller's
  /// pre-check; the store does not enforce it atomically.
  fn create_entity<'a>(
    &'a self,
    kind: EntityKind,
    input: &'a EntityInput,
  ) -> impl Future<Output = Result<Entity, Self::Error>> + Send + 'a;

  /// Full replace of `name`/`des`, keyed by `entityID`. Returns `None` if
  /// the id does not exist.
  fn update_entity<'a>(
    &'a self,
    kind: EntityKind,
    id: &'a str,
    input: &'a EntityInput,
  ) -> impl Future<Output = Result<Option<Entity>, Self::Error>> + Send + 'a;

  /// Whether any Fact has an edge into this entity. Checked before delete.
  fn entity_is_referenced<'a>(
    &'a self,
    kind: EntityKind,
    id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Unconditional detach-delete. Returns the number of nodes removed.
  fn delete_entity<'a>(
    &'a self,
    kind: EntityKind,
    id: &'a str,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + 'a;

  /// Relevance-ranked full-text search over one kind's index; `Time` falls
  /// back to a substring match on its date description. The offset window is
  /// applied over the ranked result set.
  fn search_entities<'a>(
    &'a self,
    kind: EntityKind,
    text: &'a str,
    start: i64,
    limit: i64,
  ) -> impl Future<Output = Result<Vec<SearchHit>, Self::Error>> + Send + 'a;

  /// Collapse a set of same-kind nodes into one surviving node, combining
  /// `name`/`des` and re-pointing every incident relationship. Returns the
  /// survivor, or `None` when no supplied id resolved to a node of the kind.
  fn merge_entities<'a>(
    &'a self,
    kind: EntityKind,
    ids: &'a [String],
  ) -> impl Future<Output = Result<Option<Entity>, Self::Error>> + Send + 'a;

  // ── News ──────────────────────────────────────────────────────────────

  fn list_news(
    &self,
    start: i64,
    limit: i64,
  ) -> impl Future<Output = Result<Vec<News>, Self::Error>> + Send + '_;

  fn get_news<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<News>, Self::Error>> + Send + 'a;

  fn create_news<'a>(
    &'a self,
    news: &'a News,
  ) -> impl Future<Output = Result<News, Self::Error>> + Send + 'a;

  fn update_news<'a>(
    &'a self,
    id: &'a str,
    news: &'a News,
  ) -> impl Future<Output = Result<Option<News>, Self::Error>> + Send + 'a;

  /// Delete a News item and cascade to the Facts it owns. Entities the facts
  /// referenced are left in place. Returns the number of News nodes removed.
  fn delete_news<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + 'a;

  /// Substring match over News `link`, windowed in the store.
  fn search_news<'a>(
    &'a self,
    text: &'a str,
    start: i64,
    limit: i64,
  ) -> impl Future<Output = Result<Vec<News>, Self::Error>> + Send + 'a;

  /// Substring match over one kind's `des` property. Unlike
  /// [`search_entities`](GraphStore::search_entities) this is exact matching,
  /// not relevance-ranked, and is not windowed.
  fn search_typed_entities<'a>(
    &'a self,
    kind: EntityKind,
    text: &'a str,
  ) -> impl Future<Output = Result<Vec<Entity>, Self::Error>> + Send + 'a;

  // ── Facts ─────────────────────────────────────────────────────────────

  /// Whether a Fact node with this id already exists anywhere in the graph.
  fn fact_exists<'a>(
    &'a self,
    fact_id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Create the Fact node plus its 2-4 edges in one statement. Returns the
  /// created fact's id, or `None` when the News item or any referenced
  /// mandatory entity did not resolve (nothing is persisted in that case).
  fn create_fact<'a>(
    &'a self,
    news_id: &'a str,
    spec: &'a FactSpec,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Delete one Fact of one News item. Returns the number of Fact nodes
  /// removed.
  fn delete_fact<'a>(
    &'a self,
    news_id: &'a str,
    fact_id: &'a str,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + 'a;

  /// Every Fact of a News item flattened to its id slots.
  fn detailed_facts<'a>(
    &'a self,
    news_id: &'a str,
  ) -> impl Future<Output = Result<Vec<FactDetail>, Self::Error>> + Send + 'a;

  // ── Subgraph reads ────────────────────────────────────────────────────

  /// The full fact subgraph of one News item.
  fn news_relations<'a>(
    &'a self,
    news_id: &'a str,
  ) -> impl Future<Output = Result<GraphEnvelope, Self::Error>> + Send + 'a;

  /// The combined fact subgraph of a set of News items. The set is deduped
  /// and silently truncated to the configured cap before querying.
  fn news_set_relations<'a>(
    &'a self,
    news_ids: &'a [String],
  ) -> impl Future<Output = Result<GraphEnvelope, Self::Error>> + Send + 'a;

  /// One News item's subgraph filtered to entities of the given kinds.
  fn news_relations_of_kinds<'a>(
    &'a self,
    news_id: &'a str,
    kinds: &'a [EntityKind],
  ) -> impl Future<Output = Result<GraphEnvelope, Self::Error>> + Send + 'a;

  /// The News-set subgraph filtered to entities of the given kinds.
  fn news_set_relations_of_kinds<'a>(
    &'a self,
    news_ids: &'a [String],
    kinds: &'a [EntityKind],
  ) -> impl Future<Output = Result<GraphEnvelope, Self::Error>> + Send + 'a;

  /// Facts of one News item that touch one entity.
  fn entity_relations_in_news<'a>(
    &'a self,
    news_id: &'a str,
    entity_id: &'a str,
  ) -> impl Future<Output = Result<GraphEnvelope, Self::Error>> + Send + 'a;

  /// Facts across a News set that touch one entity.
  fn entity_relations_in_news_set<'a>(
    &'a self,
    news_ids: &'a [String],
    entity_id: &'a str,
  ) -> impl Future<Output = Result<GraphEnvelope, Self::Error>> + Send + 'a;

  // ── Appearance counts ─────────────────────────────────────────────────

  /// How many Facts of one News item reference the entity.
  fn appearance_in_news<'a>(
    &'a self,
    news_id: &'a str,
    entity_id: &'a str,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + 'a;

  /// How many Facts across a News set reference the entity.
  fn appearance_in_news_set<'a>(
    &'a self,
    news_ids: &'a [String],
    entity_id: &'a str,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + 'a;
}
